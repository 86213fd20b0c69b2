//! Log subscriber set-up for the `user-registry` binary.
//!
//! Logs go to standard error so that standard output carries only command
//! results.

use std::io;

use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::RegistrySettings;

const FALLBACK_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber described by `settings`.
///
/// An unparsable filter falls back to `warn`. A failure to install (for
/// example, a subscriber already being set) is logged and otherwise ignored.
pub fn init_tracing(settings: &RegistrySettings) {
    let (filter, filter_error) = resolve_filter(settings.log_filter());
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let result = if settings.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
    if let Some(err) = filter_error {
        warn!(
            error = %err,
            filter = settings.log_filter(),
            "invalid log filter, using {FALLBACK_FILTER}"
        );
    }
}

fn resolve_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err)),
    }
}

#[cfg(test)]
mod tests {
    //! Covers log filter resolution.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("debug")]
    #[case("user_registry=info")]
    fn valid_filter_is_kept(#[case] directive: &str) {
        let (filter, error) = resolve_filter(directive);

        assert!(error.is_none());
        assert_eq!(filter.to_string(), directive);
    }

    #[rstest]
    #[case("user_registry=loudest")]
    #[case("info,user_registry=verbose")]
    fn invalid_filter_falls_back_to_warn(#[case] directive: &str) {
        let (filter, error) = resolve_filter(directive);

        assert!(error.is_some());
        assert_eq!(filter.to_string(), FALLBACK_FILTER);
    }
}
