//! Registry configuration loaded via OrthoConfig.
//!
//! Settings come from `USER_REGISTRY_*` environment variables and the
//! OrthoConfig configuration file. Command-line arguments are owned by the
//! [`cli`](crate::cli) parser and are not read here.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::bulk::BulkLayout;
use crate::validation::EmailDomainPolicy;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors raised while loading [`RegistrySettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration sources could not be read or merged.
    #[error("failed to load configuration: {message}")]
    Load {
        /// Description of the loader failure.
        message: String,
    },
}

/// Configuration values controlling validation, bulk import, and logging.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_REGISTRY")]
pub struct RegistrySettings {
    /// Require allowed suffixes at the end of the email domain.
    #[ortho_config(default = false)]
    pub strict_email_domain: bool,
    /// Read bulk files three fields at a time instead of the legacy layout.
    #[ortho_config(default = false)]
    pub chunked_bulk: bool,
    /// Emit log lines as JSON.
    #[ortho_config(default = false)]
    pub log_json: bool,
    /// `tracing` filter directive for log output.
    pub log_filter: Option<String>,
}

impl RegistrySettings {
    /// Loads settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source holds invalid values.
    pub fn load_ambient() -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from("user-registry")]).map_err(|err| ConfigError::Load {
            message: err.to_string(),
        })
    }

    /// Returns the email policy selected by these settings.
    #[must_use]
    pub const fn email_policy(&self) -> EmailDomainPolicy {
        if self.strict_email_domain {
            EmailDomainPolicy::AnchoredDomain
        } else {
            EmailDomainPolicy::Substring
        }
    }

    /// Returns the bulk layout selected by these settings.
    #[must_use]
    pub const fn bulk_layout(&self) -> BulkLayout {
        if self.chunked_bulk {
            BulkLayout::Chunked
        } else {
            BulkLayout::Legacy
        }
    }

    /// Returns the configured log filter, falling back to `warn`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for registry configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("USER_REGISTRY_STRICT_EMAIL_DOMAIN", None::<String>),
            ("USER_REGISTRY_CHUNKED_BULK", None::<String>),
            ("USER_REGISTRY_LOG_JSON", None::<String>),
            ("USER_REGISTRY_LOG_FILTER", None::<String>),
        ]);

        let settings = RegistrySettings::load_ambient().expect("config should load");
        assert_eq!(settings.email_policy(), EmailDomainPolicy::Substring);
        assert_eq!(settings.bulk_layout(), BulkLayout::Legacy);
        assert!(!settings.log_json);
        assert_eq!(settings.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_REGISTRY_STRICT_EMAIL_DOMAIN", Some("true".to_owned())),
            ("USER_REGISTRY_CHUNKED_BULK", Some("true".to_owned())),
            ("USER_REGISTRY_LOG_JSON", Some("true".to_owned())),
            ("USER_REGISTRY_LOG_FILTER", Some("debug".to_owned())),
        ]);

        let settings = RegistrySettings::load_ambient().expect("config should load");
        assert_eq!(settings.email_policy(), EmailDomainPolicy::AnchoredDomain);
        assert_eq!(settings.bulk_layout(), BulkLayout::Chunked);
        assert!(settings.log_json);
        assert_eq!(settings.log_filter(), "debug");
    }

    #[test]
    fn default_settings_keep_legacy_behaviour() {
        let settings = RegistrySettings {
            strict_email_domain: false,
            chunked_bulk: false,
            log_json: false,
            log_filter: None,
        };

        assert_eq!(settings.email_policy(), EmailDomainPolicy::Substring);
        assert_eq!(settings.bulk_layout(), BulkLayout::Legacy);
    }
}
