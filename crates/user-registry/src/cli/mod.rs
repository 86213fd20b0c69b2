//! Command-line front end for validation, registration, and bulk import.
//!
//! The binary delegates to these functions so the dispatch rules can be
//! exercised in tests without spawning a subprocess.

mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

pub use self::error::CliError;
use crate::bulk;
use crate::config::RegistrySettings;
use crate::error::{RegistrationError, ValidationError};
use crate::record::{UserInput, UserRecord};
use crate::registrar::Registrar;
use crate::store::InMemoryUserStore;

/// Message printed when `--bulk` is given without `--file`.
pub const MISSING_BULK_FILE_MESSAGE: &str = "Error: A file should be added to use --bulk.";

/// Message printed when single-user validation succeeds.
pub const VALIDATION_SUCCESS_MESSAGE: &str = "Validation successful!";

/// `user-registry` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-registry",
    about = "Registers and validates new users individually or as a multiple registration (bulk)",
    version
)]
pub struct Cli {
    /// Name of the new user.
    pub name: Option<String>,
    /// Email of the new user.
    pub email: Option<String>,
    /// Password of the new user.
    pub password: Option<String>,
    /// Action to run on the supplied user.
    #[arg(value_enum)]
    pub action: Option<Action>,
    /// Register every user in `--file`.
    #[arg(long)]
    pub bulk: bool,
    /// Comma-delimited file read by `--bulk`.
    #[arg(long, value_name = "path", num_args = 0..=1)]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Collects the positional fields, treating absent ones as empty.
    #[must_use]
    pub fn user_input(&self) -> UserInput {
        UserInput::new(
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        )
    }
}

/// Single-user actions selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Check the user without registering it.
    Validate,
    /// Validate and register the user.
    Register,
}

/// Result of dispatching one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user passed validation.
    Validated,
    /// The user failed validation.
    ValidationFailed(ValidationError),
    /// The user was registered.
    Registered(UserRecord),
    /// Registration was refused.
    RegistrationFailed(RegistrationError),
    /// The bulk file was imported.
    Imported(Vec<UserRecord>),
    /// `--bulk` was given without a file.
    MissingBulkFile,
    /// No action applied.
    Idle,
}

/// Runs the action selected by `cli`.
///
/// Precedence: `validate`, then `register`, then `--bulk`. A command line
/// matching none of them is [`Outcome::Idle`].
///
/// # Errors
///
/// Returns [`CliError::Bulk`] if the bulk pipeline fails.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use user_registry::RegistrySettings;
/// use user_registry::cli::{Cli, Outcome, dispatch};
///
/// let cli = Cli::parse_from(["user-registry", "Bob", "bob@x.org", "Hunter22", "validate"]);
/// let settings = RegistrySettings {
///     strict_email_domain: false,
///     chunked_bulk: false,
///     log_json: false,
///     log_filter: None,
/// };
///
/// assert_eq!(dispatch(&cli, &settings).expect("dispatch"), Outcome::Validated);
/// ```
pub fn dispatch(cli: &Cli, settings: &RegistrySettings) -> Result<Outcome, CliError> {
    let mut registrar =
        Registrar::with_email_policy(InMemoryUserStore::default(), settings.email_policy());
    match (cli.action, cli.bulk) {
        (Some(Action::Validate), _) => Ok(match registrar.validate_user(&cli.user_input()) {
            Ok(()) => Outcome::Validated,
            Err(err) => Outcome::ValidationFailed(err),
        }),
        (Some(Action::Register), _) => Ok(match registrar.register_user(&cli.user_input()) {
            Ok(record) => Outcome::Registered(record),
            Err(err) => Outcome::RegistrationFailed(err),
        }),
        (None, true) => match &cli.file {
            Some(path) => Ok(Outcome::Imported(bulk::import(path, settings.bulk_layout())?)),
            None => Ok(Outcome::MissingBulkFile),
        },
        (None, false) => Ok(Outcome::Idle),
    }
}

/// Renders the text printed for an outcome, if any.
///
/// Records are rendered as JSON; a refused registration renders as
/// [`RegistrationError::SENTINEL`].
///
/// # Errors
///
/// Returns [`CliError::Render`] if records cannot be serialized.
pub fn render(outcome: &Outcome) -> Result<Option<String>, CliError> {
    let text = match outcome {
        Outcome::Validated => VALIDATION_SUCCESS_MESSAGE.to_owned(),
        Outcome::ValidationFailed(err) => format!("Validation failed: {err}"),
        Outcome::Registered(record) => to_json(record)?,
        Outcome::RegistrationFailed(_) => RegistrationError::SENTINEL.to_owned(),
        Outcome::Imported(records) => to_json(records)?,
        Outcome::MissingBulkFile => MISSING_BULK_FILE_MESSAGE.to_owned(),
        Outcome::Idle => return Ok(None),
    };
    Ok(Some(text))
}

/// Dispatches `cli` and writes the rendered outcome to `out`.
///
/// # Errors
///
/// Returns [`CliError`] if dispatch, rendering, or writing fails.
pub fn run(cli: &Cli, settings: &RegistrySettings, mut out: impl Write) -> Result<(), CliError> {
    let outcome = dispatch(cli, settings)?;
    if let Some(text) = render(&outcome)? {
        writeln!(out, "{text}").map_err(|err| CliError::Output {
            message: err.to_string(),
        })?;
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string(value).map_err(|err| CliError::Render {
        message: err.to_string(),
    })
}
