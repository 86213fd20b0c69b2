//! Error types for the user-registry crate.
//!
//! This module defines semantic error enums for field validation,
//! registration, and bulk import, using `thiserror` for the `Display` and
//! `Error` implementations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A user field checked during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The user's name.
    Name,
    /// The user's email address.
    Email,
    /// The user's password.
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
        };
        f.write_str(label)
    }
}

/// The first field that failed validation for a user.
///
/// Validation short-circuits, so only one field is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} validation failed.")]
pub struct ValidationError {
    field: Field,
}

impl ValidationError {
    /// Creates an error reporting `field` as the failed field.
    #[must_use]
    pub const fn new(field: Field) -> Self {
        Self { field }
    }

    /// Returns the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }
}

/// Errors returned when registering a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The user failed validation and was not stored.
    #[error("{source}")]
    Invalid {
        /// The validation failure that rejected the user.
        #[from]
        source: ValidationError,
    },
}

impl RegistrationError {
    /// Literal printed in place of a record when registration fails.
    pub const SENTINEL: &'static str = "false";

    /// Returns the validation failure behind this error.
    #[must_use]
    pub const fn cause(&self) -> ValidationError {
        match self {
            Self::Invalid { source } => *source,
        }
    }
}

/// Errors that can occur while importing users from a bulk file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkError {
    /// The bulk file could not be opened or read.
    #[error("failed to read bulk file at '{path}': {message}")]
    Read {
        /// Path to the bulk file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A parsed line did not contain the field needed for a record.
    #[error("line {line} has no {field} field")]
    MissingField {
        /// Zero-based index of the parsed line.
        line: usize,
        /// The field that was absent.
        field: Field,
    },

    /// The field stream ended part-way through a record.
    #[error("trailing record is incomplete: {fields} of 3 fields present")]
    IncompleteRecord {
        /// Number of fields in the trailing chunk.
        fields: usize,
    },
}
