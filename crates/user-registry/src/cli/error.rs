//! Error types for the registry CLI.

use thiserror::Error;

use crate::error::BulkError;

/// Errors surfaced by the CLI dispatch and output flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The bulk pipeline failed.
    #[error("bulk import failed: {source}")]
    Bulk {
        /// Underlying bulk import error.
        #[from]
        #[source]
        source: BulkError,
    },
    /// Records could not be rendered as JSON.
    #[error("failed to render output: {message}")]
    Render {
        /// Serializer error message.
        message: String,
    },
    /// Standard output could not be written.
    #[error("failed to write output: {message}")]
    Output {
        /// I/O error message.
        message: String,
    },
}
