/*!
 * Error types for the mathcheck application.
 *
 * This module contains custom error types for the document loader and the
 * configuration layer, using the thiserror crate for ergonomic error definitions.
 * Discrepancies between documents are not errors: they are reported through
 * the comparison result.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or configuring a comparison
#[derive(Error, Debug)]
pub enum CheckerError {
    /// The given path does not resolve to a file
    #[error("File not found: '{}'", path.display())]
    InputNotFound {
        /// Path as given on the command line
        path: PathBuf,
    },

    /// The file exists but could not be read as UTF-8 text
    #[error("Failed to read '{}': {message}", path.display())]
    Unreadable {
        /// Path as given on the command line
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CheckerError {
    /// Whether the run must abort because an input document is missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, CheckerError::InputNotFound { .. })
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from loading or configuring a comparison
    #[error("Checker error: {0}")]
    Checker(#[from] CheckerError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error serializing a report
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
