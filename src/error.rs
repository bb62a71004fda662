//! Error types for csv-splitter
//!
//! This module defines the error taxonomy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Three classes matter to callers:
//! - `Validation` — bad or missing caller-supplied arguments; always
//!   recoverable, safe to re-prompt the user.
//! - `Processing` — malformed or unreadable data content (decode failure,
//!   short row, empty file).
//! - `FileOperation` — OS-level failure (missing source, permission denied,
//!   write failure).

use thiserror::Error;

/// The main error type for csv-splitter
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Fields not found in CSV header: {}", missing.join(", "))]
    MissingFields { missing: Vec<String> },

    // ============================================================================
    // Processing Errors
    // ============================================================================
    #[error("Processing error: {message}")]
    Processing { message: String },

    #[error("CSV file is empty or has no headers: {path}")]
    EmptyFile { path: String },

    #[error("Row {row} is missing a value for column index {index}")]
    ShortRow { row: usize, index: usize },

    // ============================================================================
    // File Operation Errors
    // ============================================================================
    #[error("File operation error: {message}")]
    FileOperation { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }

    /// Create a file operation error
    pub fn file_operation(message: impl Into<String>) -> Self {
        Self::FileOperation {
            message: message.into(),
        }
    }

    /// Create a missing-fields validation error
    pub fn missing_fields(missing: Vec<String>) -> Self {
        Self::MissingFields { missing }
    }

    /// Whether this error belongs to the validation class
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::MissingFields { .. })
    }

    /// Whether this error belongs to the processing class
    pub fn is_processing(&self) -> bool {
        matches!(
            self,
            Error::Processing { .. } | Error::EmptyFile { .. } | Error::ShortRow { .. }
        )
    }

    /// Whether this error belongs to the file-operation class
    pub fn is_file_operation(&self) -> bool {
        matches!(
            self,
            Error::FileOperation { .. }
                | Error::FileNotFound { .. }
                | Error::PermissionDenied { .. }
                | Error::Io(_)
        )
    }

    /// Render this error as a single user-facing message.
    ///
    /// Classified errors display as-is; anything else is prefixed so the
    /// caller can tell an engine fault from bad input.
    pub fn user_message(&self) -> String {
        if self.is_validation() || self.is_processing() || self.is_file_operation() {
            self.to_string()
        } else {
            format!("Unexpected error: {self}")
        }
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) {
            return Error::Processing {
                message: "invalid UTF-8 in CSV data".to_string(),
            };
        }
        let message = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            _ => Error::Processing { message },
        }
    }
}

/// Result type alias for csv-splitter
pub type Result<T> = std::result::Result<T, Error>;
