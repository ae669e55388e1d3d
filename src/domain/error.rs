//! Error types for the Stockroom plugin.
//!
//! This module defines the centralized error type [`StockroomError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The pagination core has no error kinds of its own: out-of-range navigation is
//! clamped, never reported. Everything here concerns loading and presenting data.

use thiserror::Error;

/// The main error type for Stockroom plugin operations.
///
/// Most variants carry a description; `Io` wraps the underlying error using
/// `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use stockroom::StockroomError;
///
/// fn read_export() -> Result<(), StockroomError> {
///     Err(StockroomError::Storage("export file is empty".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum StockroomError {
    /// Reading or parsing the inventory export failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with background worker failed.
    ///
    /// Occurs when the worker cannot be reached or its storage handle was never
    /// opened.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export data parsed but violates a dataset rule (e.g. duplicate ids).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A specialized `Result` type for Stockroom operations.
pub type Result<T> = std::result::Result<T, StockroomError>;

#[cfg(test)]
mod tests {
    use super::StockroomError;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn open_missing() -> super::Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/inventory.json")?)
        }

        let err = open_missing().unwrap_err();
        assert!(matches!(err, StockroomError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = StockroomError::Validation("duplicate item id `i-1`".to_string());
        assert_eq!(err.to_string(), "Validation error: duplicate item id `i-1`");
    }
}
