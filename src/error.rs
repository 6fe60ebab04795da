//! Error types for Glaive.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`GlaiveError`] enum.
//!
//! # Examples
//!
//! ```
//! use glaive::error::{GlaiveError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GlaiveError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Glaive operations.
#[derive(Error, Debug)]
pub enum GlaiveError {
    /// I/O errors (synonym files, catalog files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The full-text engine rejected a boolean-mode query string
    #[error("Query syntax rejected: {0}")]
    QuerySyntax(String),

    /// Catalog (storage collaborator) errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GlaiveError.
pub type Result<T> = std::result::Result<T, GlaiveError>;

impl GlaiveError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GlaiveError::Config(msg.into())
    }

    /// Create a new query syntax rejection.
    pub fn query_syntax<S: Into<String>>(msg: S) -> Self {
        GlaiveError::QuerySyntax(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        GlaiveError::Catalog(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GlaiveError::InvalidArgument(msg.into())
    }

    /// Whether this error is a boolean-mode syntax rejection.
    pub fn is_query_syntax(&self) -> bool {
        matches!(self, GlaiveError::QuerySyntax(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GlaiveError::catalog("Test catalog error");
        assert_eq!(error.to_string(), "Catalog error: Test catalog error");

        let error = GlaiveError::query_syntax("unbalanced parenthesis");
        assert_eq!(
            error.to_string(),
            "Query syntax rejected: unbalanced parenthesis"
        );
        assert!(error.is_query_syntax());

        let error = GlaiveError::config("bad synonym file");
        assert!(!error.is_query_syntax());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let glaive_error = GlaiveError::from(io_error);

        match glaive_error {
            GlaiveError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
