//! Error types for the validation engine.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for everything that can go wrong while configuring or running
/// the validator.
///
/// Plan content problems are never reported through this type: malformed
/// steps fall back to defaults and structural issues become findings. These
/// variants cover rule-table loading and internal evaluator faults only.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// An evaluator could not complete its pass
    #[error("Evaluator '{name}' failed: {reason}")]
    Evaluator { name: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ValidationError {
        ValidationError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ValidationError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an evaluator fault for the named pass.
    pub fn evaluator(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Evaluator {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
