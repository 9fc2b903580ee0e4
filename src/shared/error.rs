//! Shared Error Types
//!
//! This module defines the error types produced by the document model and the
//! validator. They are independent of the HTTP layer so that validation can
//! run anywhere a document is decoded.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A document (or part of one) failed a schema rule
//!
//! # Usage
//!
//! ```rust
//! use ennoea::shared::error::SharedError;
//!
//! let error = SharedError::validation("info", "name is empty");
//! assert_eq!(error.to_string(), "invalid info: name is empty");
//! ```
use thiserror::Error;

/// Errors raised while decoding or validating an architecture document
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// A schema rule was violated
    ///
    /// `field` names the part of the document that failed (for example
    /// `component` or `group: bounding box`), `message` says what was wrong.
    #[error("invalid {field}: {message}")]
    ValidationError {
        /// The part of the document that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefix the field of a validation error with its enclosing structure.
    ///
    /// `invalid color: ...` raised inside a group becomes
    /// `invalid group: color: ...`. Serialization errors pass through unchanged.
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::ValidationError { field, message } => Self::ValidationError {
                field: format!("{}: {}", parent, field),
                message,
            },
            other => other,
        }
    }
}

/// Helper trait for converting serialization errors
impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("fog", "near is negative");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "fog");
                assert_eq!(message, "near is negative");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_within_nests_field() {
        let error = SharedError::validation("color", "missing '#': 000000")
            .within("bounding box")
            .within("group");
        assert_eq!(
            error.to_string(),
            "invalid group: bounding box: color: missing '#': 000000"
        );
    }

    #[test]
    fn test_within_leaves_serialization_untouched() {
        let error = SharedError::serialization("bad").within("group");
        assert_eq!(error, SharedError::serialization("bad"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let shared_error: SharedError = result.unwrap_err().into();

        assert!(matches!(shared_error, SharedError::SerializationError { .. }));
        assert!(shared_error.to_string().contains("JSON error"));
    }
}
