//! Error types for the validator
//!
//! Two channels are kept apart: [`SchemaError`] aborts a whole validation
//! (unreadable input, broken schema), while [`TypeMismatch`] is a per-value
//! failure that the walker records and moves past.

use std::borrow::Cow;

use thiserror::Error;

use crate::path::FieldPath;

/// Result type for validator operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Fatal errors: the input or the schema cannot be interpreted
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid JSON data: {0}")]
    InvalidData(String),

    #[error("Invalid JSON schema: {0}")]
    InvalidSchema(String),

    #[error("JSON data schema is not defined")]
    SchemaNotDefined,

    #[error("{}Type of parameter is not defined (\"type\" key in parameter type description)", .path.prefix())]
    TypeNotDefined { path: FieldPath },

    #[error("{}Type \"{name}\" is not supported", .path.prefix())]
    UnsupportedType { path: FieldPath, name: String },

    #[error("{}{message}", .path.prefix())]
    InvalidFormat { path: FieldPath, message: String },

    #[error("{}Maximum nesting depth of {limit} exceeded", .path.prefix())]
    DepthExceeded { path: FieldPath, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config_crate::ConfigError> for SchemaError {
    fn from(err: config_crate::ConfigError) -> Self {
        SchemaError::Config(err.to_string())
    }
}

/// A value does not belong to its declared type.
///
/// Carries the type's fixed message only; the offending value is never echoed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TypeMismatch {
    message: Cow<'static, str>,
}

impl TypeMismatch {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
