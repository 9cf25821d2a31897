//! Error types for option loading and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Discovery errors
    #[error("config not found")]
    NotFound,

    // Parsing/merging errors
    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {}", h)).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors
    #[error("schema validation failed: {message}{}", hint.as_ref().map(|h| format!(" ({})", h)).unwrap_or_default())]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid_value(field: impl Into<String>, hint: impl ToString) -> Self {
        Self::InvalidValue {
            field: field.into(),
            hint: Some(hint.to_string()),
        }
    }

    pub(crate) fn schema(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::SchemaValidation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}
