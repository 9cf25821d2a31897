//! Error types for the rewriting pass

use miette::Diagnostic;
use thiserror::Error;
use webp_swap_config::ConfigError;

/// Errors that can occur while preparing or running the pass
#[derive(Error, Debug, Diagnostic)]
pub enum WebpError {
    /// Options failed to load or validate
    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(webp_swap::config))]
    Config(#[from] ConfigError),

    /// Source text could not be parsed
    #[error("Parse failed: {reason}")]
    #[diagnostic(code(webp_swap::parse))]
    ParseFailed { reason: String },

    /// A node claims a shape but lacks the fields that shape requires
    #[error("Invariant violated on {node_type}{}", details.as_ref().map(|d| format!(" - {}", d)).unwrap_or_default())]
    #[diagnostic(code(webp_swap::invariant))]
    InvariantViolation {
        node_type: String,
        details: Option<String>,
    },
}

impl WebpError {
    /// Create a ParseFailed error
    pub fn parse_failed(reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvariantViolation error with details
    pub fn invariant(node_type: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvariantViolation {
            node_type: node_type.into(),
            details: Some(details.into()),
        }
    }
}

/// Result type for rewriting operations
pub type Result<T> = std::result::Result<T, WebpError>;
