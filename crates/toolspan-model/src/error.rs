//! Error types for the tool model

use thiserror::Error;

/// Errors raised by tool model validation and parsing
#[derive(Debug, Error)]
pub enum ModelError {
    /// A tool ID string is malformed (empty segment or too many colons)
    #[error("invalid tool ID format: {0}")]
    InvalidToolId(String),

    /// A tool fails basic validation
    #[error("invalid tool: {0}")]
    InvalidTool(String),

    /// A backend binding fails validation
    #[error("invalid backend: {0}")]
    InvalidBackend(String),

    /// JSON serialization or deserialization failed
    #[error("tool JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
