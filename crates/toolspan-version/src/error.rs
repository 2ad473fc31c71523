//! Error types for version handling

use thiserror::Error;

/// Errors raised while parsing or negotiating versions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The string is not a valid semantic version
    #[error("invalid semantic version: {0}")]
    InvalidVersion(String),

    /// No version in the candidate set satisfies the compatibility matrix
    #[error("no compatible version found for {0}")]
    NoCompatibleVersion(String),
}
