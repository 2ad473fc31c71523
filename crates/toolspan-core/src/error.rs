//! Error types for tool conversion

use std::fmt;

use thiserror::Error;

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// The conversion direction an adapter was running when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lifting a native tool into the canonical representation
    ToCanonical,
    /// Projecting a canonical tool into a native format
    FromCanonical,
    /// Lifting a native provider envelope into the canonical representation
    ToCanonicalProvider,
    /// Projecting a canonical provider into a native format
    FromCanonicalProvider,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::ToCanonical => "to_canonical",
            Direction::FromCanonical => "from_canonical",
            Direction::ToCanonicalProvider => "to_canonical_provider",
            Direction::FromCanonicalProvider => "from_canonical_provider",
        };
        f.write_str(s)
    }
}

/// Errors raised by adapters, the registry, and the conversion engine
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An adapter could not lift or project a tool
    #[error("{adapter} adapter {direction}: {cause}")]
    Conversion {
        /// Name of the adapter that failed
        adapter: String,
        /// Which way the conversion was going
        direction: Direction,
        /// The underlying error
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An adapter with this name is already registered
    #[error("adapter already registered: {name}")]
    AlreadyRegistered {
        /// The colliding adapter name
        name: String,
    },

    /// No adapter with this name is registered
    #[error("adapter not found: {name}")]
    NotFound {
        /// The requested adapter name
        name: String,
    },

    /// A canonical tool or provider fails basic validation
    #[error("invalid canonical tool: {0}")]
    InvalidTool(String),

    /// A tool or skill ID string is malformed
    #[error("invalid tool ID: {0:?}")]
    InvalidToolId(String),

    /// A non-mapping value appeared where a schema mapping is required
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

impl ConvertError {
    /// Build a direction-tagged conversion error.
    pub fn conversion(
        adapter: impl Into<String>,
        direction: Direction,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Conversion {
            adapter: adapter.into(),
            direction,
            cause: cause.into(),
        }
    }
}
