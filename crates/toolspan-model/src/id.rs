//! Tool identifier parsing
//!
//! Tool IDs take the form `namespace:name:version`, `namespace:name`, or
//! just `name`. Segments must be non-empty and at most two colons are
//! allowed.

use std::fmt;

use crate::error::ModelError;

/// A parsed tool identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ToolId {
    /// Namespace segment, when present
    pub namespace: Option<String>,
    /// Tool name (always present)
    pub name: String,
    /// Version segment, when present
    pub version: Option<String>,
}

impl ToolId {
    /// Build an ID from its components.
    pub fn new(
        namespace: Option<impl Into<String>>,
        name: impl Into<String>,
        version: Option<impl Into<String>>,
    ) -> Self {
        Self {
            namespace: namespace.map(Into::into),
            name: name.into(),
            version: version.map(Into::into),
        }
    }

    /// Parse a tool ID string.
    ///
    /// Returns [`ModelError::InvalidToolId`] when the string is empty,
    /// contains more than two colons, or has an empty segment.
    pub fn parse(id: &str) -> Result<Self, ModelError> {
        if id.is_empty() {
            return Err(ModelError::InvalidToolId(id.to_string()));
        }

        let parts: Vec<&str> = id.split(':').collect();
        if parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(ModelError::InvalidToolId(id.to_string()));
        }

        Ok(match parts.as_slice() {
            [name] => Self::new(None::<String>, *name, None::<String>),
            [namespace, name] => Self::new(Some(*namespace), *name, None::<String>),
            [namespace, name, version] => Self::new(Some(*namespace), *name, Some(*version)),
            _ => unreachable!("length checked above"),
        })
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.namespace, &self.version) {
            (Some(ns), Some(v)) => write!(f, "{ns}:{}:{v}", self.name),
            (Some(ns), None) => write!(f, "{ns}:{}", self.name),
            // A version without a namespace cannot round-trip; the bare
            // name form wins.
            (None, _) => write!(f, "{}", self.name),
        }
    }
}

impl std::str::FromStr for ToolId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
