//! The canonical provider envelope

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::canonical::tool::{CanonicalTool, SecurityRequirement, SecurityScheme};
use crate::error::ConvertError;

/// A tool provider, such as an A2A agent card: provider-level metadata plus
/// the tools it offers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalProvider {
    /// Provider name (required)
    pub name: String,
    /// What the provider does
    pub description: String,
    /// Provider version
    pub version: String,
    /// Capability flags (e.g. streaming, push notifications), flattened to
    /// a map
    pub capabilities: Map<String, Value>,
    /// Auth schemes supported by the provider, in insertion order
    pub security_schemes: IndexMap<String, SecurityScheme>,
    /// Required schemes/scopes to access the provider
    pub security_requirements: Vec<SecurityRequirement>,
    /// Default input media types for all tools
    pub default_input_modes: Vec<String>,
    /// Default output media types for all tools
    pub default_output_modes: Vec<String>,
    /// The tools offered by the provider
    pub skills: Vec<CanonicalTool>,
    /// The format this provider was lifted from (e.g. `a2a`)
    pub source_format: String,
    /// Wire-level fields carried for same-adapter round trips (supported
    /// interfaces, provider org, documentation URL, signatures, icon URL)
    pub source_meta: HashMap<String, Value>,
}

impl CanonicalProvider {
    /// Check that the provider has the fields every format requires.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.name.is_empty() || self.description.is_empty() || self.version.is_empty() {
            return Err(ConvertError::InvalidTool(
                "provider name, description, and version are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_core_fields() {
        let mut provider = CanonicalProvider {
            name: "assistant".to_string(),
            description: "Does things".to_string(),
            version: "1.0.0".to_string(),
            ..CanonicalProvider::default()
        };
        assert!(provider.validate().is_ok());

        provider.version = String::new();
        assert!(provider.validate().is_err());
    }
}
