//! The canonical tool envelope

use std::collections::HashMap;
use std::time::Duration;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::canonical::schema::CanonicalSchema;
use crate::error::ConvertError;

/// A security scheme definition. Kept as a free-form map to avoid coupling
/// to any single auth spec.
pub type SecurityScheme = Map<String, Value>;

/// Maps scheme names to the scopes they require.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// The protocol-agnostic representation of a tool definition.
///
/// Canonical tools are short-lived values: an adapter lift creates one, a
/// projection consumes it. Empty strings mean "not set" for the metadata
/// fields; the schemas and the tri-state flags use `Option`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalTool {
    /// Groups related tools (e.g. `github`, `slack`)
    pub namespace: String,
    /// Tool identifier (required)
    pub name: String,
    /// Human-friendly name for UI presentation
    pub display_name: String,
    /// Semantic version of the tool
    pub version: String,
    /// What the tool does
    pub description: String,
    /// Short description for discovery results
    pub summary: String,
    /// Purpose classification
    pub category: String,
    /// Keywords for discovery
    pub tags: Vec<String>,
    /// Supported input media types (e.g. `application/json`)
    pub input_modes: Vec<String>,
    /// Supported output media types
    pub output_modes: Vec<String>,
    /// Example prompts or usage scenarios
    pub examples: Vec<String>,
    /// Whether the tool returns deterministic results
    pub deterministic: Option<bool>,
    /// Whether the tool is idempotent
    pub idempotent: Option<bool>,
    /// Whether the tool supports streaming output
    pub streaming: Option<bool>,
    /// Auth schemes required by this tool, in insertion order
    pub security_schemes: IndexMap<String, SecurityScheme>,
    /// Required schemes/scopes for this tool
    pub security_requirements: Vec<SecurityRequirement>,
    /// Protocol-agnostic annotations for UI or policy, preserved verbatim
    pub annotations: Map<String, Value>,
    /// UI rendering hints, preserved verbatim
    pub ui_hints: Map<String, Value>,
    /// Input parameter schema (required for validity)
    pub input_schema: Option<CanonicalSchema>,
    /// Output schema
    pub output_schema: Option<CanonicalSchema>,
    /// Maximum execution time
    pub timeout: Option<Duration>,
    /// Authorization scopes needed to use the tool
    pub required_scopes: Vec<String>,
    /// The format this tool was lifted from (`mcp`, `openai`, `anthropic`,
    /// `gemini`, `a2a`)
    pub source_format: String,
    /// Format-specific fields carried for same-adapter round trips. Opaque
    /// to the engine; only the adapter that wrote a key interprets it.
    pub source_meta: HashMap<String, Value>,
}

impl CanonicalTool {
    /// The fully qualified identifier: `namespace:name` when a namespace is
    /// set, otherwise just `name`.
    pub fn id(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}:{}", self.namespace, self.name)
        }
    }

    /// Check that the tool has its required fields: a non-empty name and an
    /// input schema.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.name.is_empty() {
            return Err(ConvertError::InvalidTool("tool name is required".to_string()));
        }
        if self.input_schema.is_none() {
            return Err(ConvertError::InvalidTool(
                "tool input schema is required".to_string(),
            ));
        }
        Ok(())
    }
}
