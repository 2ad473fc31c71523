//! The MCP-compatible tool definition and its serializers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use toolspan_version::Version;

use crate::error::ModelError;
use crate::id::ToolId;

/// The MCP protocol version this crate targets.
pub const MCP_VERSION: &str = "2025-11-25";

const MAX_TOOL_NAME_LEN: usize = 128;

/// A tool definition mirroring the MCP wire shape, extended with
/// `namespace`, `version`, and `tags`.
///
/// The extensions never appear in [`Tool::to_mcp_json`] output; use
/// [`Tool::to_json`] when the extended form is wanted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name (required)
    pub name: String,
    /// Human-friendly display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// What the tool does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input parameter schema (JSON Schema object)
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub input_schema: Value,
    /// Output schema, when the tool declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    /// MCP tool annotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
    /// Free-form metadata (`_meta` on the wire)
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    /// Icons for display
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<Icon>,

    /// Namespace for stable IDs (toolspan extension)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Tool version string (toolspan extension)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Search keywords for discovery layers (toolspan extension)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// MCP tool annotations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    /// Display title from annotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the tool only reads state
    #[serde(default)]
    pub read_only_hint: bool,
    /// Whether the tool may destroy state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive_hint: Option<bool>,
    /// Whether repeated calls with the same input are safe
    #[serde(default)]
    pub idempotent_hint: bool,
    /// Whether the tool reaches outside its host environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_world_hint: Option<bool>,
}

/// A tool icon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    /// Icon URI
    pub src: String,
    /// MIME type of the icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Size hints such as `"48x48"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

impl Tool {
    /// Create a tool with the given name and an empty object input schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_schema: Value::Object(Map::new()),
            ..Self::default()
        }
    }

    /// The canonical identifier: `namespace:name:version`, `namespace:name`,
    /// or just `name`, depending on which extensions are set.
    pub fn tool_id(&self) -> String {
        ToolId::new(self.namespace.clone(), self.name.clone(), self.version.clone()).to_string()
    }

    /// Check basic invariants: name presence, length, and character set,
    /// plus input schema presence. Schema contents are not validated here.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::InvalidTool("name is required".to_string()));
        }
        if self.name.len() > MAX_TOOL_NAME_LEN {
            return Err(ModelError::InvalidTool(format!(
                "name exceeds {MAX_TOOL_NAME_LEN} characters"
            )));
        }

        let mut invalid: Vec<char> = Vec::new();
        for c in self.name.chars() {
            if !valid_tool_name_char(c) && !invalid.contains(&c) {
                invalid.push(c);
            }
        }
        if !invalid.is_empty() {
            let list: Vec<String> = invalid.iter().map(|c| c.to_string()).collect();
            return Err(ModelError::InvalidTool(format!(
                "name contains invalid characters: {}",
                list.join(", ")
            )));
        }

        if self.input_schema.is_null() {
            return Err(ModelError::InvalidTool("inputSchema is required".to_string()));
        }
        Ok(())
    }

    /// Serialize to JSON compatible with the MCP tool spec, with the
    /// toolspan extensions stripped.
    pub fn to_mcp_json(&self) -> Result<Vec<u8>, ModelError> {
        let mut stripped = self.clone();
        stripped.namespace = None;
        stripped.version = None;
        stripped.tags = Vec::new();
        Ok(serde_json::to_vec(&stripped)?)
    }

    /// Serialize the full tool, extensions included.
    pub fn to_json(&self) -> Result<Vec<u8>, ModelError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize an MCP tool. Extension fields are ignored even when the
    /// input carries them, so the result is always a pure MCP view.
    pub fn from_mcp_json(data: &[u8]) -> Result<Self, ModelError> {
        let mut tool: Self = serde_json::from_slice(data)?;
        tool.namespace = None;
        tool.version = None;
        tool.tags = Vec::new();
        Ok(tool)
    }

    /// Deserialize a full tool, extensions included.
    pub fn from_json(data: &[u8]) -> Result<Self, ModelError> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Parse the tool's version string as a structured [`Version`].
    pub fn parsed_version(&self) -> Result<Version, ModelError> {
        let raw = self
            .version
            .as_deref()
            .ok_or_else(|| ModelError::InvalidTool("tool has no version".to_string()))?;
        Version::parse(raw).map_err(|e| ModelError::InvalidTool(e.to_string()))
    }
}

fn valid_tool_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}
