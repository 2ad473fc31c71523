//! Anthropic tool-use adapter
//!
//! Anthropic accepts the same flat subset as OpenAI plus `anyOf`. The
//! `cache_control` block and `input_examples` survive round trips through
//! `source_meta`; examples are additionally JSON-encoded into the canonical
//! `examples` list, best-effort.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::adapter::Adapter;
use crate::adapters::helpers::canonical_description;
use crate::adapters::map_schema::schema_from_map;
use crate::adapters::openai::empty_object_schema;
use crate::canonical::CanonicalTool;
use crate::error::{ConvertError, ConvertResult, Direction};
use crate::feature::SchemaFeature;
use crate::native::NativeTool;

const META_CACHE_CONTROL: &str = "cache_control";
const META_INPUT_EXAMPLES: &str = "input_examples";

/// The Anthropic tool definition. Defined locally to avoid SDK coupling;
/// serializes to the exact wire shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnthropicTool {
    /// Tool name
    pub name: String,
    /// What the tool does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input schema (a JSON Schema object)
    #[serde(default)]
    pub input_schema: Map<String, Value>,
    /// Example inputs (arbitrary JSON)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_examples: Vec<Value>,
    /// Prompt-caching control block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<CacheControl>,
}

/// Anthropic prompt-caching control. The only defined type is `ephemeral`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheControl {
    /// Cache type, `"ephemeral"`
    #[serde(rename = "type")]
    pub control_type: String,
}

impl CacheControl {
    /// The `ephemeral` cache control block.
    pub fn ephemeral() -> Self {
        Self {
            control_type: "ephemeral".to_string(),
        }
    }
}

/// Adapter between the Anthropic tool format and the canonical format.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnthropicAdapter;

/// Create a new Anthropic adapter.
pub fn new_anthropic_adapter() -> AnthropicAdapter {
    AnthropicAdapter
}

impl Adapter for AnthropicAdapter {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn to_canonical(&self, raw: &NativeTool) -> ConvertResult<CanonicalTool> {
        let NativeTool::Anthropic(tool) = raw else {
            return Err(ConvertError::conversion(
                self.name(),
                Direction::ToCanonical,
                format!("unsupported input: {}", raw.kind()),
            ));
        };

        if tool.name.is_empty() {
            return Err(ConvertError::conversion(
                self.name(),
                Direction::ToCanonical,
                "tool name is required",
            ));
        }

        let mut ct = CanonicalTool {
            name: tool.name.clone(),
            description: tool.description.clone().unwrap_or_default(),
            source_format: self.name().to_string(),
            ..CanonicalTool::default()
        };

        if !tool.input_schema.is_empty() {
            ct.input_schema = Some(schema_from_map(&tool.input_schema));
        }

        if let Some(cc) = &tool.cache_control {
            if let Ok(value) = serde_json::to_value(cc) {
                ct.source_meta.insert(META_CACHE_CONTROL.to_string(), value);
            }
        }
        if !tool.input_examples.is_empty() {
            ct.source_meta.insert(
                META_INPUT_EXAMPLES.to_string(),
                Value::Array(tool.input_examples.clone()),
            );
            // Canonical examples are strings; encode arbitrary JSON inputs.
            for example in &tool.input_examples {
                if let Ok(encoded) = serde_json::to_string(example) {
                    ct.examples.push(encoded);
                }
            }
        }

        Ok(ct)
    }

    fn from_canonical(&self, ct: &CanonicalTool) -> ConvertResult<NativeTool> {
        if ct.name.is_empty() {
            return Err(ConvertError::conversion(
                self.name(),
                Direction::FromCanonical,
                "tool name is required",
            ));
        }

        let input_schema = match &ct.input_schema {
            Some(schema) => schema.filtered(&|f| self.supports(f)).to_map(),
            None => empty_object_schema(),
        };

        let description = canonical_description(ct);
        let mut tool = AnthropicTool {
            name: ct.name.clone(),
            description: (!description.is_empty()).then(|| description.to_string()),
            input_schema,
            ..AnthropicTool::default()
        };

        if let Some(value) = ct.source_meta.get(META_CACHE_CONTROL) {
            tool.cache_control = serde_json::from_value(value.clone()).ok();
        }
        if let Some(examples) = ct.source_meta.get(META_INPUT_EXAMPLES).and_then(Value::as_array) {
            tool.input_examples = examples.clone();
        }

        Ok(NativeTool::Anthropic(tool))
    }

    fn supports(&self, feature: SchemaFeature) -> bool {
        matches!(
            feature,
            SchemaFeature::Enum
                | SchemaFeature::Default
                | SchemaFeature::AdditionalProperties
                | SchemaFeature::Minimum
                | SchemaFeature::Maximum
                | SchemaFeature::MinLength
                | SchemaFeature::MaxLength
                | SchemaFeature::MultipleOf
                | SchemaFeature::MinItems
                | SchemaFeature::MaxItems
                | SchemaFeature::MinProperties
                | SchemaFeature::MaxProperties
                | SchemaFeature::UniqueItems
                | SchemaFeature::Const
                | SchemaFeature::AnyOf
        )
    }
}
