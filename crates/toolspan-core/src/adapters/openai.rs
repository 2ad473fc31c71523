//! OpenAI function-calling adapter
//!
//! OpenAI accepts a flat subset of JSON Schema: value constraints and
//! bounds, but no references, combinators, or string validation keywords.
//! The `strict` flag survives round trips through `source_meta`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::adapter::Adapter;
use crate::adapters::helpers::canonical_description;
use crate::adapters::map_schema::schema_from_map;
use crate::canonical::CanonicalTool;
use crate::error::{ConvertError, ConvertResult, Direction};
use crate::feature::SchemaFeature;
use crate::native::NativeTool;

const META_STRICT: &str = "strict";

/// The OpenAI function definition. Defined locally to avoid SDK coupling;
/// serializes to the exact wire shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenAiFunction {
    /// Function name
    pub name: String,
    /// What the function does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameter schema (a JSON Schema object)
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Structured-output strict mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// The OpenAI tool envelope wrapping a function for the tools array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiTool {
    /// Always `"function"`
    #[serde(rename = "type")]
    pub tool_type: String,
    /// The wrapped function definition
    pub function: OpenAiFunction,
}

impl OpenAiTool {
    /// Wrap a function in the tools-array envelope.
    pub fn new(function: OpenAiFunction) -> Self {
        Self {
            tool_type: "function".to_string(),
            function,
        }
    }
}

/// Adapter between the OpenAI function format and the canonical format.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenAiAdapter;

/// Create a new OpenAI adapter.
pub fn new_openai_adapter() -> OpenAiAdapter {
    OpenAiAdapter
}

impl Adapter for OpenAiAdapter {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn to_canonical(&self, raw: &NativeTool) -> ConvertResult<CanonicalTool> {
        let function = match raw {
            NativeTool::OpenAi(tool) => &tool.function,
            NativeTool::OpenAiFunction(function) => function,
            other => {
                return Err(ConvertError::conversion(
                    self.name(),
                    Direction::ToCanonical,
                    format!("unsupported input: {}", other.kind()),
                ));
            }
        };

        if function.name.is_empty() {
            return Err(ConvertError::conversion(
                self.name(),
                Direction::ToCanonical,
                "function name is required",
            ));
        }

        let mut ct = CanonicalTool {
            name: function.name.clone(),
            description: function.description.clone().unwrap_or_default(),
            source_format: self.name().to_string(),
            ..CanonicalTool::default()
        };

        if !function.parameters.is_empty() {
            ct.input_schema = Some(schema_from_map(&function.parameters));
        }

        if let Some(strict) = function.strict {
            ct.source_meta
                .insert(META_STRICT.to_string(), Value::Bool(strict));
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

        let parameters = match &ct.input_schema {
            Some(schema) => schema.filtered(&|f| self.supports(f)).to_map(),
            None => empty_object_schema(),
        };

        let description = canonical_description(ct);
        let function = OpenAiFunction {
            name: ct.name.clone(),
            description: (!description.is_empty()).then(|| description.to_string()),
            parameters,
            strict: ct.source_meta.get(META_STRICT).and_then(Value::as_bool),
        };

        Ok(NativeTool::OpenAi(OpenAiTool::new(function)))
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
        )
    }
}

pub(crate) fn empty_object_schema() -> Map<String, Value> {
    let mut m = Map::new();
    m.insert("type".to_string(), Value::String("object".to_string()));
    m
}
