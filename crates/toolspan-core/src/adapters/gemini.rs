//! Gemini function-declaration adapter
//!
//! Gemini speaks an OpenAPI-style schema subset: references, `anyOf`, and
//! string validation are in, `const`, `oneOf`/`allOf`/`not`, and
//! `uniqueItems` are out. The wrapper form (`functionDeclarations`) is only
//! accepted when it contains exactly one declaration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::adapter::Adapter;
use crate::adapters::helpers::canonical_description;
use crate::adapters::map_schema::schema_from_map;
use crate::canonical::{CanonicalSchema, CanonicalTool};
use crate::error::{ConvertError, ConvertResult, Direction};
use crate::feature::SchemaFeature;
use crate::native::NativeTool;

/// A Gemini function declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeminiFunctionDeclaration {
    /// Function name
    pub name: String,
    /// What the function does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameter schema (a JSON Schema object)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
}

/// The Gemini tools wrapper holding function declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiTool {
    /// The wrapped declarations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub function_declarations: Vec<GeminiFunctionDeclaration>,
}

/// Adapter between Gemini function declarations and the canonical format.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeminiAdapter;

/// Create a new Gemini adapter.
pub fn new_gemini_adapter() -> GeminiAdapter {
    GeminiAdapter
}

impl Adapter for GeminiAdapter {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn to_canonical(&self, raw: &NativeTool) -> ConvertResult<CanonicalTool> {
        let declaration = match raw {
            NativeTool::GeminiFunction(declaration) => declaration,
            NativeTool::Gemini(tool) => {
                if tool.function_declarations.len() != 1 {
                    return Err(ConvertError::conversion(
                        self.name(),
                        Direction::ToCanonical,
                        "gemini tool must contain exactly one function declaration",
                    ));
                }
                &tool.function_declarations[0]
            }
            other => {
                return Err(ConvertError::conversion(
                    self.name(),
                    Direction::ToCanonical,
                    format!("unsupported input: {}", other.kind()),
                ));
            }
        };

        if declaration.name.is_empty() {
            return Err(ConvertError::conversion(
                self.name(),
                Direction::ToCanonical,
                "function name is required",
            ));
        }

        let input_schema = match &declaration.parameters {
            Some(parameters) if !parameters.is_empty() => schema_from_map(parameters),
            _ => CanonicalSchema::object(),
        };

        Ok(CanonicalTool {
            name: declaration.name.clone(),
            description: declaration.description.clone().unwrap_or_default(),
            input_schema: Some(input_schema),
            source_format: self.name().to_string(),
            ..CanonicalTool::default()
        })
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
            None => CanonicalSchema::object().to_map(),
        };

        let description = canonical_description(ct);
        let declaration = GeminiFunctionDeclaration {
            name: ct.name.clone(),
            description: (!description.is_empty()).then(|| description.to_string()),
            parameters: Some(parameters),
        };

        Ok(NativeTool::Gemini(GeminiTool {
            function_declarations: vec![declaration],
        }))
    }

    fn supports(&self, feature: SchemaFeature) -> bool {
        matches!(
            feature,
            SchemaFeature::Ref
                | SchemaFeature::Defs
                | SchemaFeature::AnyOf
                | SchemaFeature::Pattern
                | SchemaFeature::Format
                | SchemaFeature::AdditionalProperties
                | SchemaFeature::Minimum
                | SchemaFeature::Maximum
                | SchemaFeature::MinLength
                | SchemaFeature::MaxLength
                | SchemaFeature::MinItems
                | SchemaFeature::MaxItems
                | SchemaFeature::MinProperties
                | SchemaFeature::MaxProperties
                | SchemaFeature::Enum
                | SchemaFeature::Default
                | SchemaFeature::Title
                | SchemaFeature::Nullable
        )
    }
}
