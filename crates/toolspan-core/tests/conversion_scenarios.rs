//! End-to-end conversion scenarios through the registry.

use std::sync::Arc;

use serde_json::json;
use toolspan_core::adapters::anthropic::{AnthropicTool, CacheControl};
use toolspan_core::adapters::a2a::A2aAgentSkill;
use toolspan_core::adapters::gemini::{GeminiFunctionDeclaration, GeminiTool};
use toolspan_core::adapters::openai::OpenAiFunction;
use toolspan_core::{
    default_registry, Adapter, CanonicalTool, ConvertError, ConvertResult, NativeTool,
    SchemaFeature,
};
use toolspan_model::Tool;

fn mcp_tool(name: &str, schema: serde_json::Value) -> NativeTool {
    let mut tool = Tool::new(name);
    tool.description = Some("Test tool".to_string());
    tool.input_schema = schema;
    NativeTool::Mcp(tool)
}

#[test]
fn mcp_to_openai_basic() {
    let registry = default_registry();
    let input = mcp_tool(
        "get_weather",
        json!({
            "type": "object",
            "properties": {"location": {"type": "string"}},
            "required": ["location"]
        }),
    );

    let outcome = registry.convert(&input, "mcp", "openai").unwrap();
    assert!(outcome.warnings.is_empty());

    let tool = outcome.tool.as_openai().unwrap();
    assert_eq!(tool.tool_type, "function");
    assert_eq!(tool.function.name, "get_weather");
    assert_eq!(tool.function.parameters["type"], json!("object"));
    assert_eq!(tool.function.parameters["required"], json!(["location"]));
}

#[test]
fn mcp_to_openai_drops_any_of_with_warning() {
    let registry = default_registry();
    let input = mcp_tool(
        "search",
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "anyOf": [
                        {"type": "string"},
                        {"type": "array", "items": {"type": "string"}}
                    ]
                }
            }
        }),
    );

    let outcome = registry.convert(&input, "mcp", "openai").unwrap();

    let tool = outcome.tool.as_openai().unwrap();
    let query = tool.function.parameters["properties"]["query"]
        .as_object()
        .unwrap();
    assert!(!query.contains_key("anyOf"));

    assert!(outcome.warnings.iter().any(|w| {
        w.feature == SchemaFeature::AnyOf && w.from_adapter == "mcp" && w.to_adapter == "openai"
    }));
}

#[test]
fn mcp_to_anthropic_keeps_any_of_without_warning() {
    let registry = default_registry();
    let input = mcp_tool(
        "search",
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "anyOf": [
                        {"type": "string"},
                        {"type": "array", "items": {"type": "string"}}
                    ]
                }
            }
        }),
    );

    let outcome = registry.convert(&input, "mcp", "anthropic").unwrap();

    let tool = outcome.tool.as_anthropic().unwrap();
    let any_of = tool.input_schema["properties"]["query"]["anyOf"]
        .as_array()
        .unwrap();
    assert_eq!(any_of.len(), 2);

    assert!(
        !outcome.warnings.iter().any(|w| w.feature == SchemaFeature::AnyOf),
        "anthropic supports anyOf; no warning expected"
    );
}

#[test]
fn mcp_to_openai_reports_defs_ref_and_pattern() {
    let registry = default_registry();
    let input = mcp_tool(
        "lookup",
        json!({
            "type": "object",
            "$defs": {"address": {"type": "object", "pattern": "^[A-Z]"}},
            "properties": {"addr": {"$ref": "#/$defs/address"}}
        }),
    );

    let outcome = registry.convert(&input, "mcp", "openai").unwrap();

    for feature in [SchemaFeature::Defs, SchemaFeature::Ref, SchemaFeature::Pattern] {
        assert!(
            outcome.warnings.iter().any(|w| w.feature == feature),
            "expected a warning for {feature}"
        );
    }

    let tool = outcome.tool.as_openai().unwrap();
    assert!(!tool.function.parameters.contains_key("$defs"));
    let addr = tool.function.parameters["properties"]["addr"].as_object().unwrap();
    assert!(!addr.contains_key("$ref"));
    assert!(!addr.contains_key("pattern"));
}

#[test]
fn anthropic_round_trip_preserves_cache_control() {
    let registry = default_registry();
    let input = NativeTool::Anthropic(AnthropicTool {
        name: "cached".to_string(),
        description: Some("Cached tool".to_string()),
        input_schema: json!({"type": "object"}).as_object().unwrap().clone(),
        cache_control: Some(CacheControl::ephemeral()),
        ..AnthropicTool::default()
    });

    let outcome = registry.convert(&input, "anthropic", "anthropic").unwrap();
    let tool = outcome.tool.as_anthropic().unwrap();
    assert_eq!(tool.cache_control.as_ref().unwrap().control_type, "ephemeral");
    assert!(outcome.warnings.is_empty());
}

#[test]
fn a2a_skill_lift_parses_structured_id() {
    let registry = default_registry();
    let adapter = registry.get("a2a").unwrap();

    let skill = NativeTool::A2aSkill(A2aAgentSkill {
        id: "tools:search:1.2.3".to_string(),
        name: "Search".to_string(),
        description: "Find things".to_string(),
        tags: vec!["search".to_string()],
        ..A2aAgentSkill::default()
    });

    let ct = adapter.to_canonical(&skill).unwrap();
    assert_eq!(ct.namespace, "tools");
    assert_eq!(ct.name, "search");
    assert_eq!(ct.version, "1.2.3");
    assert_eq!(ct.display_name, "Search");
    assert_eq!(ct.id(), "tools:search");
    assert_eq!(ct.source_meta["skillId"], json!("tools:search:1.2.3"));
    assert_eq!(
        ct.input_schema.as_ref().unwrap().schema_type.as_deref(),
        Some("object")
    );
}

#[test]
fn gemini_rejects_multi_declaration_wrapper() {
    let registry = default_registry();
    let decl = GeminiFunctionDeclaration {
        name: "a".to_string(),
        ..GeminiFunctionDeclaration::default()
    };
    let wrapper = NativeTool::Gemini(GeminiTool {
        function_declarations: vec![decl.clone(), decl],
    });

    let err = registry.convert(&wrapper, "gemini", "openai").unwrap_err();
    match err {
        ConvertError::Conversion {
            adapter, direction, ..
        } => {
            assert_eq!(adapter, "gemini");
            assert_eq!(direction.to_string(), "to_canonical");
        }
        other => panic!("expected Conversion error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Error direction tagging
// ---------------------------------------------------------------------------

/// An adapter whose projection always fails, for exercising the engine's
/// target-side error wrapping.
#[derive(Debug)]
struct BrokenProjector;

impl Adapter for BrokenProjector {
    fn name(&self) -> &'static str {
        "broken"
    }
    fn to_canonical(&self, _raw: &NativeTool) -> ConvertResult<CanonicalTool> {
        Ok(CanonicalTool {
            name: "broken".to_string(),
            ..CanonicalTool::default()
        })
    }
    fn from_canonical(&self, _tool: &CanonicalTool) -> ConvertResult<NativeTool> {
        Err(ConvertError::InvalidSchema("always fails".to_string()))
    }
    fn supports(&self, _feature: SchemaFeature) -> bool {
        false
    }
}

#[test]
fn source_failure_is_tagged_to_canonical() {
    let registry = default_registry();
    let nameless = NativeTool::Mcp(Tool::default());

    let err = registry.convert(&nameless, "mcp", "openai").unwrap_err();
    match err {
        ConvertError::Conversion {
            adapter, direction, ..
        } => {
            assert_eq!(adapter, "mcp");
            assert_eq!(direction.to_string(), "to_canonical");
        }
        other => panic!("expected Conversion error, got {other:?}"),
    }
}

#[test]
fn target_failure_is_tagged_from_canonical() {
    let registry = default_registry();
    registry.register(Arc::new(BrokenProjector)).unwrap();

    let input = mcp_tool("t", json!({"type": "object"}));
    let err = registry.convert(&input, "mcp", "broken").unwrap_err();
    match err {
        ConvertError::Conversion {
            adapter, direction, ..
        } => {
            assert_eq!(adapter, "broken");
            assert_eq!(direction.to_string(), "from_canonical");
        }
        other => panic!("expected Conversion error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Cross-format spot checks
// ---------------------------------------------------------------------------

#[test]
fn openai_to_anthropic_carries_schema_and_description() {
    let registry = default_registry();
    let input = NativeTool::OpenAiFunction(OpenAiFunction {
        name: "summarize".to_string(),
        description: Some("Summarize text".to_string()),
        parameters: json!({
            "type": "object",
            "properties": {"text": {"type": "string", "maxLength": 4000}}
        })
        .as_object()
        .unwrap()
        .clone(),
        strict: Some(true),
    });

    let outcome = registry.convert(&input, "openai", "anthropic").unwrap();
    let tool = outcome.tool.as_anthropic().unwrap();

    assert_eq!(tool.name, "summarize");
    assert_eq!(tool.description.as_deref(), Some("Summarize text"));
    assert_eq!(
        tool.input_schema["properties"]["text"]["maxLength"],
        json!(4000)
    );
    assert!(outcome.warnings.is_empty());
}

#[test]
fn mcp_to_a2a_loses_schema_but_keeps_identity() {
    let registry = default_registry();
    let mut tool = Tool::new("search");
    tool.namespace = Some("docs".to_string());
    tool.version = Some("1.0.0".to_string());
    tool.description = Some("Find documents".to_string());
    tool.tags = vec!["search".to_string()];
    tool.input_schema = json!({
        "type": "object",
        "properties": {"q": {"type": "string", "minLength": 1}}
    });

    let outcome = registry.convert(&NativeTool::Mcp(tool), "mcp", "a2a").unwrap();
    let skill = outcome.tool.as_a2a_skill().unwrap();

    assert_eq!(skill.id, "docs:search:1.0.0");
    assert_eq!(skill.description, "Find documents");
    assert_eq!(skill.tags, vec!["search"]);

    // Everything schema-shaped is lost on the way to A2A.
    assert!(outcome
        .warnings
        .iter()
        .any(|w| w.feature == SchemaFeature::MinLength && w.to_adapter == "a2a"));
}

#[test]
fn gemini_round_trip_keeps_supported_schema_keywords() {
    let registry = default_registry();
    let input = NativeTool::GeminiFunction(GeminiFunctionDeclaration {
        name: "geo".to_string(),
        description: Some("Geocode".to_string()),
        parameters: Some(
            json!({
                "type": "object",
                "title": "Geo",
                "properties": {
                    "address": {"type": "string", "pattern": "^.+$", "nullable": true}
                },
                "$defs": {"aux": {"type": "string", "format": "uri"}}
            })
            .as_object()
            .unwrap()
            .clone(),
        ),
    });

    let outcome = registry.convert(&input, "gemini", "gemini").unwrap();
    assert!(outcome.warnings.is_empty());

    let params = outcome.tool.as_gemini().unwrap().function_declarations[0]
        .parameters
        .clone()
        .unwrap();
    assert_eq!(params["title"], json!("Geo"));
    assert_eq!(params["properties"]["address"]["pattern"], json!("^.+$"));
    assert_eq!(params["properties"]["address"]["nullable"], json!(true));
    assert_eq!(params["$defs"]["aux"]["format"], json!("uri"));
}
