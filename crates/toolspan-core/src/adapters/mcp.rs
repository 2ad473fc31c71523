//! MCP adapter
//!
//! MCP tools carry full JSON Schema 2020-12, so this adapter supports every
//! feature in the catalog and projection never filters. Tool metadata that
//! has no canonical analogue (`title`, `_meta`, `annotations`, `icons`) is
//! preserved in `source_meta` for round trips.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use toolspan_model::{Tool, ToolAnnotations};

use crate::adapter::Adapter;
use crate::adapters::map_schema::schema_from_map;
use crate::canonical::{CanonicalSchema, CanonicalTool, SecurityRequirement, SecurityScheme};
use crate::error::{ConvertError, ConvertResult, Direction};
use crate::feature::SchemaFeature;
use crate::native::NativeTool;

const META_TITLE: &str = "title";
const META_META: &str = "meta";
const META_ANNOTATIONS: &str = "annotations";
const META_ICONS: &str = "icons";

/// Adapter between [`toolspan_model::Tool`] and the canonical format.
#[derive(Debug, Default, Clone, Copy)]
pub struct McpAdapter;

/// Create a new MCP adapter.
pub fn new_mcp_adapter() -> McpAdapter {
    McpAdapter
}

impl Adapter for McpAdapter {
    fn name(&self) -> &'static str {
        "mcp"
    }

    fn to_canonical(&self, raw: &NativeTool) -> ConvertResult<CanonicalTool> {
        let err = |cause: ConvertError| {
            ConvertError::conversion(self.name(), Direction::ToCanonical, cause)
        };

        let NativeTool::Mcp(tool) = raw else {
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

        let input_schema = schema_from_json(&tool.input_schema).map_err(&err)?;
        let output_schema = match &tool.output_schema {
            Some(value) => schema_from_json(value).map_err(&err)?,
            None => None,
        };

        let mut ct = CanonicalTool {
            namespace: tool.namespace.clone().unwrap_or_default(),
            name: tool.name.clone(),
            display_name: tool.title.clone().unwrap_or_default(),
            version: tool.version.clone().unwrap_or_default(),
            description: tool.description.clone().unwrap_or_default(),
            tags: tool.tags.clone(),
            input_schema,
            output_schema,
            source_format: self.name().to_string(),
            ..CanonicalTool::default()
        };

        if let Some(ann) = &tool.annotations {
            if ct.display_name.is_empty() {
                if let Some(title) = &ann.title {
                    ct.display_name = title.clone();
                }
            }
            ct.annotations = annotations_to_map(ann);
            ct.idempotent = Some(ann.idempotent_hint);
        }

        if let Some(meta) = &tool.meta {
            lift_meta(meta, &mut ct);
        }

        // Side channel for same-adapter round trips.
        if let Some(title) = &tool.title {
            if !title.is_empty() {
                ct.source_meta
                    .insert(META_TITLE.to_string(), Value::String(title.clone()));
            }
        }
        if let Some(meta) = &tool.meta {
            ct.source_meta
                .insert(META_META.to_string(), Value::Object(meta.clone()));
        }
        if let Some(ann) = &tool.annotations {
            if let Ok(value) = serde_json::to_value(ann) {
                ct.source_meta.insert(META_ANNOTATIONS.to_string(), value);
            }
        }
        if !tool.icons.is_empty() {
            if let Ok(value) = serde_json::to_value(&tool.icons) {
                ct.source_meta.insert(META_ICONS.to_string(), value);
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

        let mut tool = Tool {
            name: ct.name.clone(),
            description: non_empty(&ct.description),
            namespace: non_empty(&ct.namespace),
            version: non_empty(&ct.version),
            tags: ct.tags.clone(),
            ..Tool::default()
        };

        if let Some(schema) = &ct.input_schema {
            tool.input_schema = Value::Object(schema.to_map());
        }
        if let Some(schema) = &ct.output_schema {
            tool.output_schema = Some(Value::Object(schema.to_map()));
        }

        // Restore preserved wire fields, letting typed canonical fields win.
        let mut base_annotations: Option<ToolAnnotations> = None;
        if let Some(title) = ct.source_meta.get(META_TITLE).and_then(Value::as_str) {
            tool.title = Some(title.to_string());
        }
        if let Some(meta) = ct.source_meta.get(META_META).and_then(Value::as_object) {
            tool.meta = Some(meta.clone());
        }
        if let Some(value) = ct.source_meta.get(META_ANNOTATIONS) {
            base_annotations = serde_json::from_value(value.clone()).ok();
        }
        if let Some(value) = ct.source_meta.get(META_ICONS) {
            if let Ok(icons) = serde_json::from_value(value.clone()) {
                tool.icons = icons;
            }
        }

        if !ct.display_name.is_empty() {
            tool.title = Some(ct.display_name.clone());
        }

        tool.annotations = annotations_from_canonical(ct, base_annotations);

        let mut meta = tool.meta.take().unwrap_or_default();
        project_meta(ct, &mut meta);
        if !meta.is_empty() {
            tool.meta = Some(meta);
        }

        Ok(NativeTool::Mcp(tool))
    }

    // MCP supports the full JSON Schema 2020-12 feature set.
    fn supports(&self, _feature: SchemaFeature) -> bool {
        true
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn schema_from_json(value: &Value) -> Result<Option<CanonicalSchema>, ConvertError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(m) => Ok(Some(schema_from_map(m))),
        other => Err(ConvertError::InvalidSchema(format!(
            "expected schema object, found {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn annotations_to_map(ann: &ToolAnnotations) -> Map<String, Value> {
    let mut out = Map::new();
    if let Some(v) = ann.destructive_hint {
        out.insert("destructiveHint".to_string(), Value::Bool(v));
    }
    if let Some(v) = ann.open_world_hint {
        out.insert("openWorldHint".to_string(), Value::Bool(v));
    }
    out.insert("idempotentHint".to_string(), Value::Bool(ann.idempotent_hint));
    out.insert("readOnlyHint".to_string(), Value::Bool(ann.read_only_hint));
    if let Some(title) = &ann.title {
        if !title.is_empty() {
            out.insert("title".to_string(), Value::String(title.clone()));
        }
    }
    out
}

fn annotations_from_canonical(
    ct: &CanonicalTool,
    base: Option<ToolAnnotations>,
) -> Option<ToolAnnotations> {
    let mut has = base.as_ref().is_some_and(has_mcp_annotations);
    let mut ann = base.unwrap_or_default();

    if let Some(v) = ct.annotations.get("destructiveHint").and_then(Value::as_bool) {
        ann.destructive_hint = Some(v);
        has = true;
    }
    if let Some(v) = ct.annotations.get("openWorldHint").and_then(Value::as_bool) {
        ann.open_world_hint = Some(v);
        has = true;
    }
    if let Some(v) = ct.annotations.get("idempotentHint").and_then(Value::as_bool) {
        ann.idempotent_hint = v;
        has = true;
    }
    if let Some(v) = ct.annotations.get("readOnlyHint").and_then(Value::as_bool) {
        ann.read_only_hint = v;
        has = true;
    }
    if let Some(v) = ct.annotations.get("title").and_then(Value::as_str) {
        ann.title = Some(v.to_string());
        has = true;
    }

    if let Some(idempotent) = ct.idempotent {
        ann.idempotent_hint = idempotent;
        has = true;
    }

    has.then_some(ann)
}

fn has_mcp_annotations(ann: &ToolAnnotations) -> bool {
    ann.destructive_hint.is_some()
        || ann.open_world_hint.is_some()
        || ann.title.as_deref().is_some_and(|t| !t.is_empty())
        || ann.idempotent_hint
        || ann.read_only_hint
}

fn lift_meta(meta: &Map<String, Value>, ct: &mut CanonicalTool) {
    if let Some(summary) = meta.get("summary").and_then(Value::as_str) {
        ct.summary = summary.to_string();
    }
    if let Some(category) = meta.get("category").and_then(Value::as_str) {
        ct.category = category.to_string();
    }

    let modes = |key: &str| meta.get(key).map(string_vec_from).unwrap_or_default();
    let input_modes = modes("inputModes");
    if !input_modes.is_empty() {
        ct.input_modes = input_modes;
    }
    let output_modes = modes("outputModes");
    if !output_modes.is_empty() {
        ct.output_modes = output_modes;
    }
    let examples = modes("examples");
    if !examples.is_empty() {
        ct.examples = examples;
    }

    if let Some(v) = meta.get("deterministic").and_then(Value::as_bool) {
        ct.deterministic = Some(v);
    }
    if let Some(v) = meta.get("streaming").and_then(Value::as_bool) {
        ct.streaming = Some(v);
    }

    if let Some(value) = meta.get("securitySchemes") {
        let schemes = security_schemes_from(value);
        if !schemes.is_empty() {
            ct.security_schemes = schemes;
        }
    }
    if let Some(value) = meta.get("securityRequirements") {
        let requirements = security_requirements_from(value);
        if !requirements.is_empty() {
            ct.security_requirements = requirements;
        }
    }
    if let Some(hints) = meta.get("uiHints").and_then(Value::as_object) {
        if !hints.is_empty() {
            ct.ui_hints = hints.clone();
        }
    }
}

fn project_meta(ct: &CanonicalTool, meta: &mut Map<String, Value>) {
    if !ct.summary.is_empty() {
        meta.insert("summary".to_string(), Value::String(ct.summary.clone()));
    }
    if !ct.category.is_empty() {
        meta.insert("category".to_string(), Value::String(ct.category.clone()));
    }
    if !ct.input_modes.is_empty() {
        meta.insert("inputModes".to_string(), string_array(&ct.input_modes));
    }
    if !ct.output_modes.is_empty() {
        meta.insert("outputModes".to_string(), string_array(&ct.output_modes));
    }
    if !ct.examples.is_empty() {
        meta.insert("examples".to_string(), string_array(&ct.examples));
    }
    if let Some(v) = ct.deterministic {
        meta.insert("deterministic".to_string(), Value::Bool(v));
    }
    if let Some(v) = ct.streaming {
        meta.insert("streaming".to_string(), Value::Bool(v));
    }
    if !ct.security_schemes.is_empty() {
        if let Ok(value) = serde_json::to_value(&ct.security_schemes) {
            meta.insert("securitySchemes".to_string(), value);
        }
    }
    if !ct.security_requirements.is_empty() {
        if let Ok(value) = serde_json::to_value(&ct.security_requirements) {
            meta.insert("securityRequirements".to_string(), value);
        }
    }
    if !ct.ui_hints.is_empty() {
        meta.insert("uiHints".to_string(), Value::Object(ct.ui_hints.clone()));
    }
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().map(|s| Value::String(s.clone())).collect())
}

fn string_vec_from(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn security_schemes_from(value: &Value) -> IndexMap<String, SecurityScheme> {
    let mut out = IndexMap::new();
    if let Some(obj) = value.as_object() {
        for (name, scheme) in obj {
            if let Some(scheme) = scheme.as_object() {
                out.insert(name.clone(), scheme.clone());
            }
        }
    }
    out
}

fn security_requirements_from(value: &Value) -> Vec<SecurityRequirement> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for item in items {
        let Some(obj) = item.as_object() else {
            continue;
        };
        let mut req = SecurityRequirement::new();
        for (scheme, scopes) in obj {
            match scopes {
                Value::Null => {
                    req.insert(scheme.clone(), Vec::new());
                }
                Value::Array(_) => {
                    req.insert(scheme.clone(), string_vec_from(scopes));
                }
                _ => {} // unsupported shape; skip
            }
        }
        if !req.is_empty() {
            out.push(req);
        }
    }
    out
}
