//! Lifting free-form JSON Schema mappings into [`CanonicalSchema`]
//!
//! The lift is permissive: unknown keywords are dropped, numeric keywords
//! coerce across integer and float representations, and nested entries
//! that are not objects are skipped rather than failing the whole schema.

use serde_json::{Map, Value};

use crate::canonical::CanonicalSchema;

/// Convert a JSON object mapping into a canonical schema.
pub(crate) fn schema_from_map(m: &Map<String, Value>) -> CanonicalSchema {
    let mut s = CanonicalSchema::default();

    let get_str = |key: &str| m.get(key).and_then(Value::as_str).map(str::to_string);

    s.schema_type = get_str("type");
    s.title = get_str("title");
    s.description = get_str("description");
    s.pattern = get_str("pattern");
    s.format = get_str("format");
    s.reference = get_str("$ref");

    s.const_value = m.get("const").cloned();
    s.default = m.get("default").cloned();
    if let Some(examples) = m.get("examples").and_then(Value::as_array) {
        s.examples = examples.clone();
    }

    s.multiple_of = m.get("multipleOf").and_then(Value::as_f64);
    s.minimum = m.get("minimum").and_then(Value::as_f64);
    s.maximum = m.get("maximum").and_then(Value::as_f64);
    s.min_length = m.get("minLength").and_then(as_u64_lenient);
    s.max_length = m.get("maxLength").and_then(as_u64_lenient);
    s.min_items = m.get("minItems").and_then(as_u64_lenient);
    s.max_items = m.get("maxItems").and_then(as_u64_lenient);
    s.min_properties = m.get("minProperties").and_then(as_u64_lenient);
    s.max_properties = m.get("maxProperties").and_then(as_u64_lenient);

    s.additional_properties = m.get("additionalProperties").and_then(Value::as_bool);
    s.unique_items = m.get("uniqueItems").and_then(Value::as_bool);
    s.nullable = m.get("nullable").and_then(Value::as_bool);
    s.deprecated = m.get("deprecated").and_then(Value::as_bool);
    s.read_only = m.get("readOnly").and_then(Value::as_bool);
    s.write_only = m.get("writeOnly").and_then(Value::as_bool);

    if let Some(required) = m.get("required").and_then(Value::as_array) {
        s.required = required
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
    }
    if let Some(values) = m.get("enum").and_then(Value::as_array) {
        s.enum_values = values.clone();
    }

    if let Some(props) = m.get("properties").and_then(Value::as_object) {
        for (name, value) in props {
            if let Some(prop) = value.as_object() {
                s.properties.insert(name.clone(), schema_from_map(prop));
            }
        }
    }
    if let Some(defs) = m.get("$defs").and_then(Value::as_object) {
        for (name, value) in defs {
            if let Some(def) = value.as_object() {
                s.defs.insert(name.clone(), schema_from_map(def));
            }
        }
    }

    if let Some(items) = m.get("items").and_then(Value::as_object) {
        s.items = Some(Box::new(schema_from_map(items)));
    }

    s.any_of = combinator_from(m.get("anyOf"));
    s.one_of = combinator_from(m.get("oneOf"));
    s.all_of = combinator_from(m.get("allOf"));
    if let Some(not) = m.get("not").and_then(Value::as_object) {
        s.not = Some(Box::new(schema_from_map(not)));
    }

    s
}

fn combinator_from(value: Option<&Value>) -> Vec<CanonicalSchema> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_object)
                .map(schema_from_map)
                .collect()
        })
        .unwrap_or_default()
}

// Integer keywords are non-negative; floats truncate toward zero and
// negative values are dropped.
fn as_u64_lenient(v: &Value) -> Option<u64> {
    if let Some(u) = v.as_u64() {
        return Some(u);
    }
    if let Some(f) = v.as_f64() {
        let truncated = f.trunc();
        if truncated >= 0.0 && truncated <= u64::MAX as f64 {
            return Some(truncated as u64);
        }
    }
    None
}
