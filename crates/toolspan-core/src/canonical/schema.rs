//! The canonical JSON Schema representation
//!
//! [`CanonicalSchema`] is a superset of the schema subsets used by MCP,
//! OpenAI, Anthropic, Gemini, and A2A. Every optional keyword is an
//! `Option` so an absent `minimum` stays distinguishable from `minimum: 0`.
//! `$ref` is an opaque string; references are never resolved, so the
//! in-memory structure is always a finite tree.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::feature::SchemaFeature;

/// A JSON Schema definition covering every keyword any adapter can emit.
///
/// All contained data is owned, so `Clone` produces a fully independent
/// deep copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalSchema {
    /// JSON type (`object`, `array`, `string`, `number`, `integer`,
    /// `boolean`, `null`)
    pub schema_type: Option<String>,
    /// Short schema name
    pub title: Option<String>,
    /// What the schema describes
    pub description: Option<String>,

    /// `const`: restricts to a single value
    pub const_value: Option<Value>,
    /// `default` value
    pub default: Option<Value>,
    /// `examples`: sample values
    pub examples: Vec<Value>,
    /// `enum`: restricts values to a fixed set
    pub enum_values: Vec<Value>,

    /// `multipleOf` numeric constraint
    pub multiple_of: Option<f64>,
    /// `minimum` numeric bound
    pub minimum: Option<f64>,
    /// `maximum` numeric bound
    pub maximum: Option<f64>,

    /// `minLength` string bound
    pub min_length: Option<u64>,
    /// `maxLength` string bound
    pub max_length: Option<u64>,
    /// `pattern`: opaque regex source, never compiled here
    pub pattern: Option<String>,
    /// `format`: opaque semantic format name
    pub format: Option<String>,

    /// `minItems` array bound
    pub min_items: Option<u64>,
    /// `maxItems` array bound
    pub max_items: Option<u64>,
    /// `uniqueItems` array uniqueness
    pub unique_items: Option<bool>,
    /// Schema for array elements
    pub items: Option<Box<CanonicalSchema>>,

    /// `minProperties` object bound
    pub min_properties: Option<u64>,
    /// `maxProperties` object bound
    pub max_properties: Option<u64>,
    /// Property schemas, in insertion order for stable serialization
    pub properties: IndexMap<String, CanonicalSchema>,
    /// Property names that must be present
    pub required: Vec<String>,
    /// `additionalProperties`: whether extra properties are allowed
    pub additional_properties: Option<bool>,

    /// `$ref`: opaque reference string, never resolved
    pub reference: Option<String>,
    /// `$defs`: named schema definitions
    pub defs: IndexMap<String, CanonicalSchema>,

    /// `anyOf` combinator members
    pub any_of: Vec<CanonicalSchema>,
    /// `oneOf` combinator members
    pub one_of: Vec<CanonicalSchema>,
    /// `allOf` combinator members
    pub all_of: Vec<CanonicalSchema>,
    /// `not` combinator
    pub not: Option<Box<CanonicalSchema>>,

    /// OpenAPI `nullable` annotation
    pub nullable: Option<bool>,
    /// OpenAPI `deprecated` annotation
    pub deprecated: Option<bool>,
    /// OpenAPI `readOnly` annotation
    pub read_only: Option<bool>,
    /// OpenAPI `writeOnly` annotation
    pub write_only: Option<bool>,
}

impl CanonicalSchema {
    /// An empty schema of the given JSON type.
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    /// An empty `object` schema, the placeholder formats without schema
    /// support use.
    pub fn object() -> Self {
        Self::of_type("object")
    }

    /// Returns true if this node uses the given feature.
    ///
    /// String-valued keywords count as used only when non-empty; `const`
    /// and `default` count as used whenever present.
    pub fn uses(&self, feature: SchemaFeature) -> bool {
        fn filled(s: &Option<String>) -> bool {
            s.as_deref().is_some_and(|s| !s.is_empty())
        }

        match feature {
            SchemaFeature::Ref => filled(&self.reference),
            SchemaFeature::Defs => !self.defs.is_empty(),
            SchemaFeature::AnyOf => !self.any_of.is_empty(),
            SchemaFeature::OneOf => !self.one_of.is_empty(),
            SchemaFeature::AllOf => !self.all_of.is_empty(),
            SchemaFeature::Not => self.not.is_some(),
            SchemaFeature::Pattern => filled(&self.pattern),
            SchemaFeature::Format => filled(&self.format),
            SchemaFeature::AdditionalProperties => self.additional_properties.is_some(),
            SchemaFeature::Minimum => self.minimum.is_some(),
            SchemaFeature::Maximum => self.maximum.is_some(),
            SchemaFeature::MinLength => self.min_length.is_some(),
            SchemaFeature::MaxLength => self.max_length.is_some(),
            SchemaFeature::Enum => !self.enum_values.is_empty(),
            SchemaFeature::Const => self.const_value.is_some(),
            SchemaFeature::Default => self.default.is_some(),
            SchemaFeature::Title => filled(&self.title),
            SchemaFeature::Examples => !self.examples.is_empty(),
            SchemaFeature::MultipleOf => self.multiple_of.is_some(),
            SchemaFeature::MinItems => self.min_items.is_some(),
            SchemaFeature::MaxItems => self.max_items.is_some(),
            SchemaFeature::MinProperties => self.min_properties.is_some(),
            SchemaFeature::MaxProperties => self.max_properties.is_some(),
            SchemaFeature::UniqueItems => self.unique_items.is_some(),
            SchemaFeature::Nullable => self.nullable.is_some(),
            SchemaFeature::Deprecated => self.deprecated.is_some(),
            SchemaFeature::ReadOnly => self.read_only.is_some(),
            SchemaFeature::WriteOnly => self.write_only.is_some(),
        }
    }

    /// Convert to a JSON object mapping. A keyword appears iff its field is
    /// present and non-empty; nested schemas convert recursively.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut m = Map::new();

        fn put_str(m: &mut Map<String, Value>, key: &str, v: &Option<String>) {
            if let Some(s) = v {
                if !s.is_empty() {
                    m.insert(key.to_string(), Value::String(s.clone()));
                }
            }
        }

        put_str(&mut m, "type", &self.schema_type);
        put_str(&mut m, "title", &self.title);
        put_str(&mut m, "description", &self.description);
        put_str(&mut m, "pattern", &self.pattern);
        put_str(&mut m, "format", &self.format);
        put_str(&mut m, "$ref", &self.reference);

        if let Some(v) = &self.const_value {
            m.insert("const".to_string(), v.clone());
        }
        if let Some(v) = &self.default {
            m.insert("default".to_string(), v.clone());
        }
        if !self.examples.is_empty() {
            m.insert("examples".to_string(), Value::Array(self.examples.clone()));
        }

        if let Some(v) = self.multiple_of {
            m.insert("multipleOf".to_string(), json_number(v));
        }
        if let Some(v) = self.minimum {
            m.insert("minimum".to_string(), json_number(v));
        }
        if let Some(v) = self.maximum {
            m.insert("maximum".to_string(), json_number(v));
        }
        if let Some(v) = self.min_length {
            m.insert("minLength".to_string(), Value::from(v));
        }
        if let Some(v) = self.max_length {
            m.insert("maxLength".to_string(), Value::from(v));
        }
        if let Some(v) = self.min_items {
            m.insert("minItems".to_string(), Value::from(v));
        }
        if let Some(v) = self.max_items {
            m.insert("maxItems".to_string(), Value::from(v));
        }
        if let Some(v) = self.min_properties {
            m.insert("minProperties".to_string(), Value::from(v));
        }
        if let Some(v) = self.max_properties {
            m.insert("maxProperties".to_string(), Value::from(v));
        }

        if let Some(v) = self.unique_items {
            m.insert("uniqueItems".to_string(), Value::Bool(v));
        }
        if let Some(v) = self.additional_properties {
            m.insert("additionalProperties".to_string(), Value::Bool(v));
        }
        if let Some(v) = self.nullable {
            m.insert("nullable".to_string(), Value::Bool(v));
        }
        if let Some(v) = self.deprecated {
            m.insert("deprecated".to_string(), Value::Bool(v));
        }
        if let Some(v) = self.read_only {
            m.insert("readOnly".to_string(), Value::Bool(v));
        }
        if let Some(v) = self.write_only {
            m.insert("writeOnly".to_string(), Value::Bool(v));
        }

        if !self.required.is_empty() {
            m.insert(
                "required".to_string(),
                Value::Array(self.required.iter().map(|s| Value::String(s.clone())).collect()),
            );
        }
        if !self.enum_values.is_empty() {
            m.insert("enum".to_string(), Value::Array(self.enum_values.clone()));
        }

        if !self.properties.is_empty() {
            let mut props = Map::new();
            for (k, v) in &self.properties {
                props.insert(k.clone(), Value::Object(v.to_map()));
            }
            m.insert("properties".to_string(), Value::Object(props));
        }
        if !self.defs.is_empty() {
            let mut defs = Map::new();
            for (k, v) in &self.defs {
                defs.insert(k.clone(), Value::Object(v.to_map()));
            }
            m.insert("$defs".to_string(), Value::Object(defs));
        }

        if let Some(items) = &self.items {
            m.insert("items".to_string(), Value::Object(items.to_map()));
        }

        if !self.any_of.is_empty() {
            m.insert("anyOf".to_string(), schema_array(&self.any_of));
        }
        if !self.one_of.is_empty() {
            m.insert("oneOf".to_string(), schema_array(&self.one_of));
        }
        if !self.all_of.is_empty() {
            m.insert("allOf".to_string(), schema_array(&self.all_of));
        }
        if let Some(not) = &self.not {
            m.insert("not".to_string(), Value::Object(not.to_map()));
        }

        m
    }

    /// Produce a copy of this schema with every keyword the predicate does
    /// not support removed, at every depth.
    ///
    /// `type`, `description`, `required`, `properties`, and `items` are
    /// structural and always kept (recursing where applicable); everything
    /// else is kept only when `supports` says so. The result shares no
    /// storage with `self`.
    pub fn filtered(&self, supports: &dyn Fn(SchemaFeature) -> bool) -> CanonicalSchema {
        let mut out = CanonicalSchema {
            schema_type: self.schema_type.clone(),
            description: self.description.clone(),
            required: self.required.clone(),
            ..CanonicalSchema::default()
        };

        if supports(SchemaFeature::Title) {
            out.title = self.title.clone();
        }
        if supports(SchemaFeature::Const) {
            out.const_value = self.const_value.clone();
        }
        if supports(SchemaFeature::Default) {
            out.default = self.default.clone();
        }
        if supports(SchemaFeature::Examples) {
            out.examples = self.examples.clone();
        }
        if supports(SchemaFeature::Enum) {
            out.enum_values = self.enum_values.clone();
        }
        if supports(SchemaFeature::MultipleOf) {
            out.multiple_of = self.multiple_of;
        }
        if supports(SchemaFeature::Minimum) {
            out.minimum = self.minimum;
        }
        if supports(SchemaFeature::Maximum) {
            out.maximum = self.maximum;
        }
        if supports(SchemaFeature::MinLength) {
            out.min_length = self.min_length;
        }
        if supports(SchemaFeature::MaxLength) {
            out.max_length = self.max_length;
        }
        if supports(SchemaFeature::Pattern) {
            out.pattern = self.pattern.clone();
        }
        if supports(SchemaFeature::Format) {
            out.format = self.format.clone();
        }
        if supports(SchemaFeature::MinItems) {
            out.min_items = self.min_items;
        }
        if supports(SchemaFeature::MaxItems) {
            out.max_items = self.max_items;
        }
        if supports(SchemaFeature::UniqueItems) {
            out.unique_items = self.unique_items;
        }
        if supports(SchemaFeature::MinProperties) {
            out.min_properties = self.min_properties;
        }
        if supports(SchemaFeature::MaxProperties) {
            out.max_properties = self.max_properties;
        }
        if supports(SchemaFeature::AdditionalProperties) {
            out.additional_properties = self.additional_properties;
        }
        if supports(SchemaFeature::Ref) {
            out.reference = self.reference.clone();
        }
        if supports(SchemaFeature::Nullable) {
            out.nullable = self.nullable;
        }
        if supports(SchemaFeature::Deprecated) {
            out.deprecated = self.deprecated;
        }
        if supports(SchemaFeature::ReadOnly) {
            out.read_only = self.read_only;
        }
        if supports(SchemaFeature::WriteOnly) {
            out.write_only = self.write_only;
        }

        out.properties = self
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.filtered(supports)))
            .collect();
        if let Some(items) = &self.items {
            out.items = Some(Box::new(items.filtered(supports)));
        }

        if supports(SchemaFeature::Defs) {
            out.defs = self
                .defs
                .iter()
                .map(|(k, v)| (k.clone(), v.filtered(supports)))
                .collect();
        }
        if supports(SchemaFeature::AnyOf) {
            out.any_of = self.any_of.iter().map(|s| s.filtered(supports)).collect();
        }
        if supports(SchemaFeature::OneOf) {
            out.one_of = self.one_of.iter().map(|s| s.filtered(supports)).collect();
        }
        if supports(SchemaFeature::AllOf) {
            out.all_of = self.all_of.iter().map(|s| s.filtered(supports)).collect();
        }
        if supports(SchemaFeature::Not) {
            if let Some(not) = &self.not {
                out.not = Some(Box::new(not.filtered(supports)));
            }
        }

        out
    }
}

// Integral f64 values serialize as JSON integers, matching how the bound
// arrived on the wire in the common case.
fn json_number(v: f64) -> Value {
    if v.fract() == 0.0 && v.is_finite() && v.abs() < (i64::MAX as f64) {
        Value::from(v as i64)
    } else {
        serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
    }
}

fn schema_array(schemas: &[CanonicalSchema]) -> Value {
    Value::Array(schemas.iter().map(|s| Value::Object(s.to_map())).collect())
}
