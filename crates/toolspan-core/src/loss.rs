//! Feature-loss detection
//!
//! Walks a canonical tool's schemas and reports, with RFC 6901 JSON
//! Pointer paths, every keyword the target adapter cannot represent.

use crate::adapter::{Adapter, FeatureLossWarning};
use crate::canonical::{CanonicalSchema, CanonicalTool};
use crate::feature::SchemaFeature;

/// Collect warnings for every feature used by `tool`'s schemas that
/// `target` does not support.
pub(crate) fn detect_feature_loss(
    tool: &CanonicalTool,
    source: &dyn Adapter,
    target: &dyn Adapter,
) -> Vec<FeatureLossWarning> {
    let mut warnings = Vec::new();

    if let Some(schema) = &tool.input_schema {
        walk_schema(schema, source, target, "", &mut warnings);
    }
    if let Some(schema) = &tool.output_schema {
        walk_schema(schema, source, target, "", &mut warnings);
    }

    warnings
}

fn walk_schema(
    schema: &CanonicalSchema,
    source: &dyn Adapter,
    target: &dyn Adapter,
    path: &str,
    warnings: &mut Vec<FeatureLossWarning>,
) {
    for feature in SchemaFeature::ALL {
        if schema.uses(feature) && !target.supports(feature) {
            warnings.push(FeatureLossWarning {
                feature,
                path: path.to_string(),
                from_adapter: source.name().to_string(),
                to_adapter: target.name().to_string(),
            });
        }
    }

    for (name, prop) in &schema.properties {
        let child = join_pointer(path, &["properties", name]);
        walk_schema(prop, source, target, &child, warnings);
    }
    if let Some(items) = &schema.items {
        walk_schema(items, source, target, &join_pointer(path, &["items"]), warnings);
    }
    for (name, def) in &schema.defs {
        let child = join_pointer(path, &["$defs", name]);
        walk_schema(def, source, target, &child, warnings);
    }
    for (i, member) in schema.any_of.iter().enumerate() {
        let child = join_pointer(path, &["anyOf", &i.to_string()]);
        walk_schema(member, source, target, &child, warnings);
    }
    for (i, member) in schema.one_of.iter().enumerate() {
        let child = join_pointer(path, &["oneOf", &i.to_string()]);
        walk_schema(member, source, target, &child, warnings);
    }
    for (i, member) in schema.all_of.iter().enumerate() {
        let child = join_pointer(path, &["allOf", &i.to_string()]);
        walk_schema(member, source, target, &child, warnings);
    }
    if let Some(not) = &schema.not {
        walk_schema(not, source, target, &join_pointer(path, &["not"]), warnings);
    }
}

// RFC 6901: "~" escapes to "~0" and "/" to "~1" inside a reference token.
fn join_pointer(base: &str, segments: &[&str]) -> String {
    let mut path = base.to_string();
    for segment in segments {
        path.push('/');
        if segment.contains(['~', '/']) {
            path.push_str(&segment.replace('~', "~0").replace('/', "~1"));
        } else {
            path.push_str(segment);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{new_mcp_adapter, new_openai_adapter};
    use crate::canonical::CanonicalTool;

    fn tool_with_schema(schema: CanonicalSchema) -> CanonicalTool {
        CanonicalTool {
            name: "t".to_string(),
            input_schema: Some(schema),
            ..CanonicalTool::default()
        }
    }

    fn warned(warnings: &[FeatureLossWarning], feature: SchemaFeature, path: &str) -> bool {
        warnings.iter().any(|w| w.feature == feature && w.path == path)
    }

    #[test]
    fn test_no_warnings_when_target_supports_everything() {
        let mut schema = CanonicalSchema::object();
        schema.any_of = vec![CanonicalSchema::of_type("string")];
        schema.pattern = Some("^x".to_string());

        let mcp = new_mcp_adapter();
        let warnings = detect_feature_loss(&tool_with_schema(schema), &mcp, &mcp);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_warning_at_root() {
        let mut schema = CanonicalSchema::object();
        schema.any_of = vec![CanonicalSchema::of_type("string")];

        let warnings = detect_feature_loss(
            &tool_with_schema(schema),
            &new_mcp_adapter(),
            &new_openai_adapter(),
        );
        assert!(warned(&warnings, SchemaFeature::AnyOf, ""));
        let w = &warnings[0];
        assert_eq!(w.from_adapter, "mcp");
        assert_eq!(w.to_adapter, "openai");
    }

    #[test]
    fn test_warning_paths_for_nested_nodes() {
        let mut inner = CanonicalSchema::of_type("string");
        inner.pattern = Some("^a".to_string());

        let mut items = CanonicalSchema::of_type("string");
        items.format = Some("uri".to_string());

        let mut arr = CanonicalSchema::of_type("array");
        arr.items = Some(Box::new(items));

        let mut schema = CanonicalSchema::object();
        schema.properties.insert("q".to_string(), inner);
        schema.properties.insert("links".to_string(), arr);
        schema
            .defs
            .insert("aux".to_string(), CanonicalSchema {
                nullable: Some(true),
                ..CanonicalSchema::default()
            });

        let warnings = detect_feature_loss(
            &tool_with_schema(schema),
            &new_mcp_adapter(),
            &new_openai_adapter(),
        );

        assert!(warned(&warnings, SchemaFeature::Defs, ""));
        assert!(warned(&warnings, SchemaFeature::Pattern, "/properties/q"));
        assert!(warned(&warnings, SchemaFeature::Format, "/properties/links/items"));
        assert!(warned(&warnings, SchemaFeature::Nullable, "/$defs/aux"));
    }

    #[test]
    fn test_combinator_member_paths_are_indexed() {
        let mut member = CanonicalSchema::of_type("string");
        member.pattern = Some("^a".to_string());

        let mut schema = CanonicalSchema::object();
        schema.any_of = vec![CanonicalSchema::of_type("number"), member];

        let warnings = detect_feature_loss(
            &tool_with_schema(schema),
            &new_mcp_adapter(),
            &new_openai_adapter(),
        );
        assert!(warned(&warnings, SchemaFeature::Pattern, "/anyOf/1"));
    }

    #[test]
    fn test_output_schema_is_walked_too() {
        let mut out_schema = CanonicalSchema::object();
        out_schema.one_of = vec![CanonicalSchema::of_type("string")];

        let mut tool = tool_with_schema(CanonicalSchema::object());
        tool.output_schema = Some(out_schema);

        let warnings =
            detect_feature_loss(&tool, &new_mcp_adapter(), &new_openai_adapter());
        assert!(warned(&warnings, SchemaFeature::OneOf, ""));
    }

    #[test]
    fn test_pointer_segments_are_escaped() {
        let mut odd = CanonicalSchema::of_type("string");
        odd.pattern = Some("^a".to_string());

        let mut schema = CanonicalSchema::object();
        schema.properties.insert("a/b~c".to_string(), odd);

        let warnings = detect_feature_loss(
            &tool_with_schema(schema),
            &new_mcp_adapter(),
            &new_openai_adapter(),
        );
        assert!(warned(&warnings, SchemaFeature::Pattern, "/properties/a~1b~0c"));
    }
}
