//! Fluent construction of [`Tool`] values

use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::tags::normalize_tags;
use crate::tool::{Icon, Tool, ToolAnnotations};

/// Fluent builder for [`Tool`] instances.
///
/// ```
/// use toolspan_model::ToolBuilder;
/// use serde_json::json;
///
/// let tool = ToolBuilder::new("search")
///     .description("Full-text search")
///     .namespace("docs")
///     .input_schema(json!({"type": "object"}))
///     .read_only()
///     .build()?;
/// assert_eq!(tool.tool_id(), "docs:search");
/// # Ok::<(), toolspan_model::ModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToolBuilder {
    tool: Tool,
}

impl ToolBuilder {
    /// Start a builder for a tool with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tool: Tool::new(name),
        }
    }

    /// Set the tool's description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.tool.description = Some(desc.into());
        self
    }

    /// Set the tool's namespace.
    pub fn namespace(mut self, ns: impl Into<String>) -> Self {
        self.tool.namespace = Some(ns.into());
        self
    }

    /// Set the tool's version string.
    pub fn version(mut self, v: impl Into<String>) -> Self {
        self.tool.version = Some(v.into());
        self
    }

    /// Set discovery tags. Tags are normalized during [`build`](Self::build).
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the input schema (a JSON Schema object).
    pub fn input_schema(mut self, schema: Value) -> Self {
        self.tool.input_schema = schema;
        self
    }

    /// Set the output schema.
    pub fn output_schema(mut self, schema: Value) -> Self {
        self.tool.output_schema = Some(schema);
        self
    }

    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.tool.title = Some(title.into());
        self
    }

    /// Set the tool's icons.
    pub fn icons<I>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = Icon>,
    {
        self.tool.icons = icons.into_iter().collect();
        self
    }

    /// Set MCP annotations wholesale.
    pub fn annotations(mut self, annotations: ToolAnnotations) -> Self {
        self.tool.annotations = Some(annotations);
        self
    }

    /// Set free-form metadata.
    pub fn meta(mut self, meta: Map<String, Value>) -> Self {
        self.tool.meta = Some(meta);
        self
    }

    /// Mark the tool read-only via annotations.
    pub fn read_only(mut self) -> Self {
        self.tool.annotations.get_or_insert_with(Default::default).read_only_hint = true;
        self
    }

    /// Mark the tool idempotent via annotations.
    pub fn idempotent(mut self) -> Self {
        self.tool.annotations.get_or_insert_with(Default::default).idempotent_hint = true;
        self
    }

    /// Mark the tool destructive via annotations.
    pub fn destructive(mut self) -> Self {
        self.tool.annotations.get_or_insert_with(Default::default).destructive_hint = Some(true);
        self
    }

    /// Explicitly mark the tool non-destructive via annotations.
    pub fn non_destructive(mut self) -> Self {
        self.tool.annotations.get_or_insert_with(Default::default).destructive_hint = Some(false);
        self
    }

    /// Mark the tool as interacting with the outside world.
    pub fn open_world(mut self) -> Self {
        self.tool.annotations.get_or_insert_with(Default::default).open_world_hint = Some(true);
        self
    }

    /// Normalize tags, validate, and return the tool.
    pub fn build(mut self) -> Result<Tool, ModelError> {
        if !self.tool.tags.is_empty() {
            self.tool.tags = normalize_tags(&self.tool.tags);
        }
        self.tool.validate()?;
        Ok(self.tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_minimal() {
        let tool = ToolBuilder::new("echo").build().unwrap();
        assert_eq!(tool.name, "echo");
        assert!(tool.input_schema.is_object());
    }

    #[test]
    fn test_build_full() {
        let tool = ToolBuilder::new("search")
            .description("Full-text search")
            .namespace("docs")
            .version("2.0.0")
            .tags(["Search", "FULL text"])
            .input_schema(json!({"type": "object", "properties": {"q": {"type": "string"}}}))
            .output_schema(json!({"type": "object"}))
            .title("Search")
            .build()
            .unwrap();

        assert_eq!(tool.tool_id(), "docs:search:2.0.0");
        assert_eq!(tool.tags, vec!["search", "full-text"]);
        assert_eq!(tool.title.as_deref(), Some("Search"));
        assert!(tool.output_schema.is_some());
    }

    #[test]
    fn test_annotation_shortcuts() {
        let tool = ToolBuilder::new("rm")
            .destructive()
            .open_world()
            .build()
            .unwrap();

        let ann = tool.annotations.unwrap();
        assert_eq!(ann.destructive_hint, Some(true));
        assert_eq!(ann.open_world_hint, Some(true));
        assert!(!ann.read_only_hint);
    }

    #[test]
    fn test_read_only_and_idempotent() {
        let tool = ToolBuilder::new("ls").read_only().idempotent().build().unwrap();
        let ann = tool.annotations.unwrap();
        assert!(ann.read_only_hint);
        assert!(ann.idempotent_hint);
    }

    #[test]
    fn test_build_rejects_invalid_name() {
        assert!(ToolBuilder::new("bad name").build().is_err());
        assert!(ToolBuilder::new("").build().is_err());
    }
}
