//! Protocol-agnostic tool description conversion
//!
//! Language-model providers each accept a slightly different description of
//! an invocable tool. This crate converts among five of those formats —
//! MCP, OpenAI function calling, Anthropic tool use, Gemini function
//! declarations, and A2A agent cards — through a canonical intermediate
//! representation, in a hub-and-spoke shape: N adapters give N² conversion
//! pairs with N implementations.
//!
//! Conversions are pure, synchronous data transforms. No network, no
//! filesystem, no tool execution, and no schema validation: `$ref` stays an
//! opaque string and schema keywords are mapped lexically.
//!
//! # Converting a tool
//!
//! ```
//! use serde_json::json;
//! use toolspan_core::{default_registry, NativeTool};
//! use toolspan_model::Tool;
//!
//! let registry = default_registry();
//!
//! let mut mcp_tool = Tool::new("get_weather");
//! mcp_tool.description = Some("Get current weather".to_string());
//! mcp_tool.input_schema = json!({
//!     "type": "object",
//!     "properties": {"location": {"type": "string"}},
//!     "required": ["location"]
//! });
//!
//! let outcome = registry.convert(&NativeTool::Mcp(mcp_tool), "mcp", "openai")?;
//! let openai = outcome.tool.as_openai().expect("openai output");
//! assert_eq!(openai.function.name, "get_weather");
//! # Ok::<(), toolspan_core::ConvertError>(())
//! ```
//!
//! # Feature loss
//!
//! Formats support different JSON Schema subsets. Converting toward a
//! narrower format filters the unsupported keywords out of the projected
//! schema and reports each at its JSON Pointer location:
//!
//! ```
//! # use serde_json::json;
//! # use toolspan_core::{default_registry, NativeTool};
//! # use toolspan_model::Tool;
//! # let registry = default_registry();
//! # let mut tool = Tool::new("t");
//! # tool.input_schema = json!({"type": "object", "properties": {"q": {"anyOf": [{"type": "string"}]}}});
//! let outcome = registry.convert(&NativeTool::Mcp(tool), "mcp", "openai")?;
//! for warning in &outcome.warnings {
//!     eprintln!("{warning}");
//!     // feature anyOf lost converting from mcp to openai at /properties/q
//! }
//! # Ok::<(), toolspan_core::ConvertError>(())
//! ```
//!
//! # Custom adapters
//!
//! Implement [`Adapter`] and register it alongside the built-ins with
//! [`AdapterRegistry::register`]. Adapters must be stateless and
//! deterministic, and must filter unsupported keywords during projection
//! rather than emitting them.

mod adapter;
pub mod adapters;
mod canonical;
mod defaults;
mod error;
mod feature;
mod loss;
mod native;
mod registry;

pub use adapter::{Adapter, FeatureLossWarning};
pub use adapters::{
    new_a2a_adapter, new_anthropic_adapter, new_gemini_adapter, new_mcp_adapter,
    new_openai_adapter, A2aAdapter, AnthropicAdapter, GeminiAdapter, McpAdapter, OpenAiAdapter,
};
pub use canonical::{
    CanonicalProvider, CanonicalSchema, CanonicalTool, SecurityRequirement, SecurityScheme,
};
pub use defaults::default_registry;
pub use error::{ConvertError, ConvertResult, Direction};
pub use feature::SchemaFeature;
pub use native::NativeTool;
pub use registry::{AdapterRegistry, ConversionOutcome};
