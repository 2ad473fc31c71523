//! The default registry with all built-in adapters

use std::sync::Arc;

use crate::adapters::{
    new_a2a_adapter, new_anthropic_adapter, new_gemini_adapter, new_mcp_adapter,
    new_openai_adapter,
};
use crate::registry::AdapterRegistry;

/// A registry pre-configured with the MCP, OpenAI, Anthropic, A2A, and
/// Gemini adapters.
pub fn default_registry() -> AdapterRegistry {
    let registry = AdapterRegistry::new();

    // Built-in names are distinct, so registration cannot collide.
    registry
        .register(Arc::new(new_mcp_adapter()))
        .expect("register mcp");
    registry
        .register(Arc::new(new_openai_adapter()))
        .expect("register openai");
    registry
        .register(Arc::new(new_anthropic_adapter()))
        .expect("register anthropic");
    registry
        .register(Arc::new(new_a2a_adapter()))
        .expect("register a2a");
    registry
        .register(Arc::new(new_gemini_adapter()))
        .expect("register gemini");

    registry
}
