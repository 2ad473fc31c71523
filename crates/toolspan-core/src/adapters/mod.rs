//! The built-in protocol adapters

pub mod a2a;
pub mod anthropic;
pub mod gemini;
mod helpers;
mod map_schema;
pub mod mcp;
pub mod openai;

pub use a2a::{new_a2a_adapter, A2aAdapter};
pub use anthropic::{new_anthropic_adapter, AnthropicAdapter};
pub use gemini::{new_gemini_adapter, GeminiAdapter};
pub use mcp::{new_mcp_adapter, McpAdapter};
pub use openai::{new_openai_adapter, OpenAiAdapter};
