//! MCP-compatible tool model for toolspan
//!
//! This crate defines the [`Tool`] record used across the toolspan
//! workspace. It mirrors the Model Context Protocol tool definition and
//! adds three extensions on top: `namespace`, `version`, and `tags`.
//!
//! Two serializers are provided and kept deliberately distinct:
//!
//! - [`Tool::to_json`] / [`Tool::from_json`] include the extensions;
//! - [`Tool::to_mcp_json`] / [`Tool::from_mcp_json`] emit and accept only
//!   the standard MCP fields, so the bytes can go straight to an MCP peer.
//!
//! Tool identifiers are `namespace:name:version` strings with the last two
//! segments optional; see [`ToolId`].

mod backend;
mod builder;
mod error;
mod id;
mod tags;
mod tool;

pub use backend::ToolBackend;
pub use builder::ToolBuilder;
pub use error::ModelError;
pub use id::ToolId;
pub use tags::normalize_tags;
pub use tool::{Icon, Tool, ToolAnnotations, MCP_VERSION};

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;
