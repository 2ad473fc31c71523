//! Canonical intermediate representation
//!
//! The hub of the hub-and-spoke conversion model: a superset tool and
//! schema representation every adapter lifts into and projects out of.

mod provider;
mod schema;
mod tool;

pub use provider::CanonicalProvider;
pub use schema::CanonicalSchema;
pub use tool::{CanonicalTool, SecurityRequirement, SecurityScheme};
