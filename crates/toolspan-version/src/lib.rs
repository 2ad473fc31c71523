//! Semantic versioning for toolspan
//!
//! This crate provides the version handling used across the toolspan
//! workspace: parsing and comparing semantic versions, matching version
//! constraints, and negotiating compatible versions between components.
//!
//! # Examples
//!
//! ```
//! use toolspan_version::{Constraint, Version};
//!
//! let v = Version::parse("1.2.3")?;
//! assert_eq!(v.to_string(), "v1.2.3");
//!
//! let c = Constraint::parse("^1.0.0")?;
//! assert!(c.matches(&v));
//! # Ok::<(), toolspan_version::VersionError>(())
//! ```

mod compatibility;
mod constraint;
mod error;
mod version;

pub use compatibility::{Compat, Compatibility, Matrix};
pub use constraint::{Constraint, ConstraintOp};
pub use error::VersionError;
pub use version::Version;

/// Result type alias for version operations
pub type VersionResult<T> = Result<T, VersionError>;
