//! The adapter contract
//!
//! An adapter handles bidirectional conversion between one wire format and
//! the canonical representation.
//!
//! Contract for implementations:
//!
//! - **Stateless**: adapters hold no mutable state and are safe to share
//!   across threads.
//! - **Ownership**: inputs are taken by shared reference and never mutated;
//!   conversions return freshly allocated values.
//! - **Errors**: `to_canonical` / `from_canonical` return
//!   [`ConvertError::Conversion`](crate::ConvertError::Conversion) for
//!   invalid input.
//! - **Determinism**: the same input yields structurally equal output, and
//!   [`supports`](Adapter::supports) is a pure predicate.

use std::fmt;

use crate::canonical::CanonicalTool;
use crate::error::ConvertResult;
use crate::feature::SchemaFeature;
use crate::native::NativeTool;

/// A protocol-specific tool adapter.
pub trait Adapter: Send + Sync + fmt::Debug {
    /// The adapter's stable lowercase identifier (e.g. `"mcp"`).
    fn name(&self) -> &'static str;

    /// Lift a native tool into the canonical format.
    ///
    /// Implementations must set `source_format` to [`name`](Adapter::name)
    /// and populate `source_meta` with whatever their
    /// [`from_canonical`](Adapter::from_canonical) needs for a lossless
    /// same-adapter round trip.
    fn to_canonical(&self, raw: &NativeTool) -> ConvertResult<CanonicalTool>;

    /// Project a canonical tool into the adapter's native format, filtering
    /// out unsupported schema keywords at every depth rather than emitting
    /// them and trusting the peer to ignore them.
    fn from_canonical(&self, tool: &CanonicalTool) -> ConvertResult<NativeTool>;

    /// Whether this adapter's format can represent a schema feature.
    /// Features it cannot represent generate warnings during conversion.
    fn supports(&self, feature: SchemaFeature) -> bool;
}

/// A schema feature that will be lost during a conversion.
///
/// This is a warning, not an error: the conversion proceeds with reduced
/// fidelity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLossWarning {
    /// The feature the target cannot represent
    pub feature: SchemaFeature,
    /// RFC 6901 JSON Pointer to the schema node using the feature; empty
    /// means the root schema
    pub path: String,
    /// Source adapter name
    pub from_adapter: String,
    /// Target adapter name
    pub to_adapter: String,
}

impl fmt::Display for FeatureLossWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(
            f,
            "feature {} lost converting from {} to {} at {}",
            self.feature, self.from_adapter, self.to_adapter, path
        )
    }
}
