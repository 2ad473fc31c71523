//! Compatibility matrix for component version negotiation

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::VersionError;
use crate::version::Version;

/// A compatibility entry for one component
#[derive(Debug, Clone)]
pub struct Compatibility {
    /// Component the entry applies to
    pub component: String,
    /// Minimum supported version (inclusive)
    pub min_version: Version,
    /// Maximum supported version (inclusive); `None` means no upper bound
    pub max_version: Option<Version>,
    /// Whether versions in this range are deprecated
    pub deprecated: bool,
    /// Deprecation message shown to callers
    pub message: String,
}

/// Outcome of a compatibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compat {
    /// The version is compatible
    Compatible,
    /// The version is compatible but deprecated
    Deprecated(String),
    /// The version is not compatible
    Incompatible(String),
}

impl Compat {
    /// Returns true unless the version was rejected.
    pub fn is_compatible(&self) -> bool {
        !matches!(self, Compat::Incompatible(_))
    }
}

/// Compatibility information for multiple components.
///
/// Safe for concurrent use; checks take the read lock, `add` takes the
/// write lock.
#[derive(Debug, Default)]
pub struct Matrix {
    entries: RwLock<HashMap<String, Vec<Compatibility>>>,
}

impl Matrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a compatibility entry for a component.
    pub fn add(&self, entry: Compatibility) {
        self.entries
            .write()
            .entry(entry.component.clone())
            .or_default()
            .push(entry);
    }

    /// Check whether `v` is compatible for `component`.
    ///
    /// Unknown components are assumed compatible.
    pub fn check(&self, component: &str, v: &Version) -> Compat {
        let entries = self.entries.read();
        check_entries(&entries, component, v)
    }

    /// Pick the newest compatible version from `available`.
    pub fn negotiate(&self, component: &str, available: &[Version]) -> Result<Version, VersionError> {
        let entries = self.entries.read();

        let best = available
            .iter()
            .filter(|v| check_entries(&entries, component, v).is_compatible())
            .max();

        best.cloned()
            .ok_or_else(|| VersionError::NoCompatibleVersion(component.to_string()))
    }
}

fn check_entries(
    entries: &HashMap<String, Vec<Compatibility>>,
    component: &str,
    v: &Version,
) -> Compat {
    let Some(rows) = entries.get(component) else {
        return Compat::Compatible;
    };

    for row in rows {
        if v < &row.min_version {
            return Compat::Incompatible(format!(
                "version {v} is below minimum {}",
                row.min_version
            ));
        }
        if let Some(max) = &row.max_version {
            if v > max {
                return Compat::Incompatible(format!("version {v} exceeds maximum {max}"));
            }
        }
        if row.deprecated {
            return Compat::Deprecated(row.message.clone());
        }
    }

    Compat::Compatible
}
