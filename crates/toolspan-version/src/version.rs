//! Semantic version parsing and comparison

use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::VersionError;

static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$")
        .expect("semver regex is valid")
});

/// A semantic version (`major.minor.patch[-prerelease][+build]`).
///
/// Ordering follows semver precedence with one simplification: prerelease
/// identifiers compare lexically rather than per-identifier. Build metadata
/// is ignored by comparisons, so two versions differing only in build
/// metadata are equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Version {
    /// Major version component
    pub major: u64,
    /// Minor version component
    pub minor: u64,
    /// Patch version component
    pub patch: u64,
    /// Prerelease identifier (empty when absent)
    #[serde(default)]
    pub prerelease: String,
    /// Build metadata (empty when absent, never affects ordering)
    #[serde(default)]
    pub build: String,
}

impl Version {
    /// Create a plain `major.minor.patch` version.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: String::new(),
            build: String::new(),
        }
    }

    /// Parse a semantic version string. A leading `v` is accepted.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let caps = SEMVER_RE
            .captures(s)
            .ok_or_else(|| VersionError::InvalidVersion(s.to_string()))?;

        let part = |i: usize| -> Result<u64, VersionError> {
            caps.get(i)
                .expect("numeric capture group")
                .as_str()
                .parse()
                .map_err(|_| VersionError::InvalidVersion(s.to_string()))
        };

        Ok(Self {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3)?,
            prerelease: caps.get(4).map(|m| m.as_str().to_string()).unwrap_or_default(),
            build: caps.get(5).map(|m| m.as_str().to_string()).unwrap_or_default(),
        })
    }

    /// Returns true if `self` is compatible with `other`: same major
    /// version and not older.
    pub fn compatible(&self, other: &Version) -> bool {
        self.major == other.major && *self >= *other
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }
}

// A released version outranks any prerelease of the same triple.
fn compare_prerelease(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}
