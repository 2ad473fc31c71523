//! Version constraint parsing and matching

use std::fmt;

use crate::error::VersionError;
use crate::version::Version;

/// Comparison operator of a version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Exact match (`=1.2.3` or a bare version)
    Exact,
    /// Strictly greater (`>1.2.3`)
    Greater,
    /// Greater or equal (`>=1.2.3`)
    GreaterEq,
    /// Strictly less (`<1.2.3`)
    Less,
    /// Less or equal (`<=1.2.3`)
    LessEq,
    /// Same major version and not older (`^1.2.3`)
    Caret,
    /// Same major and minor version and not older (`~1.2.3`)
    Tilde,
}

impl ConstraintOp {
    fn symbol(self) -> &'static str {
        match self {
            ConstraintOp::Exact => "=",
            ConstraintOp::Greater => ">",
            ConstraintOp::GreaterEq => ">=",
            ConstraintOp::Less => "<",
            ConstraintOp::LessEq => "<=",
            ConstraintOp::Caret => "^",
            ConstraintOp::Tilde => "~",
        }
    }
}

/// A version constraint such as `>=1.0.0` or `^2.0.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Comparison operator
    pub op: ConstraintOp,
    /// The version the operator compares against
    pub version: Version,
}

impl Constraint {
    /// Parse a constraint string. A bare version means an exact match.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let s = s.trim();

        let (op, rest) = if let Some(rest) = s.strip_prefix(">=") {
            (ConstraintOp::GreaterEq, rest)
        } else if let Some(rest) = s.strip_prefix("<=") {
            (ConstraintOp::LessEq, rest)
        } else if let Some(rest) = s.strip_prefix('>') {
            (ConstraintOp::Greater, rest)
        } else if let Some(rest) = s.strip_prefix('<') {
            (ConstraintOp::Less, rest)
        } else if let Some(rest) = s.strip_prefix('^') {
            (ConstraintOp::Caret, rest)
        } else if let Some(rest) = s.strip_prefix('~') {
            (ConstraintOp::Tilde, rest)
        } else if let Some(rest) = s.strip_prefix('=') {
            (ConstraintOp::Exact, rest)
        } else {
            (ConstraintOp::Exact, s)
        };

        let version = Version::parse(rest.trim())?;
        Ok(Self { op, version })
    }

    /// Returns true if `v` satisfies the constraint.
    pub fn matches(&self, v: &Version) -> bool {
        match self.op {
            ConstraintOp::Exact => v == &self.version,
            ConstraintOp::Greater => v > &self.version,
            ConstraintOp::GreaterEq => v >= &self.version,
            ConstraintOp::Less => v < &self.version,
            ConstraintOp::LessEq => v <= &self.version,
            ConstraintOp::Caret => v.major == self.version.major && v >= &self.version,
            ConstraintOp::Tilde => {
                v.major == self.version.major
                    && v.minor == self.version.minor
                    && v >= &self.version
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op == ConstraintOp::Exact {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}{}", self.op.symbol(), self.version)
        }
    }
}

impl std::str::FromStr for Constraint {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
