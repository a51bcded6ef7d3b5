//! Domain value objects: ProjectName, ProjectStyle, Feature, FeatureSet.
//!
//! These are pure value types with equality-by-value and no identity. The
//! dependency metadata attached to each [`Feature`] lives in
//! `dependencies.rs`; this file only defines the types and their string
//! representations.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A project name usable both as a directory name and a Swift identifier.
///
/// Invariant: non-empty, first character alphabetic or `_`, every other
/// character alphanumeric or `_`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first letter upper-cased, e.g. `demo` → `Demo`.
    ///
    /// Only the first character changes; `myTool` becomes `MyTool`.
    pub fn type_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("name cannot be empty"));
    };

    if first == '.' {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if !(first.is_alphabetic() || first == '_') {
        return Err(invalid("name must start with a letter or '_'"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_alphanumeric() || *c == '_')) {
        return Err(invalid(&format!(
            "character '{bad}' is not allowed in a Swift identifier"
        )));
    }

    Ok(())
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── ProjectStyle ──────────────────────────────────────────────────────────────

/// Whether the package produces an executable or a library product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStyle {
    #[default]
    #[serde(rename = "exe", alias = "executable")]
    Executable,
    #[serde(rename = "lib", alias = "library")]
    Library,
}

impl ProjectStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Executable => "exe",
            Self::Library => "lib",
        }
    }

    pub const fn is_executable(self) -> bool {
        matches!(self, Self::Executable)
    }
}

impl fmt::Display for ProjectStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Feature ───────────────────────────────────────────────────────────────────

/// An optional dependency toggle.
///
/// Declaration order is the canonical order used everywhere a list of
/// features or dependencies is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Apple's swift-argument-parser.
    ArgumentParser,
    /// General-purpose utility package.
    GeneralUtility,
    /// macOS platform utility package. Pulls in [`Feature::GeneralUtility`].
    MacUtility,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::ArgumentParser,
        Feature::GeneralUtility,
        Feature::MacUtility,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentParser => "sap",
            Self::GeneralUtility => "gen",
            Self::MacUtility => "mac",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::ArgumentParser => 0b001,
            Self::GeneralUtility => 0b010,
            Self::MacUtility => 0b100,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FeatureSet ────────────────────────────────────────────────────────────────

/// A set of [`Feature`]s. Iteration always follows [`Feature::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FeatureSet(u8);

impl FeatureSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, feature: Feature) {
        self.0 |= feature.bit();
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.insert(feature);
        self
    }

    /// Insert `feature` only when `enabled` is true. Handy for mapping flags.
    pub fn with_if(self, feature: Feature, enabled: bool) -> Self {
        if enabled { self.with(feature) } else { self }
    }

    pub const fn contains(&self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(|f| f.as_str()).collect();
        f.write_str(&names.join(","))
    }
}
