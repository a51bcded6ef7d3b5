//! Known package dependency registry.
//!
//! Each optional dependency is described exactly once by its
//! [`DependencyDef`]. README bullets, `.package(...)` entries and
//! `.product(...)` entries all derive from this table, so their order
//! always agrees.
//!
//! # Adding a New Dependency
//!
//! 1. Add a [`Dependency`] variant
//! 2. Add one [`DependencyDef`] entry to [`DEPENDENCY_REGISTRY`]
//! 3. Decide which [`Feature`] pulls it in inside [`requested_dependencies`]

use crate::domain::value_objects::{Feature, FeatureSet, ProjectStyle};

/// A package the generated manifest may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dependency {
    ArgumentParser,
    GeneralUtility,
    MacUtility,
}

/// How the manifest constrains the dependency's version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRequirement {
    /// `.exact("x.y.z")`
    Exact(&'static str),
    /// `from: "x.y.z"`
    From(&'static str),
}

impl VersionRequirement {
    /// The requirement as it appears inside `.package(url:, ...)`.
    pub fn manifest_fragment(&self) -> String {
        match self {
            Self::Exact(v) => format!(".exact(\"{v}\")"),
            Self::From(v) => format!("from: \"{v}\""),
        }
    }
}

/// Everything the assembler needs to know about one dependency.
#[derive(Debug, Clone, Copy)]
pub struct DependencyDef {
    pub dependency: Dependency,
    /// Repository URL used in `.package(url:)`.
    pub url: &'static str,
    pub requirement: VersionRequirement,
    /// Product linked by the target.
    pub product: &'static str,
    /// Package identity (last URL path segment).
    pub package: &'static str,
    /// Display title for the README bullet.
    pub title: &'static str,
}

/// Single source of truth for dependency metadata, in canonical order.
pub static DEPENDENCY_REGISTRY: &[DependencyDef] = &[
    DependencyDef {
        dependency: Dependency::ArgumentParser,
        url: "https://github.com/apple/swift-argument-parser",
        // SAP changes its API between minor releases; pin it.
        requirement: VersionRequirement::Exact("0.4.3"),
        product: "ArgumentParser",
        package: "swift-argument-parser",
        title: "Swift Argument Parser",
    },
    DependencyDef {
        dependency: Dependency::GeneralUtility,
        url: "https://github.com/erica/Swift-General-Utility",
        requirement: VersionRequirement::From("0.0.6"),
        product: "GeneralUtility",
        package: "Swift-General-Utility",
        title: "Swift General Utility",
    },
    DependencyDef {
        dependency: Dependency::MacUtility,
        url: "https://github.com/erica/Swift-Mac-Utility",
        requirement: VersionRequirement::From("0.0.2"),
        product: "MacUtility",
        package: "Swift-Mac-Utility",
        title: "Swift Mac Utility",
    },
];

impl Dependency {
    /// Registry entry for this dependency.
    pub fn def(self) -> &'static DependencyDef {
        DEPENDENCY_REGISTRY
            .iter()
            .find(|d| d.dependency == self)
            .unwrap_or_else(|| unreachable!("{self:?} missing from DEPENDENCY_REGISTRY"))
    }
}

/// Dependencies requested by a feature set, ignoring project style.
///
/// `mac` implies the general utility package, which is listed once even
/// when both `gen` and `mac` are set.
pub fn requested_dependencies(features: FeatureSet) -> Vec<Dependency> {
    let mut out = Vec::with_capacity(3);
    if features.contains(Feature::ArgumentParser) {
        out.push(Dependency::ArgumentParser);
    }
    if features.contains(Feature::GeneralUtility) || features.contains(Feature::MacUtility) {
        out.push(Dependency::GeneralUtility);
    }
    if features.contains(Feature::MacUtility) {
        out.push(Dependency::MacUtility);
    }
    out
}

/// Dependencies the manifest declares.
///
/// Only executables get dependencies; a library manifest is always
/// dependency-free regardless of the requested features.
pub fn manifest_dependencies(style: ProjectStyle, features: FeatureSet) -> Vec<Dependency> {
    if style.is_executable() {
        requested_dependencies(features)
    } else {
        Vec::new()
    }
}
