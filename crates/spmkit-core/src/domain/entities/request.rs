//! The `ProjectRequest` aggregate root and its builder.
//!
//! A `ProjectRequest` is the validated description of the package the user
//! wants to create. It exists for the duration of one invocation only.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use crate::domain::{
    error::DomainError,
    value_objects::{Feature, FeatureSet, ProjectName, ProjectStyle},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated project request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: ProjectName,
    style: ProjectStyle,
    features: FeatureSet,
    create_remote: bool,
    owner: Option<String>,
}

impl ProjectRequest {
    /// Start building a request for `name`.
    pub fn builder(name: impl Into<String>) -> ProjectRequestBuilder {
        ProjectRequestBuilder::new(name)
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }
    pub const fn style(&self) -> ProjectStyle {
        self.style
    }
    pub const fn features(&self) -> FeatureSet {
        self.features
    }
    pub const fn create_remote(&self) -> bool {
        self.create_remote
    }
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Whether the entry point should be an `ArgumentParser` command.
    ///
    /// The flag is ignored for libraries.
    pub fn uses_argument_parser(&self) -> bool {
        self.style.is_executable() && self.features.contains(Feature::ArgumentParser)
    }
}

impl fmt::Display for ProjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, features: {})",
            self.name, self.style, self.features
        )?;
        if self.create_remote {
            f.write_str(" + remote")?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ProjectRequest`]. The name is validated in [`Self::build`].
#[derive(Debug, Clone)]
pub struct ProjectRequestBuilder {
    name: String,
    style: ProjectStyle,
    features: FeatureSet,
    create_remote: bool,
    owner: Option<String>,
}

impl ProjectRequestBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: ProjectStyle::default(),
            features: FeatureSet::empty(),
            create_remote: false,
            owner: None,
        }
    }

    pub fn style(mut self, style: ProjectStyle) -> Self {
        self.style = style;
        self
    }

    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    pub fn create_remote(mut self, create_remote: bool) -> Self {
        self.create_remote = create_remote;
        self
    }

    /// Hosting account shown in the README installation instructions.
    /// Blank values are treated as unset.
    pub fn owner(mut self, owner: Option<String>) -> Self {
        self.owner = owner.filter(|o| !o.trim().is_empty());
        self
    }

    pub fn build(self) -> Result<ProjectRequest, DomainError> {
        Ok(ProjectRequest {
            name: ProjectName::new(self.name)?,
            style: self.style,
            features: self.features,
            create_remote: self.create_remote,
            owner: self.owner,
        })
    }
}

// ── Authorship ────────────────────────────────────────────────────────────────

/// The two external facts the boilerplate depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorship {
    pub year: i32,
    pub author: String,
}

impl Authorship {
    pub fn new(year: i32, author: impl Into<String>) -> Self {
        Self {
            year,
            author: author.into(),
        }
    }
}
