// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for spmkit.
//!
//! This module contains pure business logic: project naming rules, the
//! dependency registry and the boilerplate text for every generated file.
//! Filesystem access, process execution and the clock are handled via ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Domain code never imports `tracing`
//! - **Immutable values**: Requests and structures are built once, then read
//! - **Deterministic**: Year and author are inputs, never looked up here
//!
// Public API - what the world sees
pub mod boilerplate;
pub mod dependencies;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    Authorship, GeneratedFile, ProjectRequest, ProjectRequestBuilder, ProjectStructure,
    common::RelativePath,
};

pub use dependencies::{
    DEPENDENCY_REGISTRY, Dependency, DependencyDef, VersionRequirement, manifest_dependencies,
    requested_dependencies,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Feature, FeatureSet, ProjectName, ProjectStyle};

pub use validation::DomainValidator;
