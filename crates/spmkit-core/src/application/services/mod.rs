//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "initialize a package".

pub mod initializer;
pub mod vcs;
pub mod versioned_path;

pub use initializer::{InitPlan, InitReport, ProjectInitializer};
pub use vcs::{ToolPaths, VcsPlan};
pub use versioned_path::resolve_versioned_path;
