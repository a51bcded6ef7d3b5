//! Application layer for spmkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectInitializer, VCS plan)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! boilerplate text itself. All of that lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    InitPlan, InitReport, ProjectInitializer, ToolPaths, VcsPlan, resolve_versioned_path,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandInvocation, CommandRunner, Filesystem};

pub use error::ApplicationError;
