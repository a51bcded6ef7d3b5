//! spmkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the spmkit
//! Swift package bootstrapper, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           spmkit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ProjectInitializer, VCS plan)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, CommandRunner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     spmkit-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectRequest, boilerplate, registry) │
//! │         No I/O, no logging              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use spmkit_core::prelude::*;
//!
//! // 1. Describe the package
//! let request = ProjectRequest::builder("demo")
//!     .style(ProjectStyle::Executable)
//!     .feature(Feature::ArgumentParser)
//!     .build()
//!     .unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let initializer = ProjectInitializer::new(filesystem, runner, ToolPaths::default());
//! initializer.initialize(&request, Path::new(".")).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CommandInvocation, InitPlan, InitReport, ProjectInitializer, ToolPaths,
        ports::{CommandRunner, Filesystem},
    };
    pub use crate::domain::{
        Authorship, Feature, FeatureSet, ProjectName, ProjectRequest, ProjectStructure,
        ProjectStyle,
    };
    pub use crate::error::{SpmkitError, SpmkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
