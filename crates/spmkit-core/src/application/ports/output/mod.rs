//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `spmkit-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::SpmkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `spmkit_adapters::filesystem::LocalFilesystem` (production)
/// - `spmkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are always passed fully joined; implementations never consult the
/// process working directory for relative resolution.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SpmkitResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SpmkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// One external program execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandInvocation {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// File name of the program, e.g. `git` for `/usr/bin/git`.
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

/// Shell-like rendering; arguments containing whitespace are double-quoted.
impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `spmkit_adapters::process::SystemCommandRunner` (production)
/// - `spmkit_adapters::process::RecordingCommandRunner` (testing)
///
/// Runs to completion and returns captured stdout. A non-zero exit is an
/// `ApplicationError::CommandFailed`; a program that cannot be started is an
/// `ApplicationError::CommandSpawn`.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, invocation: &CommandInvocation) -> SpmkitResult<String>;
}
