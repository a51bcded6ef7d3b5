//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external program could not be started.
    #[error("Failed to start `{command}`: {reason}")]
    CommandSpawn { command: String, reason: String },

    /// An external program ran and exited unsuccessfully.
    #[error("`{command}` failed ({})", status_text(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The author identity could not be determined.
    #[error("Could not determine the author name: {reason}")]
    AuthorUnavailable { reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

fn status_text(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandSpawn { command, .. } => vec![
                format!("Could not run: {}", command),
                "Check that the tool is installed at the configured path".into(),
                "Set tools.git / tools.gh with: spmkit config set".into(),
            ],
            Self::CommandFailed { stderr, .. } => {
                let mut out = Vec::new();
                if let Some(line) = stderr.lines().find(|l| !l.trim().is_empty()) {
                    out.push(format!("Tool said: {}", line.trim()));
                }
                out.push(
                    "The project files were written; fix the issue and rerun the git steps by hand"
                        .into(),
                );
                out
            }
            Self::AuthorUnavailable { .. } => vec![
                "Set your git identity: git config --global user.name \"Your Name\"".into(),
                "Or set it for spmkit: spmkit config set author.name \"Your Name\"".into(),
            ],
            Self::StoreLockError => vec![
                "Internal state was poisoned by an earlier panic".into(),
                "Try again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. }
            | Self::CommandSpawn { .. }
            | Self::CommandFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
            Self::AuthorUnavailable { .. } => ErrorCategory::Configuration,
        }
    }
}
