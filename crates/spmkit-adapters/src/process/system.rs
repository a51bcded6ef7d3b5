//! Runs external programs with `std::process::Command`.

use std::process::Command;

use spmkit_core::{
    application::{ApplicationError, ports::CommandInvocation, ports::CommandRunner},
    error::SpmkitResult,
};
use tracing::{debug, warn};

/// Production command runner.
///
/// The child's working directory is set per invocation; the process-wide
/// current directory is never changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, invocation: &CommandInvocation) -> SpmkitResult<String> {
        debug!(command = %invocation, cwd = %invocation.cwd.display(), "Running");

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .output()
            .map_err(|e| ApplicationError::CommandSpawn {
                command: invocation.to_string(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            warn!(
                command = %invocation,
                status = ?output.status.code(),
                stderr = %stderr.trim(),
                "Command failed"
            );
            return Err(ApplicationError::CommandFailed {
                command: invocation.to_string(),
                status: output.status.code(),
                stdout,
                stderr,
            }
            .into());
        }

        debug!(program = %invocation.program_name(), bytes = stdout.len(), "Command finished");
        Ok(stdout)
    }
}
