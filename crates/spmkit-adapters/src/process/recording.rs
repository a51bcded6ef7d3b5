//! Scripted command runner for testing.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use spmkit_core::{
    application::{ApplicationError, ports::CommandInvocation, ports::CommandRunner},
    error::SpmkitResult,
};

/// Records every invocation and answers from a script instead of spawning.
///
/// Responses are keyed by `"<program name> <args...>"`, e.g.
/// `"git config user.name"`. Unscripted commands succeed with empty stdout.
#[derive(Debug, Clone, Default)]
pub struct RecordingCommandRunner {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    calls: Vec<CommandInvocation>,
    responses: HashMap<String, Response>,
}

#[derive(Debug, Clone)]
enum Response {
    Stdout(String),
    Fail { status: i32, stderr: String },
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `key` with `stdout`.
    pub fn respond(self, key: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.script(key.into(), Response::Stdout(stdout.into()))
    }

    /// Make `key` exit with `status` and `stderr`.
    pub fn fail(self, key: impl Into<String>, status: i32, stderr: impl Into<String>) -> Self {
        self.script(
            key.into(),
            Response::Fail {
                status,
                stderr: stderr.into(),
            },
        )
    }

    fn script(self, key: String, response: Response) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.responses.insert(key, response);
        }
        self
    }

    /// Every invocation seen so far, in order.
    pub fn calls(&self) -> Vec<CommandInvocation> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }

    /// Invocations rendered as `"<program name> <args...>"`.
    pub fn call_keys(&self) -> Vec<String> {
        self.calls().iter().map(key_of).collect()
    }
}

fn key_of(invocation: &CommandInvocation) -> String {
    let mut key = invocation.program_name();
    for arg in &invocation.args {
        key.push(' ');
        key.push_str(arg);
    }
    key
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, invocation: &CommandInvocation) -> SpmkitResult<String> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.calls.push(invocation.clone());

        match inner.responses.get(&key_of(invocation)) {
            None => Ok(String::new()),
            Some(Response::Stdout(out)) => Ok(out.clone()),
            Some(Response::Fail { status, stderr }) => Err(ApplicationError::CommandFailed {
                command: invocation.to_string(),
                status: Some(*status),
                stdout: String::new(),
                stderr: stderr.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_and_default_responses() {
        let runner = RecordingCommandRunner::new()
            .respond("git config user.name", "Jane Doe\n")
            .fail("git push --tags", 1, "rejected");

        let lookup = CommandInvocation::new("/usr/bin/git", ["config", "user.name"], "/w");
        assert_eq!(runner.run(&lookup).unwrap(), "Jane Doe\n");

        let init = CommandInvocation::new("/usr/bin/git", ["init"], "/w");
        assert_eq!(runner.run(&init).unwrap(), "");

        let push = CommandInvocation::new("/usr/bin/git", ["push", "--tags"], "/w");
        assert!(runner.run(&push).is_err());

        assert_eq!(
            runner.call_keys(),
            vec!["git config user.name", "git init", "git push --tags"]
        );
    }
}
