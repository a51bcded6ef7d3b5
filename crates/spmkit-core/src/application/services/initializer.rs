//! Project Initializer - main application orchestrator.
//!
//! This service coordinates the whole workflow:
//! 1. Resolve a free project path under the parent directory
//! 2. Create the project root and its source directory
//! 3. Resolve authorship (year and author name)
//! 4. Assemble and write every boilerplate file
//! 5. Run the version-control plan
//!
//! The first failure aborts. Nothing already written is removed.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandInvocation, CommandRunner, Filesystem},
        services::{
            vcs::{self, ToolPaths},
            versioned_path::resolve_versioned_path,
        },
    },
    domain::{
        Authorship, DomainValidator as validator, ProjectRequest,
        boilerplate::{self, SOURCES_DIR},
    },
    error::{SpmkitError, SpmkitResult},
};

/// What `initialize` would do, without doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPlan {
    pub project_root: PathBuf,
    pub files: Vec<PathBuf>,
    pub commands: Vec<CommandInvocation>,
}

/// What `initialize` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub project_root: PathBuf,
    pub files: Vec<PathBuf>,
    pub commands: Vec<CommandInvocation>,
    /// Stdout of each remote command, in order.
    pub remote_output: Vec<String>,
}

/// Main project initialization service.
pub struct ProjectInitializer {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    tools: ToolPaths,
    year: Option<i32>,
    author: Option<String>,
}

impl ProjectInitializer {
    /// Create a new initializer with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use spmkit_core::application::{ProjectInitializer, ToolPaths};
    ///
    /// let initializer = ProjectInitializer::new(
    ///     filesystem, // Box<dyn Filesystem>
    ///     runner,     // Box<dyn CommandRunner>
    ///     ToolPaths::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        tools: ToolPaths,
    ) -> Self {
        Self {
            filesystem,
            runner,
            tools,
            year: None,
            author: None,
        }
    }

    /// Use a fixed copyright year instead of the local clock.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Use a fixed author name instead of asking git.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into()).filter(|a: &String| !a.trim().is_empty());
        self
    }

    pub fn tools(&self) -> &ToolPaths {
        &self.tools
    }

    /// Describe the files and commands `initialize` would produce.
    ///
    /// Runs no commands and writes nothing.
    #[instrument(skip_all, fields(request = %request, parent = %parent.display()))]
    pub fn plan(&self, request: &ProjectRequest, parent: &Path) -> SpmkitResult<InitPlan> {
        validator::validate_request(request)?;

        let project_root = self.project_root(request, parent);
        let files = boilerplate::planned_files(request)?
            .into_iter()
            .map(|rel| project_root.join(rel))
            .collect();
        let commands = vcs::plan(request, &self.tools, &project_root)
            .all()
            .cloned()
            .collect();

        Ok(InitPlan {
            project_root,
            files,
            commands,
        })
    }

    /// Create the project on disk and bootstrap version control.
    #[instrument(skip_all, fields(request = %request, parent = %parent.display()))]
    pub fn initialize(&self, request: &ProjectRequest, parent: &Path) -> SpmkitResult<InitReport> {
        validator::validate_request(request)?;

        // 1. Resolve path
        let project_root = self.project_root(request, parent);
        info!(root = %project_root.display(), "Creating project");

        // 2. Create root and source directory
        self.filesystem.create_dir_all(&project_root)?;
        self.filesystem.create_dir_all(
            &project_root.join(SOURCES_DIR).join(request.name().as_str()),
        )?;

        // 3. Authorship
        let authorship = self.authorship(&project_root)?;
        debug!(year = authorship.year, author = %authorship.author, "Authorship resolved");

        // 4. Assemble and write
        let structure = boilerplate::assemble(request, &authorship, &project_root)?;
        validator::validate_project_structure(&structure)?;

        for dir in structure.directories() {
            self.filesystem.create_dir_all(&project_root.join(dir))?;
        }

        let mut files = Vec::with_capacity(structure.file_count());
        for file in structure.files() {
            let path = project_root.join(&file.relative_path);
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "Wrote file");
            files.push(path);
        }
        info!(files = files.len(), "Boilerplate written");

        // 5. Version control
        let plan = vcs::plan(request, &self.tools, &project_root);
        let mut commands = Vec::with_capacity(plan.len());

        for invocation in &plan.local {
            self.runner.run(invocation)?;
            commands.push(invocation.clone());
        }

        let mut remote_output = Vec::with_capacity(plan.remote.len());
        for invocation in &plan.remote {
            let stdout = self.runner.run(invocation)?;
            commands.push(invocation.clone());
            remote_output.push(stdout);
        }

        info!(commands = commands.len(), "Project initialized");

        Ok(InitReport {
            project_root,
            files,
            commands,
            remote_output,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn project_root(&self, request: &ProjectRequest, parent: &Path) -> PathBuf {
        resolve_versioned_path(&*self.filesystem, &parent.join(request.name().as_str()))
    }

    fn authorship(&self, cwd: &Path) -> SpmkitResult<Authorship> {
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        let author = match &self.author {
            Some(author) => author.clone(),
            None => self.author_from_git(cwd)?,
        };
        Ok(Authorship::new(year, author))
    }

    fn author_from_git(&self, cwd: &Path) -> SpmkitResult<String> {
        let lookup = vcs::author_lookup(&self.tools, cwd);
        let stdout = self.runner.run(&lookup).map_err(|e| match e {
            // `git config` exits 1 when the key is unset.
            SpmkitError::Application(ApplicationError::CommandFailed { .. }) => {
                ApplicationError::AuthorUnavailable {
                    reason: "git user.name is not set".into(),
                }
                .into()
            }
            other => other,
        })?;

        let author = stdout.trim();
        if author.is_empty() {
            return Err(ApplicationError::AuthorUnavailable {
                reason: "git user.name is empty".into(),
            }
            .into());
        }
        Ok(author.to_owned())
    }
}
