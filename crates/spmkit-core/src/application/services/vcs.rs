//! Version-control bootstrap plan.
//!
//! Pure: builds the ordered list of `git`/`gh` invocations for a request.
//! Running them is the initializer's job.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::ports::CommandInvocation;
use crate::domain::{ProjectRequest, ProjectStyle, boilerplate::SEED_VERSION};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial Commit";

/// Absolute locations of the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub git: PathBuf,
    pub gh: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            git: PathBuf::from("/usr/bin/git"),
            gh: PathBuf::from("/usr/local/bin/gh"),
        }
    }
}

/// Branch the first commit lives on.
///
/// Executables stay on `master` so `mint install` finds them.
pub fn default_branch(style: ProjectStyle) -> &'static str {
    match style {
        ProjectStyle::Executable => "master",
        ProjectStyle::Library => "main",
    }
}

/// Commands split by whether they touch the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsPlan {
    pub local: Vec<CommandInvocation>,
    pub remote: Vec<CommandInvocation>,
}

impl VcsPlan {
    /// Every command in execution order.
    pub fn all(&self) -> impl Iterator<Item = &CommandInvocation> {
        self.local.iter().chain(self.remote.iter())
    }

    pub fn len(&self) -> usize {
        self.local.len() + self.remote.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the VCS plan for `request`, every command rooted at `root`.
pub fn plan(request: &ProjectRequest, tools: &ToolPaths, root: &Path) -> VcsPlan {
    let git = |args: &[&str]| CommandInvocation::new(&tools.git, args.iter().copied(), root);
    let branch = default_branch(request.style());

    let local = vec![
        git(&["init"]),
        git(&["add", "."]),
        git(&["commit", "-m", INITIAL_COMMIT_MESSAGE]),
        git(&["branch", "-M", branch]),
        git(&["tag", "-a", SEED_VERSION, "-m", SEED_VERSION]),
    ];

    let remote = if request.create_remote() {
        vec![
            CommandInvocation::new(
                &tools.gh,
                [
                    "repo",
                    "create",
                    request.name().as_str(),
                    "--public",
                    "--source",
                    ".",
                    "--remote",
                    "origin",
                ],
                root,
            ),
            git(&["push", "-u", "origin", branch]),
            git(&["push", "--tags"]),
        ]
    } else {
        Vec::new()
    };

    VcsPlan { local, remote }
}

/// `git config user.name`, run from `cwd`.
pub fn author_lookup(tools: &ToolPaths, cwd: &Path) -> CommandInvocation {
    CommandInvocation::new(&tools.git, ["config", "user.name"], cwd)
}
