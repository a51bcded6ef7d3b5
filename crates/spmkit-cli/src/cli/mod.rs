//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use spmkit_core::domain::ProjectStyle;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "spmkit",
    bin_name = "spmkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap Swift packages with git history and boilerplate",
    long_about = "spmkit creates a Swift Package Manager project with a README, \
                  changelog, MIT license, a starter source file and Package.swift, \
                  then commits and tags it, optionally publishing it with gh.",
    after_help = "EXAMPLES:\n\
        \x20 spmkit new demo\n\
        \x20 spmkit new demo --style exe --repo --owner octocat\n\
        \x20 spmkit new MyKit --style lib --dir ~/Projects\n\
        \x20 spmkit completions bash > /usr/share/bash-completion/completions/spmkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Swift package.
    #[command(
        visible_alias = "n",
        about = "Create a new Swift package",
        after_help = "EXAMPLES:\n\
            \x20 spmkit new demo                  # executable, no dependencies\n\
            \x20 spmkit new demo --style lib      # library\n\
            \x20 spmkit new demo --repo --yes     # also create a public GitHub repo\n\
            \x20 spmkit new demo --dry-run        # show what would happen"
    )]
    New(NewArgs),

    /// Initialise an spmkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 spmkit init           # default location\n\
            \x20 spmkit init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 spmkit completions bash > ~/.local/share/bash-completion/completions/spmkit\n\
            \x20 spmkit completions zsh  > ~/.zfunc/_spmkit\n\
            \x20 spmkit completions fish > ~/.config/fish/completions/spmkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the spmkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 spmkit config get defaults.style\n\
            \x20 spmkit config set author.name \"Jane Doe\"\n\
            \x20 spmkit config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `spmkit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Package name. Becomes the directory, the module and the product name.
    #[arg(value_name = "NAME", help = "Package name")]
    pub name: String,

    /// Executable or library.
    #[arg(
        short = 's',
        long = "style",
        value_name = "STYLE",
        value_enum,
        help = "Package style [default: from config, else exe]"
    )]
    pub style: Option<Style>,

    /// Create a public GitHub repository and push to it.
    #[arg(
        short = 'r',
        long = "repo",
        overrides_with = "no_repo",
        help = "Create and push a public GitHub repo"
    )]
    pub repo: bool,

    /// Keep the package local even when `defaults.repo` is set.
    #[arg(long = "no-repo", overrides_with = "repo", help = "Do not create a GitHub repo")]
    pub no_repo: bool,

    /// Parent directory for the new package.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PARENT",
        help = "Parent directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Account shown in the README's `mint install` line.
    #[arg(long = "owner", value_name = "OWNER", help = "Repository owner for README")]
    pub owner: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Depend on Swift Argument Parser (executables only).
    #[arg(long = "sap", hide = true)]
    pub sap: bool,

    /// Depend on Swift General Utility.
    #[arg(long = "gen", hide = true)]
    pub general: bool,

    /// Depend on Swift Mac Utility (implies the general utility).
    #[arg(long = "mac", hide = true)]
    pub mac: bool,
}

/// Package style as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Executable package.
    #[value(name = "exe", alias = "executable")]
    Exe,
    /// Library package.
    #[value(name = "lib", alias = "library")]
    Lib,
}

impl NewArgs {
    /// `Some` when `--repo` or `--no-repo` was given; the later one wins.
    pub fn remote(&self) -> Option<bool> {
        match (self.repo, self.no_repo) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exe => write!(f, "exe"),
            Self::Lib => write!(f, "lib"),
        }
    }
}

impl From<Style> for ProjectStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Exe => ProjectStyle::Executable,
            Style::Lib => ProjectStyle::Library,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `spmkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `spmkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `spmkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.style`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
