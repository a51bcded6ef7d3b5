//! Implementation of the `spmkit new` command.
//!
//! Responsibility: turn CLI arguments and config defaults into a
//! `ProjectRequest`, hand it to the core `ProjectInitializer`, and display
//! the result. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use spmkit_adapters::{LocalFilesystem, SystemCommandRunner};
use spmkit_core::{
    application::{CommandInvocation, ProjectInitializer},
    domain::{Feature, FeatureSet, ProjectRequest, ProjectStyle},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `spmkit new` command.
///
/// 1. Build and validate the request
/// 2. Dry run: print the plan and stop
/// 3. Confirm before publishing a public repository
/// 4. Initialize the package
/// 5. Print what was done
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config)?;
    let parent = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));

    debug!(
        style = %request.style(),
        features = %request.features(),
        remote = request.create_remote(),
        parent = %parent.display(),
        "Request resolved"
    );

    let initializer = build_initializer(&config);

    if args.dry_run {
        let plan = initializer.plan(&request, &parent)?;
        let summary = Summary::new(true, &plan.project_root, &plan.files, &plan.commands, &[]);
        return summary.show(&output);
    }

    if request.create_remote() && !args.yes && !confirm_remote(request.name().as_str())? {
        return Err(CliError::Cancelled);
    }

    output.header(&format!("Creating '{}'...", request.name()))?;
    info!(project = %request.name(), "Initialization started");

    let report = initializer.initialize(&request, &parent)?;

    info!(root = %report.project_root.display(), "Initialization completed");

    Summary::new(
        false,
        &report.project_root,
        &report.files,
        &report.commands,
        &report.remote_output,
    )
    .show(&output)?;

    if !output.is_json() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.project_root.display()))?;
        output.print(match request.style() {
            ProjectStyle::Executable => "  swift run",
            ProjectStyle::Library => "  swift build",
        })?;
        if readme_lacks_owner(&request) {
            output.print("  spmkit config set defaults.owner <account>   # README install line")?;
        }
    }

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

/// Flags win over config defaults.
fn build_request(args: &NewArgs, config: &AppConfig) -> CliResult<ProjectRequest> {
    let style = args
        .style
        .map(ProjectStyle::from)
        .unwrap_or(config.defaults.style);

    let features = FeatureSet::empty()
        .with_if(Feature::ArgumentParser, args.sap)
        .with_if(Feature::GeneralUtility, args.general)
        .with_if(Feature::MacUtility, args.mac);

    let owner = args.owner.clone().or_else(|| config.defaults.owner.clone());

    ProjectRequest::builder(args.name.as_str())
        .style(style)
        .features(features)
        .create_remote(args.remote().unwrap_or(config.defaults.repo))
        .owner(owner)
        .build()
        .map_err(CliError::from)
}

/// The README's `mint install` line falls back to `<owner>/<name>`.
fn readme_lacks_owner(request: &ProjectRequest) -> bool {
    request.style().is_executable() && request.owner().is_none()
}

fn build_initializer(config: &AppConfig) -> ProjectInitializer {
    let initializer = ProjectInitializer::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        config.tools.clone(),
    );
    match &config.author.name {
        Some(name) => initializer.with_author(name.as_str()),
        None => initializer,
    }
}

// ── Confirmation ──────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn confirm_remote(name: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!("Create public GitHub repository '{name}'?"))
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("could not read confirmation ({e}); pass --yes to skip it"),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_remote(_name: &str) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Display ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Summary<'a> {
    dry_run: bool,
    project_root: &'a Path,
    files: &'a [PathBuf],
    commands: Vec<String>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    remote_output: &'a [String],
}

impl<'a> Summary<'a> {
    fn new(
        dry_run: bool,
        project_root: &'a Path,
        files: &'a [PathBuf],
        commands: &[CommandInvocation],
        remote_output: &'a [String],
    ) -> Self {
        Self {
            dry_run,
            project_root,
            files,
            commands: commands.iter().map(ToString::to_string).collect(),
            remote_output,
        }
    }

    fn show(&self, output: &OutputManager) -> CliResult<()> {
        if output.is_json() {
            output.json(self)?;
            return Ok(());
        }

        if self.dry_run {
            output.info(&format!(
                "Dry run: would create {}",
                self.project_root.display()
            ))?;
        } else {
            output.success(&format!("Created {}", self.project_root.display()))?;
        }

        output.print("Files:")?;
        output.list(self.files.iter().map(|f| f.display().to_string()))?;
        output.print("Commands:")?;
        output.list(&self.commands)?;

        for text in self.remote_output.iter().map(|s| s.trim()) {
            if !text.is_empty() {
                output.print(text)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat, Style};

    fn args(name: &str) -> NewArgs {
        NewArgs {
            name: name.into(),
            style: None,
            repo: false,
            no_repo: false,
            dir: None,
            owner: None,
            yes: false,
            dry_run: false,
            sap: false,
            general: false,
            mac: false,
        }
    }

    fn quiet_output() -> OutputManager {
        let global = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: Some(OutputFormat::Plain),
        };
        OutputManager::new(&global, &AppConfig::default())
    }

    #[test]
    fn defaults_to_plain_executable() {
        let req = build_request(&args("demo"), &AppConfig::default()).unwrap();
        assert_eq!(req.style(), ProjectStyle::Executable);
        assert!(req.features().is_empty());
        assert!(!req.create_remote());
        assert_eq!(req.owner(), None);
    }

    #[test]
    fn hidden_flags_map_to_features() {
        let mut a = args("demo");
        a.sap = true;
        a.mac = true;
        let req = build_request(&a, &AppConfig::default()).unwrap();
        assert!(req.features().contains(Feature::ArgumentParser));
        assert!(req.features().contains(Feature::MacUtility));
        assert!(!req.features().contains(Feature::GeneralUtility));
    }

    #[test]
    fn config_supplies_defaults() {
        let mut cfg = AppConfig::default();
        cfg.defaults.style = ProjectStyle::Library;
        cfg.defaults.repo = true;
        cfg.defaults.owner = Some("octocat".into());

        let req = build_request(&args("mylib"), &cfg).unwrap();
        assert_eq!(req.style(), ProjectStyle::Library);
        assert!(req.create_remote());
        assert_eq!(req.owner(), Some("octocat"));
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = AppConfig::default();
        cfg.defaults.style = ProjectStyle::Library;
        cfg.defaults.owner = Some("octocat".into());

        let mut a = args("demo");
        a.style = Some(Style::Exe);
        a.owner = Some("jane".into());

        let req = build_request(&a, &cfg).unwrap();
        assert_eq!(req.style(), ProjectStyle::Executable);
        assert_eq!(req.owner(), Some("jane"));
    }

    #[test]
    fn no_repo_flag_overrides_config() {
        let mut cfg = AppConfig::default();
        cfg.defaults.repo = true;

        let mut a = args("demo");
        a.no_repo = true;
        let req = build_request(&a, &cfg).unwrap();
        assert!(!req.create_remote());

        let req = build_request(&args("demo"), &cfg).unwrap();
        assert!(req.create_remote());
    }

    #[test]
    fn owner_hint_only_for_executables_without_owner() {
        let cfg = AppConfig::default();
        assert!(readme_lacks_owner(&build_request(&args("demo"), &cfg).unwrap()));

        let mut lib = args("demo");
        lib.style = Some(Style::Lib);
        assert!(!readme_lacks_owner(&build_request(&lib, &cfg).unwrap()));

        let mut owned = args("demo");
        owned.owner = Some("octocat".into());
        assert!(!readme_lacks_owner(&build_request(&owned, &cfg).unwrap()));
    }

    #[test]
    fn invalid_name_is_user_error() {
        let err = build_request(&args("my-tool"), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidProjectName { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut a = args("demo");
        a.dry_run = true;
        a.repo = true;
        a.dir = Some(tmp.path().to_path_buf());

        execute(a, AppConfig::default(), quiet_output()).unwrap();
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn summary_serialises_paths_and_commands() {
        let root = PathBuf::from("/work/demo");
        let files = vec![root.join("README.md")];
        let commands = vec![CommandInvocation::new(
            "/usr/bin/git",
            ["commit", "-m", "Initial Commit"],
            &root,
        )];
        let summary = Summary::new(true, &root, &files, &commands, &[]);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["project_root"], "/work/demo");
        assert_eq!(json["files"][0], "/work/demo/README.md");
        assert_eq!(
            json["commands"][0],
            "/usr/bin/git commit -m \"Initial Commit\""
        );
        assert!(json.get("remote_output").is_none());
    }
}
