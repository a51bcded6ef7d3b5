//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the resolved values
//! (tool paths, author override, request defaults).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPMKIT_<SECTION>__<KEY>`, e.g. `SPMKIT_DEFAULTS__STYLE=lib`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use spmkit_core::{application::ToolPaths, domain::ProjectStyle};

use crate::{
    cli::global::OutputFormat,
    error::{CliError, CliResult, IntoCli},
};

const ENV_PREFIX: &str = "SPMKIT";

/// Every key `config get` / `config set` accept.
pub const KNOWN_KEYS: &[&str] = &[
    "defaults.style",
    "defaults.repo",
    "defaults.owner",
    "author.name",
    "tools.git",
    "tools.gh",
    "output.no_color",
    "output.format",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new packages.
    pub defaults: Defaults,
    /// Author identity override.
    pub author: AuthorConfig,
    /// External tool locations.
    pub tools: ToolPaths,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub style: ProjectStyle,
    pub repo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Used instead of `git config user.name` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> CliResult<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .map_err(|e| config_error(format!("Failed to load '{}'", path.display()), e))?;

        settings
            .try_deserialize()
            .map_err(|e| config_error("Invalid configuration value".into(), e))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.spmkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "spmkit", "spmkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".spmkit.toml"))
    }

    /// Render as TOML, as written by `spmkit init`.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| config_error("Failed to serialise config".into(), e))
    }

    /// Value of a dotted key, as text.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = match key {
            "defaults.style" => self.defaults.style.to_string(),
            "defaults.repo" => self.defaults.repo.to_string(),
            "defaults.owner" => self.defaults.owner.clone().unwrap_or_default(),
            "author.name" => self.author.name.clone().unwrap_or_default(),
            "tools.git" => self.tools.git.display().to_string(),
            "tools.gh" => self.tools.gh.display().to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.to_string(),
            _ => return Err(CliError::ConfigKeyNotFound { key: key.into() }),
        };
        Ok(value)
    }
}

/// Set `key` to `value` in the TOML document at `path`, creating it if needed.
///
/// Other keys in the file are preserved. The result is validated before it
/// is written, so a bad value leaves the file untouched.
pub fn set_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(CliError::ConfigKeyNotFound { key: key.into() });
    }
    let Some((section, field)) = key.split_once('.') else {
        return Err(CliError::ConfigKeyNotFound { key: key.into() });
    };

    let mut doc: toml::Table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        text.parse()
            .map_err(|e| config_error(format!("Failed to parse '{}'", path.display()), e))?
    } else {
        toml::Table::new()
    };

    let parsed = match (key, value) {
        ("defaults.repo" | "output.no_color", "true") => toml::Value::Boolean(true),
        ("defaults.repo" | "output.no_color", "false") => toml::Value::Boolean(false),
        (_, other) => toml::Value::String(other.to_owned()),
    };

    let table = doc
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(table) = table.as_table_mut() else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    table.insert(field.to_owned(), parsed);

    let text = toml::to_string_pretty(&doc)
        .map_err(|e| config_error("Failed to serialise config".into(), e))?;

    // Reject values that would make the file unloadable.
    toml::from_str::<AppConfig>(&text).map_err(|e| CliError::InvalidInput {
        message: format!("'{value}' is not a valid value for {key}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_cli_context(|| {
                format!("Failed to create config directory '{}'", parent.display())
            })?;
        }
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

fn config_error<E>(message: String, source: E) -> CliError
where
    E: std::error::Error + Send + Sync + 'static,
{
    CliError::ConfigError {
        message: format!("{message}: {source}"),
        source: Some(Box::new(source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.style, ProjectStyle::Executable);
        assert!(!cfg.defaults.repo);
        assert_eq!(cfg.tools.git, PathBuf::from("/usr/bin/git"));
        assert_eq!(cfg.tools.gh, PathBuf::from("/usr/local/bin/gh"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("none.toml"), false, env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let err = AppConfig::load_from(&tmp.path().join("none.toml"), true, env(&[])).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nstyle = \"lib\"\nowner = \"octocat\"\n\n[tools]\ngit = \"/opt/bin/git\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, env(&[])).unwrap();
        assert_eq!(cfg.defaults.style, ProjectStyle::Library);
        assert_eq!(cfg.defaults.owner.as_deref(), Some("octocat"));
        assert_eq!(cfg.tools.git, PathBuf::from("/opt/bin/git"));
        // Unset keys keep their defaults.
        assert_eq!(cfg.tools.gh, PathBuf::from("/usr/local/bin/gh"));
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nstyle = \"lib\"\n").unwrap();

        let cfg = AppConfig::load_from(
            &path,
            true,
            env(&[
                ("SPMKIT_DEFAULTS__STYLE", "exe"),
                ("SPMKIT_DEFAULTS__REPO", "true"),
                ("SPMKIT_AUTHOR__NAME", "Env Person"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.defaults.style, ProjectStyle::Executable);
        assert!(cfg.defaults.repo);
        assert_eq!(cfg.author.name.as_deref(), Some("Env Person"));
    }

    #[test]
    fn invalid_style_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nstyle = \"framework\"\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path, true, env(&[])),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.style").unwrap(), "exe");
        assert_eq!(cfg.get("output.no_color").unwrap(), "false");
        assert_eq!(cfg.get("defaults.owner").unwrap(), "");
        assert!(matches!(
            cfg.get("does.not.exist"),
            Err(CliError::ConfigKeyNotFound { .. })
        ));
    }

    #[test]
    fn every_known_key_is_gettable() {
        let cfg = AppConfig::default();
        for key in KNOWN_KEYS {
            assert!(cfg.get(key).is_ok(), "{key}");
        }
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = AppConfig::default().to_toml().unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn set_value_preserves_other_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/config.toml");

        set_value(&path, "author.name", "Jane Doe").unwrap();
        set_value(&path, "defaults.repo", "true").unwrap();
        set_value(&path, "defaults.style", "lib").unwrap();

        let cfg = AppConfig::load_from(&path, true, env(&[])).unwrap();
        assert_eq!(cfg.author.name.as_deref(), Some("Jane Doe"));
        assert!(cfg.defaults.repo);
        assert_eq!(cfg.defaults.style, ProjectStyle::Library);
    }

    #[test]
    fn set_value_rejects_bad_values_and_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        assert!(matches!(
            set_value(&path, "defaults.style", "framework"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(!path.exists());

        assert!(matches!(
            set_value(&path, "defaults.colour", "x"),
            Err(CliError::ConfigKeyNotFound { .. })
        ));
    }
}
