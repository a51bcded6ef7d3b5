//! `spmkit config`: read and write configuration values.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::{self, AppConfig, KNOWN_KEYS},
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` override; `set` and `path` fall back to
/// the platform location without it.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_file.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ key: value }))?;
            } else {
                output.print(&value)?;
            }
        }

        ConfigCommands::Set { key, value } => {
            config::set_value(&path, &key, &value)?;
            info!(%key, path = %path.display(), "Configuration updated");
            output.success(&format!("Set {key} = {value:?} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current configuration:")?;
                for key in KNOWN_KEYS {
                    output.print(&format!("{key} = {:?}", config.get(key)?))?;
                }
            }
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}
