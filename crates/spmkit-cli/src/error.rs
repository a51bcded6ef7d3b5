//! CLI errors.
//!
//! [`CliError`] is the only error `main` sees. Each variant knows its exit
//! code (through [`ErrorCategory`]) and what to suggest to the user.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use spmkit_core::{
    application::ApplicationError,
    domain::DomainError,
    error::SpmkitError,
};

use spmkit_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A value the user supplied was rejected.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// The config file or environment could not be loaded or saved.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `config get` / `config set` named a key that does not exist.
    #[error("Unknown configuration key '{key}'")]
    ConfigKeyNotFound { key: String },

    #[error("Package creation failed: {0}")]
    Core(#[from] SpmkitError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user declined a confirmation prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// A prompt was needed but the binary was built without `interactive`.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidProjectName { name, reason } => {
                CliError::InvalidProjectName { name, reason }
            }
            other => CliError::Core(other.into()),
        }
    }
}

impl CliError {
    /// Next steps printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "The name is used as the directory, module and Swift type name".into(),
                "Use letters, digits and underscores, starting with a letter".into(),
                "Examples: demo, MyTool, net_utils".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the config file location with 'spmkit config path'".into(),
                "Use 'spmkit init --force' to recreate a default config".into(),
            ],

            Self::ConfigKeyNotFound { key } => vec![
                format!("'{}' is not a known key", key),
                "List available keys with 'spmkit config list'".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that the directory exists and is writable".into(),
            ],

            Self::Cancelled => vec![
                "Nothing was created".into(),
                "Pass --yes to skip the prompt".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{}' feature is not available in this build", feature),
                "Pass --yes to skip the confirmation prompt".into(),
                format!(
                    "Or install with the feature enabled: cargo install spmkit-cli --features {}",
                    feature
                ),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::InvalidProjectName { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::ConfigKeyNotFound { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Captured stderr of a failed external command, if that is what failed.
    fn command_stderr(&self) -> Option<&str> {
        match self {
            Self::Core(SpmkitError::Application(ApplicationError::CommandFailed {
                stderr, ..
            })) if !stderr.trim().is_empty() => Some(stderr.trim()),
            _ => None,
        }
    }

    /// Render for stderr: message, then (verbose) causes and tool output,
    /// then suggestions.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| -> String {
            if !color {
                return text.to_owned();
            }
            match style {
                Style::Error => text.red().bold().to_string(),
                Style::Dim => text.dimmed().to_string(),
                Style::Heading => text.yellow().bold().to_string(),
            }
        };

        let mut out = format!("\n{} {}\n", paint("Error:", Style::Error), self);

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                out.push_str(&paint(&format!("  Caused by: {err}"), Style::Dim));
                out.push('\n');
                source = err.source();
            }
            if let Some(stderr) = self.command_stderr() {
                out.push_str(&format!("\n{}\n", paint("Command output:", Style::Dim)));
                for line in stderr.lines() {
                    out.push_str(&format!("  {}\n", paint(line, Style::Dim)));
                }
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint("Suggestions:", Style::Heading)));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", Style::Dim)
            ));
        }

        out
    }

    /// Emit one event at a level matching the category.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, error = %self, "Command rejected");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, error = %self, "Command failed");
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Dim,
    Heading,
}

/// Exit status classes: 2, 3, 4 and 1 respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach a context message to an I/O failure at the call-site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn invalid_name_suggestions_non_empty() {
        let err = CliError::InvalidProjectName {
            name: ".hidden".into(),
            reason: "starts with '.'".into(),
        };
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn domain_name_error_becomes_cli_name_error() {
        let err: CliError = DomainError::InvalidProjectName {
            name: "my-tool".into(),
            reason: "bad char".into(),
        }
        .into();
        assert!(matches!(err, CliError::InvalidProjectName { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_interactive_feature_suggests_yes() {
        let err = CliError::FeatureNotAvailable {
            feature: "interactive",
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--yes")));
    }

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(CliError::ConfigKeyNotFound { key: "x".into() }.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        let author: CliError = SpmkitError::from(ApplicationError::AuthorUnavailable {
            reason: "unset".into(),
        })
        .into();
        assert_eq!(author.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        let fs: CliError = SpmkitError::from(ApplicationError::FilesystemError {
            path: PathBuf::from("/x"),
            reason: "denied".into(),
        })
        .into();
        assert_eq!(fs.exit_code(), 1);
    }

    #[test]
    fn plain_render_has_header_and_suggestions() {
        let err = CliError::ConfigKeyNotFound { key: "nope".into() };
        let s = err.render(false, false);
        assert!(s.contains("Error: Unknown configuration key 'nope'"));
        assert!(s.contains("Suggestions:"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_omits_hint() {
        let s = CliError::Cancelled.render(true, false);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn verbose_render_shows_cause_chain() {
        let err = CliError::IoError {
            message: "Failed to write config".into(),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.render(true, false).contains("Caused by: disk full"));
        assert!(!err.render(false, false).contains("disk full"));
    }

    #[test]
    fn verbose_output_includes_command_stderr() {
        let err: CliError = SpmkitError::from(ApplicationError::CommandFailed {
            command: "/usr/bin/git push --tags".into(),
            status: Some(1),
            stdout: String::new(),
            stderr: "remote: Permission denied\n".into(),
        })
        .into();
        assert!(err.render(true, false).contains("remote: Permission denied"));
        assert!(!err.render(false, false).contains("Command output:"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
