//! CLI error type, exit codes and terminal rendering.
//!
//! Every failure reaching `main` is a [`CliError`]. Its [`ErrorCategory`]
//! decides the exit code; [`CliError::render`] turns it into the block
//! printed on stderr (message, optional cause chain, suggestions).

use std::error::Error as _;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use layercake_core::error::LayercakeError;

pub use layercake_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

type Style = fn(&str) -> String;

fn red(s: &str) -> String {
    s.red().bold().to_string()
}

fn yellow(s: &str) -> String {
    s.yellow().bold().to_string()
}

fn dimmed(s: &str) -> String {
    s.dimmed().to_string()
}

#[derive(Debug, Error)]
pub enum CliError {
    /// Input clap accepts but the command cannot use.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Config file missing or malformed, bad `[layout]`, unknown key.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Scaffolding failed: {0}")]
    Core(#[from] LayercakeError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// What kind of failure, as far as the shell is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad parameters or a conflict the user can resolve.
    UserError,
    /// A registry file the scaffold must patch is missing.
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Hints printed under the error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::InvalidInput { .. } => vec![
                "Run 'layercake scaffold --help' for the accepted values".into(),
                "Example: layercake scaffold -r book -p /books -f title:str".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Check the file given with --config, or .layercake.toml".into(),
                "Environment overrides use LAYERCAKE__SECTION__KEY".into(),
                "Run 'layercake init --force' to write a fresh default config".into(),
            ],
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// The stderr block for this error. `colored` adds ANSI styling; the
    /// text is otherwise identical.
    pub fn render(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: String, style: Style| if colored { style(&text) } else { text };
        let mut out = String::new();

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            paint(format!("\u{2717} Error: {self}"), red)
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(
                    out,
                    "  {}",
                    paint(format!("caused by: {err}"), dimmed)
                );
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}",
                paint("Suggestions:".into(), yellow)
            );
            for suggestion in suggestions {
                let _ = writeln!(out, "  - {suggestion}");
            }
        }

        if !verbose {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}",
                paint("Use -v / --verbose for more details.".into(), dimmed)
            );
        }
        out
    }

    /// Record the failure in the log at a severity matching its category.
    pub fn log(&self) {
        let category = self.category();
        let cause = self.source().map(ToString::to_string);
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, ?cause, "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, ?cause, "{self}");
            }
        }
    }
}

// ── IntoCli ───────────────────────────────────────────────────────────────────

/// Attach a human-readable context to an `io::Result`.
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
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use layercake_core::{application::ApplicationError, domain::DomainError};

    use super::*;

    fn core(err: impl Into<LayercakeError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn parameter_errors_exit_two() {
        assert_eq!(core(DomainError::EmptyMethods).exit_code(), 2);
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
    fn conflicts_exit_two() {
        let err = core(ApplicationError::ArtifactsExist {
            paths: vec![PathBuf::from("src/domain/book/entities.rs")],
        });
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn missing_registry_exits_three() {
        let err = core(ApplicationError::RegistryNotFound {
            path: PathBuf::from("src/core/container.rs"),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn configuration_exits_four() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn io_exits_one() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn plain_render_has_message_suggestions_and_hint() {
        let s = core(DomainError::EmptyMethods).render(false, false);
        assert!(s.contains("Error: Scaffolding failed"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.render(true, false);
        assert!(s.contains("caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn colored_render_keeps_the_text() {
        let s = core(DomainError::EmptyMethods).render(false, true);
        assert!(s.contains("At least one HTTP method"));
        assert!(s.contains('\u{1b}'));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { message, .. }) if message == "reading config"));
    }
}
