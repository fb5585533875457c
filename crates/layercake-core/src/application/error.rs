//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Generated files already exist with different content.
    #[error("{} generated file(s) already exist with different content", paths.len())]
    ArtifactsExist { paths: Vec<PathBuf> },

    /// A registry file the scaffold must patch does not exist.
    #[error("Registry file not found: {path}")]
    RegistryNotFound { path: PathBuf },

    /// A write failed after earlier writes succeeded.
    #[error(
        "Write failed at {failed} after {} file(s) were written: {reason}",
        written.len()
    )]
    PartialWrite {
        written: Vec<PathBuf>,
        failed: PathBuf,
        reason: String,
        rolled_back: bool,
    },

    /// A template produced invalid output.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// An adapter's lock was poisoned by a panicking writer.
    #[error("Filesystem state is locked")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ArtifactsExist { paths } => {
                let mut out: Vec<String> = paths
                    .iter()
                    .map(|p| format!("Conflicts with: {}", p.display()))
                    .collect();
                out.push("Use --force to overwrite them".into());
                out.push("Or preview the changes with --dry-run".into());
                out
            }
            Self::RegistryNotFound { path } => vec![
                format!("Expected registry file at {}", path.display()),
                "Run from the project root or pass --root".into(),
                "Adjust layout.container_file / layout.router_file in the config".into(),
            ],
            Self::PartialWrite {
                written,
                rolled_back,
                ..
            } => {
                if *rolled_back {
                    vec!["All earlier writes were rolled back".into()]
                } else {
                    let mut out = vec!["Rollback did not complete; inspect these files:".into()];
                    out.extend(written.iter().map(|p| format!("  {}", p.display())));
                    out
                }
            }
            Self::RenderingFailed { .. } => vec!["This is a bug in a built-in template".into()],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArtifactsExist { .. } => ErrorCategory::Conflict,
            Self::RegistryNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. }
            | Self::PartialWrite { .. }
            | Self::RenderingFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
