//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `layercake-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, ResourceSpec};
use crate::error::LayercakeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `layercake_adapters::filesystem::LocalFilesystem` (production)
/// - `layercake_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute or relative to the process; the service joins them
/// onto the project root before calling.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> LayercakeResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> LayercakeResult<()>;

    /// Read a file, `None` if it does not exist.
    fn read_file(&self, path: &Path) -> LayercakeResult<Option<String>>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> LayercakeResult<()>;
}

/// Port for artifact rendering.
///
/// Implemented by:
/// - `layercake_adapters::renderer::RustRenderer` (built-in Rust templates)
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactRenderer: Send + Sync {
    /// Full source text of `kind` for `spec`.
    fn render(&self, spec: &ResourceSpec, kind: ArtifactKind) -> LayercakeResult<String>;
}
