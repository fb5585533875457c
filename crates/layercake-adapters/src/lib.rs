//! Infrastructure adapters for layercake.
//!
//! This crate implements the ports defined in `layercake_core::application::ports`.
//! It contains all I/O and the built-in artifact templates.

pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::RustRenderer;
