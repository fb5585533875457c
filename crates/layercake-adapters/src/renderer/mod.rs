//! Artifact renderers.

mod rust;
pub mod templates;

pub use rust::RustRenderer;
