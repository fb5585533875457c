//! Root error of layercake core.
//!
//! Callers match on [`LayercakeError::category`] rather than on variants;
//! the CLI turns categories into exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum LayercakeError {
    /// Bad parameters, an invalid plan, or a registry without insertion point.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Filesystem, conflict, and commit failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl LayercakeError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

pub type LayercakeResult<T> = Result<T, LayercakeError>;
