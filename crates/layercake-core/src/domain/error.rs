// ============================================================================
// domain/error.rs - RESOURCE DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports carry them across layers)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Parameter Errors (raised before any filesystem mutation)
    // ========================================================================
    #[error("Invalid method '{token}'. Allowed: GET, POST, PUT, DELETE")]
    InvalidMethod { token: String },

    #[error("At least one HTTP method must be selected")]
    EmptyMethods,

    #[error("Invalid field format '{segment}'. Use name:type")]
    InvalidFieldFormat { segment: String },

    #[error("Invalid type '{ty}' for field '{field}'. Allowed: str, int, float, bool")]
    InvalidFieldType { field: String, ty: String },

    #[error("Invalid component '{value}'. Allowed: model, usecase, endpoints, adapter, full")]
    InvalidComponent { value: String },

    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName { name: String, reason: String },

    #[error("Invalid field name '{name}': {reason}")]
    InvalidFieldName { name: String, reason: String },

    #[error("Field '{name}' is declared more than once")]
    DuplicateField { name: String },

    #[error("Invalid endpoint path '{path}': {reason}")]
    InvalidEndpointPath { path: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Plan Errors
    // ========================================================================
    #[error("Duplicate path in artifact plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("Registry file '{file}' has no insertion point for {section} (expected '{anchor}')")]
    RegistryAnchorMissing {
        file: String,
        section: &'static str,
        anchor: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidMethod { .. } | Self::EmptyMethods => vec![
                "Pass a comma separated list, e.g. --methods GET,POST".into(),
                "Allowed methods: GET, POST, PUT, DELETE".into(),
            ],
            Self::InvalidFieldFormat { segment } => vec![
                format!("'{segment}' is missing the ':' separator"),
                "Example: --fields \"title:str,pages:int\"".into(),
            ],
            Self::InvalidFieldType { field, .. } => vec![
                format!("Pick one of str, int, float, bool for '{field}'"),
                "Example: --fields \"price:float,in_stock:bool\"".into(),
            ],
            Self::InvalidComponent { .. } => vec![
                "Allowed components: model, usecase, endpoints, adapter, full".into(),
                "Omit --component to scaffold every layer".into(),
            ],
            Self::InvalidResourceName { .. } => vec![
                "Resource names become Rust module names".into(),
                "Use letters, digits and underscores, starting with a letter".into(),
                "Examples: book, BookShelf, order-item".into(),
            ],
            Self::InvalidFieldName { name, .. } => vec![
                format!("Rename '{name}' to a plain identifier that is not a Rust keyword"),
                "Every resource already gets an 'id' field".into(),
            ],
            Self::DuplicateField { name } => vec![format!("Remove the repeated '{name}' field")],
            Self::InvalidEndpointPath { .. } => vec![
                "Endpoint paths look like /books or /library/books".into(),
            ],
            Self::RegistryAnchorMissing { file, anchor, .. } => vec![
                format!("Add a '{anchor}' line to {file} where new entries belong"),
                "Or restore the file from the project skeleton".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidMethod { .. }
            | Self::EmptyMethods
            | Self::InvalidFieldFormat { .. }
            | Self::InvalidFieldType { .. }
            | Self::InvalidComponent { .. }
            | Self::InvalidResourceName { .. }
            | Self::InvalidFieldName { .. }
            | Self::DuplicateField { .. }
            | Self::InvalidEndpointPath { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::RegistryAnchorMissing { .. } => ErrorCategory::Conflict,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
