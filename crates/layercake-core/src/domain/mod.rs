// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for layercake.
//!
//! Pure logic for turning a resource description into generated files and
//! registry edits. No I/O happens here; the application layer reads and
//! writes through ports.
//!
//! - **Naming / fields**: identifier normalization and `name:type` parsing
//! - **ResourceSpec**: the validated input of one scaffold run
//! - **ProjectLayout**: where each artifact lives in the target project
//! - **RenderContext**: `{{VARIABLE}}` substitution
//! - **RegistryPatch**: idempotent text edits of registry files and module indexes
pub mod entities;
pub mod error;
pub mod fields;
pub mod layout;
pub mod naming;
pub mod registry;
pub mod render;
pub mod value_objects;

mod validation;

pub use entities::{
    ArtifactKind, ArtifactPlan, ArtifactTarget, PatchTarget, PlannedFile, PlannedPatch,
    RelativePath, ResourceSpec, ResourceSpecBuilder,
};
pub use error::{DomainError, ErrorCategory};
pub use fields::{Field, parse_fields};
pub use layout::ProjectLayout;
pub use naming::{to_pascal, to_snake};
pub use registry::{
    IMPORTS_ANCHOR, MODULES_ANCHOR, PROVIDERS_ANCHOR, PatchOutcome, ROUTES_ANCHOR, RegistryPatch,
};
pub use render::{RenderContext, unresolved_placeholder};
pub use validation::DomainValidator;
pub use value_objects::{Component, FieldType, HttpMethod, Layer, MethodSet, UseCaseKind};
