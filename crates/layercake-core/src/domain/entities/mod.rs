pub mod artifact;
pub mod common;
pub mod resource;

pub use artifact::{
    ArtifactKind, ArtifactPlan, ArtifactTarget, PatchTarget, PlannedFile, PlannedPatch,
};
pub use common::RelativePath;
pub use resource::{ResourceSpec, ResourceSpecBuilder};
