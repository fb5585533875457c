use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    registry::RegistryPatch,
    value_objects::{Layer, UseCaseKind},
};

/// What a generated file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "use_case")]
pub enum ArtifactKind {
    DomainModule,
    Entity,
    Port,
    ApplicationModule,
    Dto,
    Mapper,
    UseCaseModule,
    UseCase(UseCaseKind),
    AdapterModule,
    InMemoryAdapter,
    RequestSchema,
    ResponseSchema,
    EndpointsModule,
    Controller,
    Endpoints,
}

impl ArtifactKind {
    pub const fn layer(&self) -> Layer {
        match self {
            Self::DomainModule | Self::Entity | Self::Port => Layer::Domain,
            Self::ApplicationModule
            | Self::Dto
            | Self::Mapper
            | Self::UseCaseModule
            | Self::UseCase(_) => Layer::Application,
            Self::AdapterModule | Self::InMemoryAdapter => Layer::Infrastructure,
            Self::RequestSchema
            | Self::ResponseSchema
            | Self::EndpointsModule
            | Self::Controller
            | Self::Endpoints => Layer::Presentation,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainModule => f.write_str("domain module"),
            Self::Entity => f.write_str("entity"),
            Self::Port => f.write_str("port"),
            Self::ApplicationModule => f.write_str("application module"),
            Self::Dto => f.write_str("dto"),
            Self::Mapper => f.write_str("mapper"),
            Self::UseCaseModule => f.write_str("use case module"),
            Self::UseCase(kind) => write!(f, "{kind} use case"),
            Self::AdapterModule => f.write_str("adapter module"),
            Self::InMemoryAdapter => f.write_str("in-memory adapter"),
            Self::RequestSchema => f.write_str("request schema"),
            Self::ResponseSchema => f.write_str("response schema"),
            Self::EndpointsModule => f.write_str("endpoints module"),
            Self::Controller => f.write_str("controller"),
            Self::Endpoints => f.write_str("endpoints"),
        }
    }
}

/// Where one artifact will be written, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactTarget {
    pub kind: ArtifactKind,
    pub path: RelativePath,
}

/// A rendered file waiting to be staged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub kind: ArtifactKind,
    pub path: RelativePath,
    pub content: String,
}

/// Which long-lived file a patch edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchTarget {
    /// A layer `mod.rs` declaring resource modules.
    ModuleIndex,
    /// The dependency registry (`container.rs`).
    DependencyRegistry,
    /// The router aggregator (`api.rs`).
    RouterAggregator,
}

impl PatchTarget {
    /// Registry files must already exist; module indexes may be created.
    pub const fn must_exist(&self) -> bool {
        matches!(self, Self::DependencyRegistry | Self::RouterAggregator)
    }

    pub const fn is_registry(&self) -> bool {
        self.must_exist()
    }
}

impl fmt::Display for PatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ModuleIndex => "module index",
            Self::DependencyRegistry => "dependency registry",
            Self::RouterAggregator => "router aggregator",
        })
    }
}

/// An edit to an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPatch {
    pub target: PatchTarget,
    pub path: RelativePath,
    pub patch: RegistryPatch,
}

/// The full in-memory result of one scaffold invocation: every file to write
/// and every patch to apply. Nothing touches the disk until it is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactPlan {
    files: Vec<PlannedFile>,
    patches: Vec<PlannedPatch>,
}

impl ArtifactPlan {
    pub fn new(files: Vec<PlannedFile>, patches: Vec<PlannedPatch>) -> Self {
        Self { files, patches }
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn patches(&self) -> &[PlannedPatch] {
        &self.patches
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.patches.is_empty()
    }

    /// Every path appears once, whether written or patched.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        let paths = self
            .files
            .iter()
            .map(|f| &f.path)
            .chain(self.patches.iter().map(|p| &p.path));
        for path in paths {
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> PlannedFile {
        PlannedFile {
            kind: ArtifactKind::Entity,
            path: RelativePath::try_new(path).unwrap(),
            content: String::new(),
        }
    }

    #[test]
    fn kinds_know_their_layer() {
        assert_eq!(ArtifactKind::Port.layer(), Layer::Domain);
        assert_eq!(
            ArtifactKind::UseCase(UseCaseKind::Get).layer(),
            Layer::Application
        );
        assert_eq!(ArtifactKind::InMemoryAdapter.layer(), Layer::Infrastructure);
        assert_eq!(ArtifactKind::Endpoints.layer(), Layer::Presentation);
        assert_eq!(
            ArtifactKind::UseCase(UseCaseKind::List).to_string(),
            "list use case"
        );
    }

    #[test]
    fn duplicate_paths_fail_validation() {
        let plan = ArtifactPlan::new(vec![file("a.rs"), file("a.rs")], vec![]);
        assert_eq!(
            plan.validate().unwrap_err(),
            DomainError::DuplicatePath {
                path: "a.rs".into()
            }
        );
    }

    #[test]
    fn file_and_patch_on_same_path_collide() {
        let plan = ArtifactPlan::new(
            vec![file("src/domain/mod.rs")],
            vec![PlannedPatch {
                target: PatchTarget::ModuleIndex,
                path: RelativePath::try_new("src/domain/mod.rs").unwrap(),
                patch: RegistryPatch::module_index(["book"]),
            }],
        );
        assert!(plan.validate().is_err());
    }

    #[test]
    fn registry_targets_must_exist() {
        assert!(PatchTarget::DependencyRegistry.must_exist());
        assert!(PatchTarget::RouterAggregator.is_registry());
        assert!(!PatchTarget::ModuleIndex.must_exist());
    }
}
