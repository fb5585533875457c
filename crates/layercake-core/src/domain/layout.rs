//! Where generated artifacts live inside a target project.
//!
//! ```text
//! src/
//! ├── core/container.rs                     dependency registry
//! ├── domain/<s>/{mod,entities,ports}.rs
//! ├── application/<s>/{mod,dtos,mappers}.rs
//! │   └── use_cases/{mod,<verb>_<s>}.rs
//! ├── infrastructure/<s>/{mod,in_memory_<s>_adapter}.rs
//! └── presentation/v1/
//!     ├── api.rs                            router aggregator
//!     ├── schemas/<s>_{request,response}.rs
//!     └── endpoints/<s>/{mod,controller,endpoints}.rs
//! ```

use crate::domain::{
    entities::{
        artifact::{ArtifactKind, ArtifactTarget, PatchTarget, PlannedPatch},
        common::RelativePath,
        resource::ResourceSpec,
    },
    error::DomainError,
    registry::RegistryPatch,
    value_objects::Layer,
};

pub const DEFAULT_SRC_DIR: &str = "src";
pub const DEFAULT_CONTAINER_FILE: &str = "src/core/container.rs";
pub const DEFAULT_ROUTER_FILE: &str = "src/presentation/v1/api.rs";

/// Paths of a target project, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    src_dir: RelativePath,
    container_file: RelativePath,
    router_file: RelativePath,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            src_dir: RelativePath::literal(DEFAULT_SRC_DIR),
            container_file: RelativePath::literal(DEFAULT_CONTAINER_FILE),
            router_file: RelativePath::literal(DEFAULT_ROUTER_FILE),
        }
    }
}

impl ProjectLayout {
    pub fn new(
        src_dir: impl Into<std::path::PathBuf>,
        container_file: impl Into<std::path::PathBuf>,
        router_file: impl Into<std::path::PathBuf>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            src_dir: RelativePath::try_new(src_dir)?,
            container_file: RelativePath::try_new(container_file)?,
            router_file: RelativePath::try_new(router_file)?,
        })
    }

    pub fn src_dir(&self) -> &RelativePath {
        &self.src_dir
    }

    pub fn container_file(&self) -> &RelativePath {
        &self.container_file
    }

    pub fn router_file(&self) -> &RelativePath {
        &self.router_file
    }

    fn layer_dir(&self, layer: Layer) -> Result<RelativePath, DomainError> {
        match layer {
            Layer::Presentation => self.src_dir.join("presentation/v1"),
            other => self.src_dir.join(other.as_str()),
        }
    }

    /// Every file the resource's component scope generates, in write order.
    pub fn targets(&self, spec: &ResourceSpec) -> Result<Vec<ArtifactTarget>, DomainError> {
        let s = spec.snake();
        let component = spec.component();
        let mut out = Vec::new();
        let mut push = |kind, path: RelativePath| out.push(ArtifactTarget { kind, path });

        if component.includes(Layer::Domain) {
            let dir = self.layer_dir(Layer::Domain)?.join(s)?;
            push(ArtifactKind::DomainModule, dir.join("mod.rs")?);
            push(ArtifactKind::Entity, dir.join("entities.rs")?);
            push(ArtifactKind::Port, dir.join("ports.rs")?);
        }

        if component.includes(Layer::Application) {
            let dir = self.layer_dir(Layer::Application)?.join(s)?;
            push(ArtifactKind::ApplicationModule, dir.join("mod.rs")?);
            push(ArtifactKind::Dto, dir.join("dtos.rs")?);
            push(ArtifactKind::Mapper, dir.join("mappers.rs")?);
            let use_cases = dir.join("use_cases")?;
            push(ArtifactKind::UseCaseModule, use_cases.join("mod.rs")?);
            for kind in spec.use_cases() {
                push(
                    ArtifactKind::UseCase(kind),
                    use_cases.join(format!("{}_{s}.rs", kind.verb()))?,
                );
            }
        }

        if component.includes(Layer::Infrastructure) {
            let dir = self.layer_dir(Layer::Infrastructure)?.join(s)?;
            push(ArtifactKind::AdapterModule, dir.join("mod.rs")?);
            push(
                ArtifactKind::InMemoryAdapter,
                dir.join(format!("in_memory_{s}_adapter.rs"))?,
            );
        }

        if component.includes(Layer::Presentation) {
            let v1 = self.layer_dir(Layer::Presentation)?;
            let schemas = v1.join("schemas")?;
            push(
                ArtifactKind::RequestSchema,
                schemas.join(format!("{s}_request.rs"))?,
            );
            push(
                ArtifactKind::ResponseSchema,
                schemas.join(format!("{s}_response.rs"))?,
            );
            let endpoints = v1.join("endpoints")?.join(s)?;
            push(ArtifactKind::EndpointsModule, endpoints.join("mod.rs")?);
            push(ArtifactKind::Controller, endpoints.join("controller.rs")?);
            push(ArtifactKind::Endpoints, endpoints.join("endpoints.rs")?);
        }

        Ok(out)
    }

    /// Module index and registry edits for the resource's component scope.
    pub fn patches(&self, spec: &ResourceSpec) -> Result<Vec<PlannedPatch>, DomainError> {
        let s = spec.snake();
        let component = spec.component();
        let mut out = Vec::new();

        let module_index = |path: RelativePath, modules: Vec<String>| PlannedPatch {
            target: PatchTarget::ModuleIndex,
            path,
            patch: RegistryPatch::module_index(modules),
        };

        for layer in [Layer::Domain, Layer::Application, Layer::Infrastructure] {
            if component.includes(layer) {
                out.push(module_index(
                    self.layer_dir(layer)?.join("mod.rs")?,
                    vec![s.to_string()],
                ));
            }
        }

        if component.includes(Layer::Presentation) {
            let v1 = self.layer_dir(Layer::Presentation)?;
            out.push(module_index(
                v1.join("schemas/mod.rs")?,
                vec![format!("{s}_request"), format!("{s}_response")],
            ));
            out.push(module_index(
                v1.join("endpoints/mod.rs")?,
                vec![s.to_string()],
            ));
        }

        if component.patches_registries() {
            out.push(PlannedPatch {
                target: PatchTarget::DependencyRegistry,
                path: self.container_file.clone(),
                patch: RegistryPatch::dependency_registry(spec),
            });
            out.push(PlannedPatch {
                target: PatchTarget::RouterAggregator,
                path: self.router_file.clone(),
                patch: RegistryPatch::router_aggregator(spec),
            });
        }

        Ok(out)
    }
}
