//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates one scaffold run:
//! 1. Plan: render every artifact and compute patches, in memory
//! 2. Stage: read what is on disk, classify each path, apply patches in memory
//! 3. Commit: write staged changes, rolling back on the first failure
//!
//! Nothing is written before staging has succeeded for every path.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ArtifactRenderer, Filesystem},
    },
    domain::{
        ArtifactPlan, DomainValidator as validator, PatchOutcome, PatchTarget, PlannedFile,
        ProjectLayout, RelativePath, ResourceSpec, unresolved_placeholder,
    },
    error::LayercakeResult,
};

/// Per-invocation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Overwrite generated files whose content differs.
    pub force: bool,
    /// Stage and report without writing.
    pub dry_run: bool,
}

/// What committing a staged change does to its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    Create,
    Overwrite,
    Patch,
    Unchanged,
}

impl FileAction {
    pub const fn writes(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// One path after staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedChange {
    pub path: RelativePath,
    pub action: FileAction,
    /// Set for patched files, `None` for generated ones.
    pub patch_target: Option<PatchTarget>,
    content: String,
    previous: Option<String>,
}

impl StagedChange {
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Outcome of a scaffold run, printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub resource: String,
    pub endpoint: String,
    pub methods: Vec<String>,
    pub component: String,
    pub created: Vec<String>,
    pub overwritten: Vec<String>,
    pub patched: Vec<String>,
    pub unchanged: Vec<String>,
    /// Registry files whose content changed (or would change).
    pub registries: Vec<String>,
    pub dry_run: bool,
}

impl ScaffoldReport {
    fn new(spec: &ResourceSpec, changes: &[StagedChange], dry_run: bool) -> Self {
        let paths = |action: FileAction| -> Vec<String> {
            changes
                .iter()
                .filter(|c| c.action == action)
                .map(|c| c.path.to_string())
                .collect()
        };
        Self {
            resource: spec.snake().to_string(),
            endpoint: spec.endpoint_path().to_string(),
            methods: spec.methods().iter().map(|m| m.to_string()).collect(),
            component: spec.component().to_string(),
            created: paths(FileAction::Create),
            overwritten: paths(FileAction::Overwrite),
            patched: paths(FileAction::Patch),
            unchanged: paths(FileAction::Unchanged),
            registries: changes
                .iter()
                .filter(|c| c.action.writes() && c.patch_target.is_some_and(|t| t.is_registry()))
                .map(|c| c.path.to_string())
                .collect(),
            dry_run,
        }
    }

    /// Count of paths that are (or would be) written.
    pub fn written(&self) -> usize {
        self.created.len() + self.overwritten.len() + self.patched.len()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn ArtifactRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(renderer: Box<dyn ArtifactRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Scaffold one resource into the project at `root`.
    #[instrument(
        skip_all,
        fields(
            resource = %spec.snake(),
            component = %spec.component(),
            root = %root.display()
        )
    )]
    pub fn scaffold(
        &self,
        spec: &ResourceSpec,
        layout: &ProjectLayout,
        root: &Path,
        options: ScaffoldOptions,
    ) -> LayercakeResult<ScaffoldReport> {
        info!(methods = %spec.methods(), "Scaffolding resource");

        let plan = self.plan(spec, layout)?;
        let changes = self.stage(root, &plan, options)?;
        let report = ScaffoldReport::new(spec, &changes, options.dry_run);

        if options.dry_run {
            info!(would_write = report.written(), "Dry run, nothing written");
            return Ok(report);
        }

        self.commit(root, &changes)?;
        info!(written = report.written(), "Scaffold completed successfully");
        Ok(report)
    }

    /// Render every artifact and compute every patch. Pure apart from the
    /// renderer.
    #[instrument(skip_all, fields(resource = %spec.snake()))]
    pub fn plan(&self, spec: &ResourceSpec, layout: &ProjectLayout) -> LayercakeResult<ArtifactPlan> {
        let files = layout
            .targets(spec)?
            .into_iter()
            .map(|target| {
                let content = self.renderer.render(spec, target.kind)?;
                if let Some(placeholder) = unresolved_placeholder(&content) {
                    return Err(ApplicationError::RenderingFailed {
                        reason: format!(
                            "{} ({}) left placeholder {placeholder}",
                            target.path, target.kind
                        ),
                    }
                    .into());
                }
                Ok(PlannedFile {
                    kind: target.kind,
                    path: target.path,
                    content,
                })
            })
            .collect::<LayercakeResult<Vec<_>>>()?;

        let plan = ArtifactPlan::new(files, layout.patches(spec)?);
        validator::validate_plan(&plan, layout)?;
        debug!(
            files = plan.files().len(),
            patches = plan.patches().len(),
            "Plan computed"
        );
        Ok(plan)
    }

    /// Compare the plan against what is on disk. Reads only.
    pub fn stage(
        &self,
        root: &Path,
        plan: &ArtifactPlan,
        options: ScaffoldOptions,
    ) -> LayercakeResult<Vec<StagedChange>> {
        let mut changes = Vec::with_capacity(plan.files().len() + plan.patches().len());
        let mut conflicts = Vec::new();

        for file in plan.files() {
            let abs = root.join(file.path.as_path());
            let previous = self.filesystem.read_file(&abs)?;
            let action = match previous.as_deref() {
                None => FileAction::Create,
                Some(existing) if existing.replace("\r\n", "\n") == file.content => {
                    FileAction::Unchanged
                }
                Some(_) => {
                    if !options.force {
                        conflicts.push(abs);
                    }
                    FileAction::Overwrite
                }
            };
            changes.push(StagedChange {
                path: file.path.clone(),
                action,
                patch_target: None,
                content: file.content.clone(),
                previous,
            });
        }

        if !conflicts.is_empty() {
            warn!(count = conflicts.len(), "Generated files conflict with existing content");
            return Err(ApplicationError::ArtifactsExist { paths: conflicts }.into());
        }

        for planned in plan.patches() {
            let abs = root.join(planned.path.as_path());
            let previous = self.filesystem.read_file(&abs)?;
            let text = match previous.as_deref() {
                Some(text) => text.replace("\r\n", "\n"),
                None if planned.target.must_exist() => {
                    return Err(ApplicationError::RegistryNotFound { path: abs }.into());
                }
                None => String::new(),
            };

            let file_name = planned.path.to_string();
            let (action, content) = match planned.patch.apply(&file_name, &text)? {
                PatchOutcome::Unchanged => {
                    debug!(path = %planned.path, target = %planned.target, "Already registered");
                    (FileAction::Unchanged, text)
                }
                PatchOutcome::Patched(content) if previous.is_none() => {
                    (FileAction::Create, content)
                }
                PatchOutcome::Patched(content) => (FileAction::Patch, content),
            };
            changes.push(StagedChange {
                path: planned.path.clone(),
                action,
                patch_target: Some(planned.target),
                content,
                previous,
            });
        }

        Ok(changes)
    }

    /// Write staged changes in order. On failure, undo the completed writes.
    pub fn commit(&self, root: &Path, changes: &[StagedChange]) -> LayercakeResult<()> {
        let mut done: Vec<&StagedChange> = Vec::new();

        for change in changes.iter().filter(|c| c.action.writes()) {
            let abs = root.join(change.path.as_path());
            if let Err(e) = self.write_one(&abs, &change.content) {
                warn!(path = %abs.display(), error = %e, "Write failed, rolling back");
                let rolled_back = self.rollback(root, &done);
                return Err(ApplicationError::PartialWrite {
                    written: done.iter().map(|c| root.join(c.path.as_path())).collect(),
                    failed: abs,
                    reason: e.to_string(),
                    rolled_back,
                }
                .into());
            }
            debug!(path = %abs.display(), action = ?change.action, "Wrote file");
            done.push(change);
        }

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_one(&self, path: &Path, content: &str) -> LayercakeResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }

    /// Best-effort, newest first. Returns whether every undo succeeded.
    fn rollback(&self, root: &Path, done: &[&StagedChange]) -> bool {
        let mut clean = true;
        for change in done.iter().rev() {
            let abs: PathBuf = root.join(change.path.as_path());
            let result = match &change.previous {
                Some(previous) => self.filesystem.write_file(&abs, previous),
                None => self.filesystem.remove_file(&abs),
            };
            if let Err(e) = result {
                warn!(error = %e, path = %abs.display(), "Rollback failed");
                clean = false;
            }
        }
        if clean {
            info!(restored = done.len(), "Rollback successful");
        }
        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockArtifactRenderer, MockFilesystem};
    use crate::domain::{Component, HttpMethod, MethodSet};
    use crate::error::LayercakeError;

    fn spec(component: Component) -> ResourceSpec {
        ResourceSpec::builder()
            .name("book")
            .endpoint_path("/books")
            .methods(MethodSet::new([HttpMethod::Get, HttpMethod::Post]).unwrap())
            .component(component)
            .build()
            .unwrap()
    }

    fn renderer() -> MockArtifactRenderer {
        let mut renderer = MockArtifactRenderer::new();
        renderer
            .expect_render()
            .returning(|_, kind| Ok(format!("// {kind}\n")));
        renderer
    }

    fn service(fs: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(Box::new(renderer()), Box::new(fs))
    }

    const ROOT: &str = "/proj";

    // ========================================================================
    // Plan
    // ========================================================================

    #[test]
    fn unresolved_placeholder_fails_before_any_io() {
        let mut renderer = MockArtifactRenderer::new();
        renderer
            .expect_render()
            .returning(|_, _| Ok("struct {{MISSING}};".into()));
        // No expectations: any filesystem call panics.
        let service = ScaffoldService::new(Box::new(renderer), Box::new(MockFilesystem::new()));

        let err = service
            .scaffold(
                &spec(Component::Model),
                &ProjectLayout::default(),
                Path::new(ROOT),
                ScaffoldOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            LayercakeError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }

    #[test]
    fn plan_covers_targets_and_patches() {
        let service = service(MockFilesystem::new());
        let plan = service
            .plan(&spec(Component::Full), &ProjectLayout::default())
            .unwrap();
        // 3 domain + 7 application + 2 infrastructure + 5 presentation
        assert_eq!(plan.files().len(), 17);
        // 5 module indexes + 2 registries
        assert_eq!(plan.patches().len(), 7);
    }

    // ========================================================================
    // Stage
    // ========================================================================

    #[test]
    fn missing_registry_is_reported_and_nothing_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_write_file().never();

        let err = service(fs)
            .scaffold(
                &spec(Component::Endpoints),
                &ProjectLayout::default(),
                Path::new(ROOT),
                ScaffoldOptions::default(),
            )
            .unwrap_err();
        match err {
            LayercakeError::Application(ApplicationError::RegistryNotFound { path }) => {
                assert_eq!(path, Path::new("/proj/src/core/container.rs"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn conflicting_files_without_force_list_every_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(|_| Ok(Some("hand edited\n".into())));
        fs.expect_write_file().never();

        let err = service(fs)
            .scaffold(
                &spec(Component::Model),
                &ProjectLayout::default(),
                Path::new(ROOT),
                ScaffoldOptions::default(),
            )
            .unwrap_err();
        match err {
            LayercakeError::Application(ApplicationError::ArtifactsExist { paths }) => {
                assert_eq!(paths.len(), 3);
                assert_eq!(paths[0], Path::new("/proj/src/domain/book/mod.rs"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn force_overwrites_and_identical_content_is_unchanged() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|path| {
            Ok(match path.file_name().and_then(|n| n.to_str()) {
                Some("entities.rs") => Some("// entity\n".into()),
                Some("ports.rs") => Some("old\n".into()),
                Some("mod.rs") if path.ends_with("domain/mod.rs") => Some("pub mod book;\n".into()),
                _ => None,
            })
        });
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let report = service(fs)
            .scaffold(
                &spec(Component::Model),
                &ProjectLayout::default(),
                Path::new(ROOT),
                ScaffoldOptions {
                    force: true,
                    dry_run: false,
                },
            )
            .unwrap();
        assert_eq!(report.created, vec!["src/domain/book/mod.rs"]);
        assert_eq!(report.overwritten, vec!["src/domain/book/ports.rs"]);
        assert_eq!(
            report.unchanged,
            vec!["src/domain/book/entities.rs", "src/domain/mod.rs"]
        );
        assert!(report.registries.is_empty());
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|path| {
            Ok(match path.file_name().and_then(|n| n.to_str()) {
                Some("container.rs") => Some("// layercake:imports\n// layercake:providers\n".into()),
                Some("api.rs") => Some(
                    "pub fn api_router() -> Router<AppState> {\n    Router::new()\n        // layercake:routes\n}\n"
                        .into(),
                ),
                _ => None,
            })
        });
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let report = service(fs)
            .scaffold(
                &spec(Component::Full),
                &ProjectLayout::default(),
                Path::new(ROOT),
                ScaffoldOptions {
                    force: false,
                    dry_run: true,
                },
            )
            .unwrap();
        assert!(report.dry_run);
        // 17 generated files + 5 new module indexes
        assert_eq!(report.created.len(), 22);
        assert_eq!(
            report.registries,
            vec!["src/core/container.rs", "src/presentation/v1/api.rs"]
        );
        assert_eq!(report.patched, report.registries);
        assert_eq!(report.methods, vec!["GET", "POST"]);
    }

    #[test]
    fn crlf_registry_text_is_patched_as_lf() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|path| {
            Ok(match path.file_name().and_then(|n| n.to_str()) {
                Some("container.rs") => {
                    Some("use x;\r\n// layercake:imports\r\n// layercake:providers\r\n".into())
                }
                Some("api.rs") => Some("pub fn api_router() -> Router<AppState> {\r\n    Router::new()\r\n}\r\n".into()),
                _ => None,
            })
        });
        let service = service(fs);
        let plan = service
            .plan(&spec(Component::Endpoints), &ProjectLayout::default())
            .unwrap();
        let changes = service
            .stage(Path::new(ROOT), &plan, ScaffoldOptions::default())
            .unwrap();

        let registries: Vec<_> = changes
            .iter()
            .filter(|c| c.patch_target.is_some_and(|t| t.is_registry()))
            .collect();
        assert_eq!(registries.len(), 2);
        for change in registries {
            assert_eq!(change.action, FileAction::Patch);
            assert!(!change.content().contains('\r'), "{}", change.path);
        }
    }

    #[test]
    fn crlf_checkout_of_generated_file_is_unchanged() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|path| {
            Ok(match path.file_name().and_then(|n| n.to_str()) {
                Some("entities.rs") => Some("// entity\r\n".into()),
                _ => None,
            })
        });
        let service = service(fs);
        let plan = service
            .plan(&spec(Component::Model), &ProjectLayout::default())
            .unwrap();
        let changes = service
            .stage(Path::new(ROOT), &plan, ScaffoldOptions::default())
            .unwrap();

        let entity = changes
            .iter()
            .find(|c| c.path.to_string() == "src/domain/book/entities.rs")
            .unwrap();
        assert_eq!(entity.action, FileAction::Unchanged);
    }

    // ========================================================================
    // Commit
    // ========================================================================

    #[test]
    fn failed_write_rolls_back_completed_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let mut calls = 0;
        fs.expect_write_file().returning(move |path, _| {
            calls += 1;
            if calls == 2 {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_remove_file()
            .withf(|path| path == Path::new("/proj/src/domain/book/mod.rs"))
            .times(1)
            .returning(|_| Ok(()));

        let err = service(fs)
            .scaffold(
                &spec(Component::Model),
                &ProjectLayout::default(),
                Path::new(ROOT),
                ScaffoldOptions::default(),
            )
            .unwrap_err();
        match err {
            LayercakeError::Application(ApplicationError::PartialWrite {
                written,
                failed,
                rolled_back,
                ..
            }) => {
                assert_eq!(written, vec![PathBuf::from("/proj/src/domain/book/mod.rs")]);
                assert_eq!(failed, Path::new("/proj/src/domain/book/entities.rs"));
                assert!(rolled_back);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failed_rollback_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let mut calls = 0;
        fs.expect_write_file().returning(move |path, _| {
            calls += 1;
            if calls == 3 {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "read-only".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_remove_file().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "busy".into(),
            }
            .into())
        });

        let err = service(fs)
            .scaffold(
                &spec(Component::Model),
                &ProjectLayout::default(),
                Path::new(ROOT),
                ScaffoldOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            LayercakeError::Application(ApplicationError::PartialWrite {
                rolled_back: false,
                ..
            })
        ));
    }
}
