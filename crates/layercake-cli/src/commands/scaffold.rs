//! Implementation of the `layercake scaffold` command.
//!
//! Responsibility: merge CLI arguments with configured defaults into a
//! `ResourceSpec`, call the core scaffold service, and display results.

use std::{path::Path, str::FromStr};

use tracing::{debug, instrument};

use layercake_adapters::{LocalFilesystem, RustRenderer};
use layercake_core::{
    application::{ScaffoldOptions, ScaffoldReport, ScaffoldService},
    domain::{Component, MethodSet, ResourceSpec, parse_fields},
    error::{LayercakeError, LayercakeResult},
};

use crate::{
    cli::ScaffoldArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `layercake scaffold` command.
///
/// Dispatch sequence:
/// 1. Resolve methods / component / root from flags, falling back to config
/// 2. Build and validate the `ResourceSpec`
/// 3. Run `ScaffoldService` against the local filesystem
/// 4. Print the report (summary or JSON)
#[instrument(skip_all, fields(resource = %args.resource))]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let spec = build_spec(&args, &config)?;
    let layout = config.project_layout()?;
    let root = args.root.clone().unwrap_or_else(|| config.project.root.clone());
    if !root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("project root '{}' is not a directory", root.display()),
            source: None,
        });
    }

    let options = ScaffoldOptions {
        force: args.force || config.scaffold.force,
        dry_run: args.dry_run,
    };
    debug!(root = %root.display(), ?options, "Scaffold options resolved");

    let service = ScaffoldService::new(
        Box::new(RustRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let report = service.scaffold(&spec, &layout, &root, options)?;

    if output.is_json() {
        output.json(&report)
    } else {
        print_summary(&report, spec.component(), &root, &output)
    }
}

/// Flags win over `[scaffold]` config defaults.
fn build_spec(args: &ScaffoldArgs, config: &AppConfig) -> LayercakeResult<ResourceSpec> {
    let methods = args
        .methods
        .as_deref()
        .unwrap_or(&config.scaffold.methods);
    let component = args
        .component
        .as_deref()
        .unwrap_or(&config.scaffold.component);

    ResourceSpec::builder()
        .name(args.resource.as_str())
        .endpoint_path(args.path.as_str())
        .methods(MethodSet::from_str(methods)?)
        .fields(parse_fields(args.fields.as_deref().unwrap_or_default())?)
        .component(Component::from_str(component)?)
        .build()
        .map_err(LayercakeError::from)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_summary(
    report: &ScaffoldReport,
    component: Component,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if report.dry_run {
        output.warning("Dry run: nothing was written")?;
    }
    output.header(&format!(
        "Resource '{}' at {}",
        report.resource, report.endpoint
    ))?;
    output.print(&format!("  Methods:   {}", report.methods.join(", ")))?;
    output.print(&format!("  Component: {}", report.component))?;
    output.print(&format!("  Root:      {}", root.display()))?;

    let verb = |done: &'static str, planned: &'static str| if report.dry_run { planned } else { done };
    print_group(output, verb("Created", "Would create"), &report.created)?;
    print_group(output, verb("Overwritten", "Would overwrite"), &report.overwritten)?;
    print_group(output, verb("Patched", "Would patch"), &report.patched)?;
    print_group(output, "Unchanged", &report.unchanged)?;

    // Only endpoints and full scopes touch the container and router.
    if !report.registries.is_empty() {
        output.info(&format!("Registries: {}", report.registries.join(", ")))?;
    } else if component.patches_registries() {
        output.info("Registry files already up to date")?;
    }

    if !report.dry_run {
        output.success(&format!(
            "Scaffolded '{}' ({} file(s) written)",
            report.resource,
            report.written()
        ))?;
    }
    Ok(())
}

fn print_group(output: &OutputManager, label: &str, paths: &[String]) -> CliResult<()> {
    if paths.is_empty() {
        return Ok(());
    }
    output.print(&format!("  {label} ({}):", paths.len()))?;
    for path in paths {
        output.print(&format!("    {path}"))?;
    }
    Ok(())
}
