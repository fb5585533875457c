//! End-to-end tests for the `layercake` binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SKELETON: [(&str, &str); 7] = [
    (
        "src/core/container.rs",
        include_str!("../../layercake-service/src/core/container.rs"),
    ),
    (
        "src/presentation/v1/api.rs",
        include_str!("../../layercake-service/src/presentation/v1/api.rs"),
    ),
    (
        "src/domain/mod.rs",
        include_str!("../../layercake-service/src/domain/mod.rs"),
    ),
    (
        "src/application/mod.rs",
        include_str!("../../layercake-service/src/application/mod.rs"),
    ),
    (
        "src/infrastructure/mod.rs",
        include_str!("../../layercake-service/src/infrastructure/mod.rs"),
    ),
    (
        "src/presentation/v1/schemas/mod.rs",
        include_str!("../../layercake-service/src/presentation/v1/schemas/mod.rs"),
    ),
    (
        "src/presentation/v1/endpoints/mod.rs",
        include_str!("../../layercake-service/src/presentation/v1/endpoints/mod.rs"),
    ),
];

/// A project directory seeded with the service skeleton.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    for (path, content) in SKELETON {
        let abs = temp.path().join(path);
        fs::create_dir_all(abs.parent().unwrap()).unwrap();
        fs::write(abs, content).unwrap();
    }
    temp
}

/// The binary, isolated from the caller's config and environment.
fn layercake(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("layercake").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("LAYERCAKE_CONFIG");
    cmd
}

fn read(dir: &Path, path: &str) -> String {
    fs::read_to_string(dir.join(path)).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    layercake(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_package() {
    let temp = TempDir::new().unwrap();
    layercake(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_environment_accepts_conventional_values() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "yes", "true", "0"] {
        layercake(temp.path())
            .env("NO_COLOR", value)
            .args(["config", "path"])
            .assert()
            .success()
            .stderr(predicate::str::contains("--no-color").not());
    }
}

#[test]
fn scaffold_without_resource_is_usage_error() {
    let temp = TempDir::new().unwrap();
    layercake(temp.path())
        .args(["scaffold", "-p", "/books"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--resource"));
}

// ============================================================================
// Scaffold
// ============================================================================

#[test]
fn scaffold_writes_slice_and_registers_it() {
    let temp = project();
    layercake(temp.path())
        .args([
            "scaffold", "-r", "Book", "-p", "books", "-m", "get,post", "-f",
            "title:str,pages:int",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resource 'book' at /books"))
        .stdout(predicate::str::contains("Created (17):"))
        .stdout(predicate::str::contains("Patched (7):"))
        .stdout(predicate::str::contains("Scaffolded 'book' (24 file(s) written)"));

    let entity = read(temp.path(), "src/domain/book/entities.rs");
    assert!(entity.contains("pub struct Book"));
    assert!(entity.contains("pub pages: i64,"));
    let container = read(temp.path(), "src/core/container.rs");
    assert!(container.contains("InMemoryBookAdapter::new()"));
    let api = read(temp.path(), "src/presentation/v1/api.rs");
    assert!(api.contains(".merge(book_router())"));
}

#[test]
fn rerun_reports_everything_unchanged() {
    let temp = project();
    let args = ["scaffold", "-r", "book", "-p", "/books", "-m", "GET,POST"];
    layercake(temp.path()).args(args).assert().success();
    let container = read(temp.path(), "src/core/container.rs");

    layercake(temp.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged (24):"))
        .stdout(predicate::str::contains("Registry files already up to date"))
        .stdout(predicate::str::contains("(0 file(s) written)"));
    assert_eq!(read(temp.path(), "src/core/container.rs"), container);
}

#[test]
fn root_flag_targets_another_directory() {
    let temp = project();
    let cwd = TempDir::new().unwrap();
    layercake(cwd.path())
        .args(["scaffold", "-r", "book", "-p", "/books", "--root"])
        .arg(temp.path())
        .assert()
        .success();
    assert!(temp.path().join("src/domain/book/ports.rs").is_file());
    assert!(!cwd.path().join("src").exists());
}

#[test]
fn json_output_is_machine_readable() {
    let temp = project();
    let assert = layercake(temp.path())
        .args([
            "scaffold",
            "-r",
            "book",
            "-p",
            "/books",
            "-m",
            "DELETE",
            "--output-format",
            "json",
        ])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["resource"], "book");
    assert_eq!(report["methods"], serde_json::json!(["DELETE"]));
    assert_eq!(report["created"].as_array().unwrap().len(), 15);
    assert_eq!(report["dry_run"], false);
}

#[test]
fn dry_run_writes_nothing() {
    let temp = project();
    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Would create (19):"));

    assert!(!temp.path().join("src/domain/book").exists());
    assert_eq!(read(temp.path(), "src/core/container.rs"), SKELETON[0].1);
}

#[test]
fn model_scope_leaves_registries_alone() {
    let temp = project();
    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books", "-c", "model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created (3):"))
        .stdout(predicate::str::contains("Registr").not());

    assert_eq!(read(temp.path(), "src/core/container.rs"), SKELETON[0].1);
    assert_eq!(read(temp.path(), "src/presentation/v1/api.rs"), SKELETON[1].1);
}

// ============================================================================
// Failures and exit codes
// ============================================================================

#[test]
fn unknown_method_names_the_token() {
    let temp = project();
    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books", "-m", "GET,PATCH"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid method 'PATCH'"));
    assert!(!temp.path().join("src/domain/book").exists());
}

#[test]
fn empty_method_list_is_rejected() {
    let temp = project();
    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books", "-m", " , "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("At least one HTTP method"));
}

#[test]
fn bad_field_type_is_rejected() {
    let temp = project();
    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books", "-f", "title:text"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid type 'text'"));
}

#[test]
fn missing_registry_exits_three() {
    let temp = TempDir::new().unwrap();
    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Registry file not found"));
    assert!(!temp.path().join("src").exists());
}

#[test]
fn missing_root_is_input_error() {
    let temp = TempDir::new().unwrap();
    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books", "--root", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn conflict_requires_force() {
    let temp = project();
    let entity = temp.path().join("src/domain/book/entities.rs");
    fs::create_dir_all(entity.parent().unwrap()).unwrap();
    fs::write(&entity, "// hand written\n").unwrap();

    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&entity).unwrap(), "// hand written\n");

    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwritten (1):"));
    assert!(fs::read_to_string(&entity).unwrap().contains("pub struct Book"));
}

#[test]
fn missing_config_file_exits_four() {
    let temp = project();
    layercake(temp.path())
        .args(["--config", "nope.toml", "scaffold", "-r", "book", "-p", "/books"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nope.toml"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn init_writes_local_config_once() {
    let temp = TempDir::new().unwrap();
    layercake(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(read(temp.path(), ".layercake.toml").contains("[scaffold]"));

    layercake(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_get_and_path_reflect_local_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".layercake.toml"),
        "[scaffold]\nmethods = \"GET\"\n",
    )
    .unwrap();

    layercake(temp.path())
        .args(["config", "get", "scaffold.methods"])
        .assert()
        .success()
        .stdout("GET\n");
    layercake(temp.path())
        .args(["config", "get", "layout.container_file"])
        .assert()
        .success()
        .stdout("src/core/container.rs\n");
    layercake(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(".layercake.toml\n");
}

#[test]
fn config_list_renders_json_on_request() {
    let temp = TempDir::new().unwrap();
    let assert = layercake(temp.path())
        .args(["config", "list", "--output-format", "json"])
        .assert()
        .success();
    let config: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(config["scaffold"]["component"], "full");
}

#[test]
fn unknown_config_key_exits_four() {
    let temp = TempDir::new().unwrap();
    layercake(temp.path())
        .args(["config", "get", "scaffold.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn config_file_supplies_scaffold_defaults() {
    let temp = project();
    fs::write(
        temp.path().join(".layercake.toml"),
        "[scaffold]\nmethods = \"DELETE\"\n",
    )
    .unwrap();

    layercake(temp.path())
        .args(["scaffold", "-r", "book", "-p", "/books"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Methods:   DELETE"))
        .stdout(predicate::str::contains("Created (15):"));
}

#[test]
fn environment_overrides_component() {
    let temp = project();
    layercake(temp.path())
        .env("LAYERCAKE__SCAFFOLD__COMPONENT", "model")
        .args(["scaffold", "-r", "book", "-p", "/books"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Component: model"));
    assert!(!temp.path().join("src/infrastructure/book").exists());
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn bash_completions_mention_binary() {
    let temp = TempDir::new().unwrap();
    layercake(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("layercake"));
}
