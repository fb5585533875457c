//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `LAYERCAKE__SECTION__KEY`, e.g.
//!    `LAYERCAKE__SCAFFOLD__METHODS=GET,POST`
//! 3. Config file: `--config <FILE>`, else `.layercake.toml` in the current
//!    directory, else the per-user config file
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File, FileFormat};
use layercake_core::domain::{DomainValidator, ProjectLayout, layout};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = ".layercake.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub project: ProjectConfig,
    /// Where generated code and registry files live, relative to the root.
    pub layout: LayoutConfig,
    /// Defaults for `layercake scaffold`.
    pub scaffold: ScaffoldDefaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub src_dir: String,
    pub container_file: String,
    pub router_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldDefaults {
    pub methods: String,
    pub component: String,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig {
                root: PathBuf::from("."),
            },
            layout: LayoutConfig {
                src_dir: layout::DEFAULT_SRC_DIR.into(),
                container_file: layout::DEFAULT_CONTAINER_FILE.into(),
                router_file: layout::DEFAULT_ROUTER_FILE.into(),
            },
            scaffold: ScaffoldDefaults {
                methods: "GET,POST,PUT,DELETE".into(),
                component: "full".into(),
                force: false,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        Self::load_with(config_file, Environment::with_prefix("LAYERCAKE"))
    }

    fn load_with(config_file: Option<&PathBuf>, environment: Environment) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::ConfigError {
                        message: format!("config file '{}' does not exist", path.display()),
                        source: None,
                    });
                }
                builder = builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(path) = Self::discovered_path() {
                    builder = builder.add_source(
                        File::from(path.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(
                environment
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(config_error)
    }

    /// The config file that [`AppConfig::load`] reads when no `--config` is
    /// given, if any exists.
    pub fn discovered_path() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::global_path().filter(|path| path.is_file())
    }

    /// Per-user config file location.
    pub fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "layercake", "layercake")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Project layout described by the `[layout]` section.
    pub fn project_layout(&self) -> CliResult<ProjectLayout> {
        ProjectLayout::new(
            &self.layout.src_dir,
            &self.layout.container_file,
            &self.layout.router_file,
        )
        .and_then(|layout| DomainValidator::validate_layout(&layout).map(|()| layout))
        .map_err(|e| CliError::ConfigError {
            message: format!("invalid [layout] section: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Look up a dotted key such as `scaffold.methods`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let tree = serde_json::to_value(self).map_err(|e| CliError::ConfigError {
            message: format!("failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;
        let value = key
            .split('.')
            .try_fold(&tree, |node, part| node.get(part))
            .filter(|node| !node.is_object())
            .ok_or_else(|| CliError::ConfigError {
                message: format!("unknown config key '{key}'"),
                source: None,
            })?;
        Ok(match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(e: ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("LAYERCAKE").source(Some(source))
    }

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layercake.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_match_service_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.layout.container_file, "src/core/container.rs");
        assert_eq!(cfg.layout.router_file, "src/presentation/v1/api.rs");
        assert_eq!(cfg.project_layout().unwrap(), ProjectLayout::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let (_dir, path) = write_config("[scaffold]\nmethods = \"GET\"\ncomponent = \"model\"\n");
        let cfg = AppConfig::load_with(Some(&path), env(&[])).unwrap();
        assert_eq!(cfg.scaffold.methods, "GET");
        assert_eq!(cfg.scaffold.component, "model");
        assert_eq!(cfg.layout, AppConfig::default().layout);
    }

    #[test]
    fn environment_overrides_file() {
        let (_dir, path) = write_config("[scaffold]\nforce = false\n");
        let cfg = AppConfig::load_with(
            Some(&path),
            env(&[
                ("LAYERCAKE__SCAFFOLD__FORCE", "true"),
                ("LAYERCAKE__LAYOUT__SRC_DIR", "crate_src"),
            ]),
        )
        .unwrap();
        assert!(cfg.scaffold.force);
        assert_eq!(cfg.layout.src_dir, "crate_src");
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let err = AppConfig::load_with(Some(&PathBuf::from("/nope/layercake.toml")), env(&[]))
            .unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let (_dir, path) = write_config("[scaffold\n");
        let err = AppConfig::load_with(Some(&path), env(&[])).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn get_walks_dotted_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("scaffold.methods").unwrap(), "GET,POST,PUT,DELETE");
        assert_eq!(cfg.get("output.no_color").unwrap(), "false");
        assert_eq!(cfg.get("project.root").unwrap(), ".");
    }

    #[test]
    fn get_rejects_unknown_and_section_keys() {
        let cfg = AppConfig::default();
        assert!(cfg.get("does.not.exist").is_err());
        assert!(cfg.get("layout").is_err());
    }

    #[test]
    fn invalid_layout_is_config_error() {
        let mut cfg = AppConfig::default();
        cfg.layout.router_file = cfg.layout.container_file.clone();
        assert_eq!(cfg.project_layout().unwrap_err().exit_code(), 4);
    }
}
