//! Service settings.
//!
//! Built-in defaults overlaid with `LAYERCAKE_*` environment variables
//! (a `.env` file is loaded by `main` first). List settings are comma
//! separated: `LAYERCAKE_API_KEYS=alpha,beta`.
//!
//! | Variable                  | Default             |
//! |---------------------------|---------------------|
//! | `LAYERCAKE_APP_NAME`      | `layercake-service` |
//! | `LAYERCAKE_API_VERSION`   | `v1`                |
//! | `LAYERCAKE_HOST`          | `0.0.0.0`           |
//! | `LAYERCAKE_PORT`          | `8000`              |
//! | `LAYERCAKE_ALLOWED_HOSTS` | `*`                 |
//! | `LAYERCAKE_CORS_ORIGINS`  | `*`                 |
//! | `LAYERCAKE_ENABLE_HSTS`   | `false`             |
//! | `LAYERCAKE_API_KEYS`      | (none)              |
//! | `LAYERCAKE_GZIP_MIN_SIZE` | `1000`              |
//! | `LAYERCAKE_LOG_LEVEL`     | `info`              |
//! | `LAYERCAKE_LOG_FORMAT`    | `text`              |

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::core::logging::LogFormat;

const LIST_KEYS: [&str; 3] = ["allowed_hosts", "cors_origins", "api_keys"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub api_version: String,
    pub host: String,
    pub port: u16,
    pub allowed_hosts: Vec<String>,
    pub cors_origins: Vec<String>,
    pub enable_hsts: bool,
    pub api_keys: Vec<String>,
    pub gzip_min_size: u16,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "layercake-service".to_string(),
            api_version: "v1".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_hosts: vec!["*".to_string()],
            cors_origins: vec!["*".to_string()],
            enable_hsts: false,
            api_keys: Vec::new(),
            gzip_min_size: 1000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Settings {
    /// Defaults overlaid with the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("LAYERCAKE"))
    }

    /// Defaults overlaid with `environment`; tests pass a `source` map here.
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let environment = LIST_KEYS.iter().fold(
            environment
                .try_parsing(true)
                .list_separator(",")
                .ignore_empty(true),
            |env, key| env.with_list_parse_key(key),
        );

        let settings: Self = Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("api_version", defaults.api_version)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("allowed_hosts", defaults.allowed_hosts)?
            .set_default("cors_origins", defaults.cors_origins)?
            .set_default("enable_hsts", defaults.enable_hsts)?
            .set_default("api_keys", defaults.api_keys)?
            .set_default("gzip_min_size", i64::from(defaults.gzip_min_size))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(settings.normalized())
    }

    /// Trim list entries and drop empty ones.
    fn normalized(mut self) -> Self {
        for list in [
            &mut self.allowed_hosts,
            &mut self.cors_origins,
            &mut self.api_keys,
        ] {
            *list = list
                .iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect();
        }
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn requires_api_key(&self) -> bool {
        !self.api_keys.is_empty()
    }
}
