//! `layercake config`: inspect the effective configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` flag, which `path` reports as-is.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.value(&config.get(&key)?)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.value(config.to_toml()?.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            let path = config_file
                .or_else(AppConfig::discovered_path)
                .or_else(AppConfig::global_path)
                .unwrap_or_else(|| LOCAL_CONFIG_FILE.into());
            output.value(&path.display().to_string())?;
        }
    }

    Ok(())
}
