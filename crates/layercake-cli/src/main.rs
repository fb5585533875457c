//! `layercake`: scaffold CRUD resource slices into a layered axum service.
//!
//! Arguments are parsed and logging installed before configuration is
//! loaded, so a broken config file is reported like any other error.
//!
//! ## Exit codes
//!
//! | Code | Meaning                           |
//! |------|-----------------------------------|
//! |  0   | Success                           |
//! |  1   | Internal / system error           |
//! |  2   | User / input error or conflict    |
//! |  3   | Registry file not found           |
//! |  4   | Configuration error               |

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::CliResult,
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Before tracing init so RUST_LOG from .env applies.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.log();
            let colored = !no_color && std::io::stderr().is_terminal();
            eprint!("{}", err.render(verbose, colored));
            ExitCode::from(err.exit_code())
        }
    }
}

/// Load configuration, then hand off to the subcommand.
#[instrument(skip_all, fields(command = cli.command.name()))]
fn run(cli: Cli) -> CliResult<()> {
    let Cli { global, command } = cli;
    let config = AppConfig::load(global.config.as_ref())?;
    let output = OutputManager::new(&global, &config);
    debug!(
        root = %config.project.root.display(),
        format = ?global.output_format,
        "Configuration loaded"
    );

    match command {
        Commands::Scaffold(args) => commands::scaffold::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, global.config, output),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
