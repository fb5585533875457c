//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so
//! `layercake scaffold ... -vv` and `layercake -vv scaffold ...` are the same.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity on stderr:
    (none)  - Warnings and errors
    -v      - Info (plan and commit summaries)
    -vv     - Debug (every staged path)
    -vvv    - Trace"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>): any value but an empty
    /// string or a falsey word disables colour.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Explicit config file; replaces `.layercake.toml` discovery.
    ///
    /// No short flag: `-c` belongs to `scaffold --component`.
    #[arg(
        long = "config",
        global = true,
        env = "LAYERCAKE_CONFIG",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format for reports on stdout"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Filter level for layercake's own crates. `--quiet` beats `-v`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// How reports are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    Human,
    /// No ANSI codes.
    Plain,
    /// The scaffold report or config as JSON.
    Json,
}
