//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "layercake",
    bin_name = "layercake",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold CRUD resource slices into a layered axum service",
    long_about = "layercake generates a vertical slice (entity, port, use cases, \
                  in-memory adapter, schemas, controller, routes) for one \
                  resource and registers it in the project's DI container \
                  and router.",
    after_help = "EXAMPLES:\n\
        \x20 layercake scaffold -r book -p /books -f title:str,pages:int\n\
        \x20 layercake scaffold -r author -p /authors -m GET,POST -c endpoints\n\
        \x20 layercake completions bash > /usr/share/bash-completion/completions/layercake",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a resource slice and register it.
    #[command(
        visible_alias = "s",
        about = "Scaffold a CRUD resource",
        after_help = "EXAMPLES:\n\
            \x20 layercake scaffold -r book -p /books\n\
            \x20 layercake scaffold -r book -p /books -m get,post -f title:str,pages:int\n\
            \x20 layercake scaffold -r book -p /books -c model --dry-run"
    )]
    Scaffold(ScaffoldArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 layercake init           # .layercake.toml in the current directory\n\
            \x20 layercake init --global  # per-user config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 layercake completions bash > ~/.local/share/bash-completion/completions/layercake\n\
            \x20 layercake completions zsh  > ~/.zfunc/_layercake\n\
            \x20 layercake completions fish > ~/.config/fish/completions/layercake.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 layercake config get layout.container_file\n\
            \x20 layercake config list\n\
            \x20 layercake config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Subcommand name, for log spans.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scaffold(_) => "scaffold",
            Self::Init(_) => "init",
            Self::Completions(_) => "completions",
            Self::Config(_) => "config",
        }
    }
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for `layercake scaffold`.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Resource name; normalised to snake_case for files and PascalCase for
    /// types.
    #[arg(short = 'r', long = "resource", value_name = "NAME", help = "Resource name")]
    pub resource: String,

    /// Base endpoint path, e.g. `/books`.
    #[arg(short = 'p', long = "path", value_name = "PATH", help = "Endpoint base path")]
    pub path: String,

    /// Comma-separated HTTP methods (case-insensitive).
    #[arg(
        short = 'm',
        long = "methods",
        value_name = "LIST",
        help = "HTTP methods [default: GET,POST,PUT,DELETE]"
    )]
    pub methods: Option<String>,

    /// Comma-separated `name:type` pairs; types are str, int, float, bool.
    #[arg(
        short = 'f',
        long = "fields",
        value_name = "LIST",
        help = "Fields, e.g. title:str,pages:int"
    )]
    pub fields: Option<String>,

    /// Which layers to generate.
    #[arg(
        short = 'c',
        long = "component",
        value_name = "SCOPE",
        help = "model | usecase | endpoints | adapter | full [default: full]"
    )]
    pub component: Option<String>,

    /// Project root that the layout paths are relative to.
    #[arg(long = "root", value_name = "DIR", help = "Project root directory")]
    pub root: Option<PathBuf>,

    /// Overwrite generated files whose content differs.
    #[arg(long = "force", help = "Overwrite conflicting generated files")]
    pub force: bool,

    /// Report what would change without writing.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `layercake init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the per-user config location instead of the current directory.
    #[arg(long = "global", help = "Create per-user configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `layercake completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `layercake config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.methods`.
        key: String,
    },
    /// Print all configuration values as TOML.
    List,
    /// Print the path of the configuration file in effect.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
