//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use namewright_core::domain::NamingStyle;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "namewright",
    bin_name = "namewright",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Enforce file and folder naming styles in Vue projects",
    long_about = "Namewright renames the components and setup services of a Vue \
                  project to a consistent naming style and rewrites the import \
                  statements and router entries that point at them.",
    after_help = "EXAMPLES:\n\
        \x20 namewright rename --file-style pascal --folder-style kebab\n\
        \x20 namewright rename --dry-run -C ./my-app\n\
        \x20 namewright init --file-style camel\n\
        \x20 namewright completions bash > /usr/share/bash-completion/completions/namewright",
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
    /// Apply the configured naming style to a project.
    #[command(
        visible_alias = "r",
        about = "Rename files and folders and update their imports",
        after_help = "EXAMPLES:\n\
            \x20 namewright rename\n\
            \x20 namewright rename --file-style pascal --folder-style kebab --yes\n\
            \x20 namewright rename --no-setup-service --dry-run\n\
            \x20 namewright rename -C ../frontend --output-format json"
    )]
    Rename(RenameArgs),

    /// Write a Namewright configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 namewright init                        # ./.namewright.toml\n\
            \x20 namewright init --global               # global config\n\
            \x20 namewright init --file-style camel --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 namewright completions bash > ~/.local/share/bash-completion/completions/namewright\n\
            \x20 namewright completions zsh  > ~/.zfunc/_namewright\n\
            \x20 namewright completions fish > ~/.config/fish/completions/namewright.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Namewright configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 namewright config get naming.file_naming_style\n\
            \x20 namewright config set naming.folder_naming_style kebab\n\
            \x20 namewright config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Project root the command works on. Used to locate the project config file.
    pub fn project_root(&self) -> PathBuf {
        match self {
            Self::Rename(args) => args.directory.clone(),
            _ => PathBuf::from("."),
        }
    }
}

// ── rename ────────────────────────────────────────────────────────────────────

/// Arguments for `namewright rename`.
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Style for file names.
    #[arg(
        long = "file-style",
        value_name = "STYLE",
        help = "File naming style: pascal, camel or kebab"
    )]
    pub file_style: Option<NamingStyle>,

    /// Style for folder names.
    #[arg(
        long = "folder-style",
        value_name = "STYLE",
        help = "Folder naming style: pascal, camel or kebab"
    )]
    pub folder_style: Option<NamingStyle>,

    /// Process `src/setup` (setup-service convention).
    #[arg(
        long = "setup-service",
        conflicts_with = "no_setup_service",
        help = "Rename src/setup instead of src/views"
    )]
    pub setup_service: bool,

    /// Process `src/views` instead of `src/setup`.
    #[arg(long = "no-setup-service", help = "Rename src/views instead of src/setup")]
    pub no_setup_service: bool,

    /// Show the planned renames without touching the project.
    #[arg(long = "dry-run", help = "Show what would be renamed without renaming")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and rename immediately")]
    pub yes: bool,

    /// Project root.
    #[arg(
        short = 'C',
        long = "directory",
        value_name = "DIR",
        default_value = ".",
        help = "Project root (default: current directory)"
    )]
    pub directory: PathBuf,
}

impl RenameArgs {
    /// `Some` when a setup-service flag was passed.
    pub fn setup_service_override(&self) -> Option<bool> {
        match (self.setup_service, self.no_setup_service) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `namewright init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Style for file names.
    #[arg(long = "file-style", value_name = "STYLE", help = "File naming style")]
    pub file_style: Option<NamingStyle>,

    /// Style for folder names.
    #[arg(long = "folder-style", value_name = "STYLE", help = "Folder naming style")]
    pub folder_style: Option<NamingStyle>,

    /// Record that the project keeps its logic in `src/setup`.
    #[arg(
        long = "setup-service",
        conflicts_with = "no_setup_service",
        help = "Use the setup-service convention"
    )]
    pub setup_service: bool,

    /// Record that the project keeps its logic in `src/views`.
    #[arg(long = "no-setup-service", help = "Do not use the setup-service convention")]
    pub no_setup_service: bool,

    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

impl InitArgs {
    /// `true` when any naming option was given on the command line.
    pub fn has_naming_flags(&self) -> bool {
        self.file_style.is_some()
            || self.folder_style.is_some()
            || self.setup_service_override().is_some()
    }

    /// `Some` when a setup-service flag was passed.
    pub fn setup_service_override(&self) -> Option<bool> {
        match (self.setup_service, self.no_setup_service) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `namewright completions`.
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

/// Subcommands for `namewright config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `naming.file_naming_style`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the paths of the configuration files.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
