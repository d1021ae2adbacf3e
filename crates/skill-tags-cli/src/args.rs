use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "skill-tags")]
#[command(about = "Categorized skill command files for Cursor")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Work on ./.cursor of the current project instead of ~/.cursor
    #[arg(long, global = true)]
    pub local: bool,

    /// Sync script (default: $SKILL_TAGS_SYNC_SCRIPT, then settings, then
    /// ~/.cursor/sync-skill-commands.sh)
    #[arg(long, global = true)]
    pub sync_script: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add, edit and delete categories interactively (default)
    Categories,

    /// Run the sync script once and regenerate command files
    Sync,

    /// Show saved categories and their skills
    List,

    /// Dry-run keyword matching for one category
    Classify {
        /// Category name (e.g., frontend, devops, or a custom one)
        category: String,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a commented settings file if none exists
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
