//! Clap derive structures for the `rooster` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use rooster_core::MonthDirection;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rooster -- roster and publications from the command line
#[derive(Debug, Parser)]
#[command(
    name = "rooster",
    version,
    about = "Browse the shift roster and publications from the command line",
    long_about = "Browse the shift roster and publications from the command line.\n\n\
        Talks to the Rooster API, or serves built-in sample data when the\n\
        mock backend is configured (the default).",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file to use instead of the platform default
    #[arg(long, env = "ROOSTER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Take the mock backend offline so every request fails
    #[arg(long, global = true)]
    pub offline: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse and search publications
    #[command(alias = "pub", alias = "p")]
    Publications(PublicationsArgs),

    /// Show the shift roster
    #[command(alias = "s")]
    Schedule(ScheduleArgs),

    /// Show or end the current session
    Profile(ProfileArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ── Publications ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PublicationsArgs {
    #[command(subcommand)]
    pub command: PublicationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PublicationsCommand {
    /// List publications, optionally filtered locally
    #[command(alias = "ls")]
    List {
        /// Case-insensitive match on title, description, or tag
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show one publication
    Show {
        /// Publication ID
        id: String,
    },

    /// Search publications on the backend
    Search {
        /// Search text
        query: String,
    },
}

// ── Schedule ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// Show the week strip and the selected day's shifts
    Week(WeekArgs),

    /// Show the full detail of one shift
    Shift {
        /// Shift ID
        id: String,
    },
}

/// Applied in order: room, date, month steps, then strip day.
#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Day to select (YYYY-MM-DD) [default: from config, else today]
    #[arg(long, short = 'd')]
    pub date: Option<NaiveDate>,

    /// Move one month back or forward; repeatable (prev, next)
    #[arg(long, short = 'm')]
    pub month: Vec<MonthDirection>,

    /// Select a day from the strip by position (0-6)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..7))]
    pub day: Option<u8>,

    /// Room ID to select
    #[arg(long, short = 'r')]
    pub room: Option<String>,
}

// ── Profile ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: Option<ProfileCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Sign out and show the resulting session
    Logout,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Show the effective configuration (file + environment)
    Show,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
