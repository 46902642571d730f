//! Clap CLI definitions for the `folio` command.
//!
//! This module defines the complete CLI structure using clap 4 derive macros.
//! Each subcommand renders one page of the portfolio; no subcommand means
//! the home page.

use clap::{Args, Parser, Subcommand};

/// folio -- personal portfolio for the terminal.
///
/// Profile, projects, an experience timeline, and contact details,
/// rendered as terminal pages in English or Traditional Chinese.
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Personal portfolio for the terminal",
    long_about = "Profile, projects, an experience timeline, and contact details, \
                  rendered as terminal pages in English or Traditional Chinese.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Display language: en or zh (default: $FOLIO_LOCALE, config file, "en").
    #[arg(short = 'l', long, global = true, env = "FOLIO_LOCALE")]
    pub locale: Option<String>,

    /// Config file path (default: $FOLIO_CONFIG, then ~/.config/folio/config.yaml).
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the home page (default when no command is given).
    Home,

    /// List projects, optionally filtered by technology.
    Projects(ProjectsArgs),

    /// Show the work experience timeline.
    #[command(alias = "exp")]
    Experience(ExperienceArgs),

    /// Show contact details.
    Contact,

    /// Generate shell completions.
    Completion(CompletionArgs),
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Arguments for `folio projects`.
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Only show projects using this technology (case-insensitive substring).
    #[arg(short = 't', long)]
    pub tech: Option<String>,

    /// Load projects from a JSON file instead of the built-in list.
    #[arg(long, value_name = "FILE")]
    pub data: Option<String>,
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

/// Arguments for `folio experience`.
#[derive(Args, Debug)]
pub struct ExperienceArgs {
    /// Load work records from a JSON file instead of the built-in list.
    #[arg(long, value_name = "FILE")]
    pub data: Option<String>,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `folio completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
