//! CLI parse: clap types for agentc. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// agentc - compile agent and skill definitions from a profile
#[derive(Parser)]
#[command(name = "agentc", version)]
#[command(about = "Compile agent and skill definitions into deployable markdown")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides <root>/agentc.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging and a per-file listing of the output tree
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a profile and write its compiled agents and skills
    Compile {
        /// Profile directory name under the profiles directory
        #[arg(long)]
        profile: String,
    },
    /// Load, resolve and validate a profile without writing anything
    Validate {
        /// Profile directory name under the profiles directory
        #[arg(long)]
        profile: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List available profiles
    Profiles {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
