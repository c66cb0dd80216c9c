//! CLI command-name contract for logging and error rendering.

use crate::cli::parse::{Commands, OutputFormat};

/// Command name recorded on the per-command log line (e.g. "compile").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Compile { .. } => "compile",
        Commands::Validate { .. } => "validate",
        Commands::Profiles { .. } => "profiles",
    }
}

/// Output format the command asked for; `compile` always reports as text.
pub fn output_format(command: &Commands) -> OutputFormat {
    match command {
        Commands::Compile { .. } => OutputFormat::Text,
        Commands::Validate { format, .. } | Commands::Profiles { format } => *format,
    }
}
