//! CLI presentation: text and json formatters per command.

mod compile;
mod profiles;
mod validation;

pub use compile::{format_artifact_outcome, format_compile_report};
pub use profiles::format_profiles;
pub use validation::{format_validation_failure, format_validation_json, format_validation_report};

use owo_colors::OwoColorize;

/// Section heading, bold and underlined.
fn section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}
