//! CLI output: error mapping from pipeline errors to stable CLI surface.

use crate::cli::parse::OutputFormat;
use crate::cli::presentation::{format_validation_failure, format_validation_json};
use crate::error::CompileError;

/// Map a pipeline error to the text printed on stderr.
///
/// Validation failures print the whole report, as JSON when the command
/// asked for JSON. Everything else is one line prefixed by its category.
pub fn map_error(e: &CompileError, format: OutputFormat) -> String {
    match (e, format) {
        (CompileError::Validation(report), OutputFormat::Json) => format_validation_json(report),
        (CompileError::Validation(report), OutputFormat::Text) => format_validation_failure(report),
        (other, _) => format!("error[{}]: {}", other.category(), other),
    }
}
