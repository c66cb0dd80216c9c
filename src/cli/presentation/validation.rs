//! Validation report presentation: text grouped by agent, or json.

use super::section_heading;
use crate::cli::parse::OutputFormat;
use crate::validate::{ValidationIssue, ValidationReport};
use indexmap::IndexMap;
use owo_colors::OwoColorize;
use serde_json::json;

const PROFILE_GROUP: &str = "(profile)";

/// Report for a validation run that may still carry warnings.
pub fn format_validation_report(profile: &str, report: &ValidationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_validation_json(report),
        OutputFormat::Text => {
            let mut out = format!(
                "{} Profile '{}' is valid",
                "✓".green(),
                profile
            );
            if !report.warnings.is_empty() {
                out.push_str("\n\n");
                push_section(&mut out, "Warnings", &report.warnings);
            }
            out
        }
    }
}

/// Itemized report printed when validation blocks a run.
pub fn format_validation_failure(report: &ValidationReport) -> String {
    let mut out = format!(
        "{} Validation failed: {} error(s), {} warning(s)\n\n",
        "✗".red(),
        report.errors.len(),
        report.warnings.len()
    );
    push_section(&mut out, "Errors", &report.errors);
    if !report.warnings.is_empty() {
        out.push_str("\n\n");
        push_section(&mut out, "Warnings", &report.warnings);
    }
    out
}

pub fn format_validation_json(report: &ValidationReport) -> String {
    let out = json!({
        "valid": report.is_valid(),
        "errors": report.errors,
        "warnings": report.warnings,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub(super) fn push_section(out: &mut String, title: &str, issues: &[ValidationIssue]) {
    out.push_str(&format!("{} ({})", section_heading(title), issues.len()));
    for (group, items) in group_by_agent(issues) {
        out.push_str(&format!("\n  {}", group));
        for issue in items {
            out.push_str(&format!("\n    - {}", issue));
        }
    }
}

/// Issues keyed by owning agent, in first-seen order.
fn group_by_agent(issues: &[ValidationIssue]) -> IndexMap<&str, Vec<&ValidationIssue>> {
    let mut groups: IndexMap<&str, Vec<&ValidationIssue>> = IndexMap::new();
    for issue in issues {
        groups
            .entry(issue.agent().unwrap_or(PROFILE_GROUP))
            .or_default()
            .push(issue);
    }
    groups
}
