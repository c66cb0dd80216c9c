//! Compile command presentation.

use super::section_heading;
use super::validation::push_section;
use crate::build::{ArtifactKind, ArtifactOutcome, CompileReport, ManifestEntry};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Digest prefix shown in tables.
const SHORT_DIGEST: usize = 12;

/// One line per written artifact, printed as it lands.
pub fn format_artifact_outcome(outcome: &ArtifactOutcome) -> String {
    format!(
        "  {} {:<16} {} ({} bytes)",
        "+".green(),
        outcome.kind,
        outcome.path.display(),
        outcome.bytes
    )
}

/// Summary of a compile; `manifest` adds a per-file listing of the output tree.
pub fn format_compile_report(report: &CompileReport, manifest: Option<&[ManifestEntry]>) -> String {
    let mut out = format!(
        "{} Compiled profile '{}': {} agent(s), {} skill(s)",
        "✓".green(),
        report.profile,
        report.count(ArtifactKind::Agent),
        report.count(ArtifactKind::Skill),
    );
    if let Some(document) = report
        .artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::ProfileDocument)
    {
        out.push_str(&format!("\nProfile document: {}", document.path.display()));
    }
    if !report.warnings.is_empty() {
        out.push_str("\n\n");
        push_section(&mut out, "Warnings", &report.warnings);
    }

    if let Some(entries) = manifest {
        out.push_str(&format!("\n\n{}\n", section_heading("Output")));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Path", "Bytes", "BLAKE3"]);
        for entry in entries {
            table.add_row(vec![
                entry.path.display().to_string(),
                entry.bytes.to_string(),
                entry.digest.chars().take(SHORT_DIGEST).collect(),
            ]);
        }
        out.push_str(&table.to_string());
    }
    out
}
