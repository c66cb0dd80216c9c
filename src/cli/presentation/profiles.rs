//! Profile listing presentation.

use crate::cli::parse::OutputFormat;
use crate::source::ProfileSummary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

pub fn format_profiles(profiles: &[ProfileSummary], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let out = json!({ "profiles": profiles, "total": profiles.len() });
            serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Text => {
            if profiles.is_empty() {
                return "No profiles found.".to_string();
            }
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["Profile", "Agents", "Description"]);
            for profile in profiles {
                table.add_row(vec![
                    profile.name.clone(),
                    profile.agents.join(", "),
                    profile.description.clone().unwrap_or_default(),
                ]);
            }
            format!("{}\n\nTotal: {} profile(s)", table, profiles.len())
        }
    }
}
