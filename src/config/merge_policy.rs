//! Merge rules: defaults applied underneath every other source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with layout defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("paths.src_dir", "src")?
        .set_default("paths.agents_file", "agents.yaml")?
        .set_default("paths.skills_file", "skills.yaml")?
        .set_default("paths.profiles_dir", "profiles")?
        .set_default("paths.agents_dir", "agents")?
        .set_default("paths.prompts_dir", "core-prompts")?
        .set_default("paths.output_formats_dir", "output-formats")?
        .set_default("paths.skills_dir", "skills")?
        .set_default("paths.out_dir", ".claude")
}
