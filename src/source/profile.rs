//! Profile configuration (profiles/<name>/config.yaml).

use crate::error::CompileError;
use crate::source::{load_yaml, unique_keys};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// File name of a profile's configuration inside its directory.
pub const PROFILE_CONFIG_FILE: &str = "config.yaml";

/// Profile-local reference to a global skill, with contextual usage text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// Skills assigned to one agent by a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSkillRefs {
    #[serde(default)]
    pub precompiled: Vec<SkillReference>,
    #[serde(default)]
    pub dynamic: Vec<SkillReference>,
}

/// A deployment profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Top-level document copied next to the output directory, relative to the profile directory
    pub claude_md: String,

    #[serde(default, deserialize_with = "unique_keys")]
    pub core_prompt_sets: IndexMap<String, Vec<String>>,

    #[serde(default, deserialize_with = "unique_keys")]
    pub ending_prompt_sets: IndexMap<String, Vec<String>>,

    /// Agent name -> skills. Its keys are the compile set.
    #[serde(default, deserialize_with = "unique_keys")]
    pub agent_skills: IndexMap<String, AgentSkillRefs>,
}

impl ProfileConfig {
    pub fn load(path: &Path) -> Result<Self, CompileError> {
        load_yaml(path)
    }

    /// The agents this profile compiles: exactly the keys of `agent_skills`,
    /// in declaration order. No other list of agent names exists.
    pub fn compile_set(&self) -> impl Iterator<Item = &str> {
        self.agent_skills.keys().map(String::as_str)
    }

    pub fn core_prompt_set(&self, name: &str) -> Option<&[String]> {
        self.core_prompt_sets.get(name).map(Vec::as_slice)
    }

    pub fn ending_prompt_set(&self, name: &str) -> Option<&[String]> {
        self.ending_prompt_sets.get(name).map(Vec::as_slice)
    }
}

/// One entry of `agentc profiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    /// Directory name; what `--profile` takes
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub agents: Vec<String>,
}

/// Every directory under `profiles_dir` holding a `config.yaml`, by name.
pub fn discover_profiles(profiles_dir: &Path) -> Result<Vec<ProfileSummary>, CompileError> {
    if !profiles_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut summaries = Vec::new();
    for entry in WalkDir::new(profiles_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| CompileError::ConfigLoad {
            path: profiles_dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = entry.path().join(PROFILE_CONFIG_FILE);
        if !entry.file_type().is_dir() || !config.is_file() {
            continue;
        }
        let profile = ProfileConfig::load(&config)?;
        summaries.push(ProfileSummary {
            name: entry.file_name().to_string_lossy().into_owned(),
            description: profile.description.clone(),
            agents: profile.compile_set().map(str::to_string).collect(),
        });
    }
    Ok(summaries)
}
