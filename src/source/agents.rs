//! Global agent definitions (agents.yaml).

use crate::error::CompileError;
use crate::source::{load_yaml, unique_keys};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static agent metadata shared by every profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Display title
    pub title: String,

    /// One-line description, emitted into the compiled frontmatter
    pub description: String,

    /// Host model hint (e.g. "opus"); omitted from output when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Tools the host grants this agent, in declaration order
    #[serde(default)]
    pub tools: Vec<String>,

    /// Name of the profile prompt set placed before the agent body
    pub core_prompts: String,

    /// Name of the profile prompt set placed after the agent body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_prompts: Option<String>,

    /// Output-format fragment name
    pub output_format: String,
}

#[derive(Debug, Deserialize)]
struct AgentsFile {
    #[serde(deserialize_with = "unique_keys")]
    agents: IndexMap<String, AgentDefinition>,
}

/// All agent definitions keyed by name, in agents.yaml order.
#[derive(Debug, Clone, Default)]
pub struct AgentCatalog {
    agents: IndexMap<String, AgentDefinition>,
}

impl AgentCatalog {
    pub fn load(path: &Path) -> Result<Self, CompileError> {
        let file: AgentsFile = load_yaml(path)?;
        Ok(Self {
            agents: file.agents,
        })
    }

    pub fn from_definitions(agents: IndexMap<String, AgentDefinition>) -> Self {
        Self { agents }
    }

    pub fn get(&self, name: &str) -> Option<&AgentDefinition> {
        self.agents.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
