//! Global skill definitions (skills.yaml).

use crate::error::CompileError;
use crate::source::{load_yaml, unique_keys};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A skill as declared in skills.yaml. The id is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDefinition {
    pub id: String,
    /// File location relative to the skills directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct SkillEntry {
    #[serde(default)]
    path: Option<String>,
    name: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct SkillsFile {
    #[serde(deserialize_with = "unique_keys")]
    skills: IndexMap<String, SkillEntry>,
}

/// The global skill set, keyed by unique id.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: IndexMap<String, SkillDefinition>,
}

impl SkillCatalog {
    pub fn load(path: &Path) -> Result<Self, CompileError> {
        let file: SkillsFile = load_yaml(path)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: SkillsFile) -> Self {
        let skills = file
            .skills
            .into_iter()
            .map(|(id, entry)| {
                let definition = SkillDefinition {
                    id: id.clone(),
                    path: entry.path.filter(|p| !p.trim().is_empty()),
                    name: entry.name,
                    description: entry.description,
                };
                (id, definition)
            })
            .collect();
        Self { skills }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = SkillDefinition>) -> Self {
        let skills = definitions
            .into_iter()
            .map(|definition| (definition.id.clone(), definition))
            .collect();
        Self { skills }
    }

    pub fn get(&self, id: &str) -> Option<&SkillDefinition> {
        self.skills.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
