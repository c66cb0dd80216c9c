//! Config Loader
//!
//! Reads the three YAML sources (agents, skills, profile) into typed,
//! insertion-ordered structures. Any missing file or parse failure is fatal:
//! every later stage assumes a fully formed model.

use crate::config::ProjectPaths;
use crate::error::CompileError;
use indexmap::IndexMap;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

pub mod agents;
pub mod profile;
pub mod skills;

pub use agents::{AgentCatalog, AgentDefinition};
pub use profile::{
    discover_profiles, AgentSkillRefs, ProfileConfig, ProfileSummary, SkillReference,
    PROFILE_CONFIG_FILE,
};
pub use skills::{SkillCatalog, SkillDefinition};

/// The three parsed sources for one compile.
#[derive(Debug, Clone)]
pub struct Sources {
    pub agents: AgentCatalog,
    pub skills: SkillCatalog,
    pub profile: ProfileConfig,
}

/// Load agents.yaml, skills.yaml and the named profile's config.yaml.
pub fn load_sources(paths: &ProjectPaths, profile: &str) -> Result<Sources, CompileError> {
    let agents = AgentCatalog::load(&paths.agents_file)?;
    let skills = SkillCatalog::load(&paths.skills_file)?;
    let profile = ProfileConfig::load(&paths.profile_config(profile))?;
    Ok(Sources {
        agents,
        skills,
        profile,
    })
}

/// Read and deserialize one YAML file, reporting failures against its path.
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, CompileError> {
    let content = std::fs::read_to_string(path).map_err(|e| CompileError::ConfigLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let parsed = serde_yaml_ng::from_str(&content).map_err(|e| CompileError::ConfigLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "Loaded YAML source");
    Ok(parsed)
}

/// Deserialize a string-keyed map, preserving declaration order and rejecting
/// duplicate keys.
pub(crate) fn unique_keys<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueKeys<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
        type Value = IndexMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping with unique keys")
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(IndexMap::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                if map.contains_key(&key) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate key '{}'",
                        key
                    )));
                }
                map.insert(key, value);
            }
            Ok(map)
        }
    }

    deserializer.deserialize_any(UniqueKeys(PhantomData))
}
