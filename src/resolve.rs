//! Reference resolution: profile skill references against the global skill
//! set, then profile agent names against the global agent set.
//!
//! Both resolvers are pure and fail fast: an unknown skill id or agent name
//! leaves nothing to validate.

pub mod agents;
pub mod skills;

pub use agents::{resolve_agents, resolve_model, AgentConfig, ResolvedModel};
pub use skills::{resolve_skill, resolve_skill_assignments, ResolvedSkill, SkillAssignment};
