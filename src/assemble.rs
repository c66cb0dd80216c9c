//! Content Assembler
//!
//! Gathers every piece of text one compiled agent needs: its own fragments,
//! the shared prompt sets it names, its output format, and the full text of
//! its precompiled skills. Runs only after validation, so a missing required
//! file here means the tree changed underneath the run.

use crate::config::ProjectPaths;
use crate::error::CompileError;
use crate::resolve::{AgentConfig, ResolvedSkill};
use crate::source::ProfileConfig;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Per-agent fragment files under `<agents_dir>/<agent>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentFragment {
    Intro,
    Workflow,
    Examples,
    CriticalRequirements,
    CriticalReminders,
}

impl AgentFragment {
    pub const ALL: [AgentFragment; 5] = [
        AgentFragment::Intro,
        AgentFragment::Workflow,
        AgentFragment::Examples,
        AgentFragment::CriticalRequirements,
        AgentFragment::CriticalReminders,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AgentFragment::Intro => "intro.md",
            AgentFragment::Workflow => "workflow.md",
            AgentFragment::Examples => "examples.md",
            AgentFragment::CriticalRequirements => "critical-requirements.md",
            AgentFragment::CriticalReminders => "critical-reminders.md",
        }
    }

    /// Human label used in reports and placeholders.
    pub fn label(self) -> &'static str {
        match self {
            AgentFragment::Intro => "intro",
            AgentFragment::Workflow => "workflow",
            AgentFragment::Examples => "examples",
            AgentFragment::CriticalRequirements => "critical requirements",
            AgentFragment::CriticalReminders => "critical reminders",
        }
    }

    /// Required fragments fail validation when missing; optional ones fall back
    /// to a placeholder.
    pub fn is_required(self) -> bool {
        matches!(self, AgentFragment::Intro | AgentFragment::Workflow)
    }
}

/// Text rendered in place of a missing optional fragment.
pub fn placeholder(fragment: AgentFragment) -> String {
    format!("_No {} defined for this agent._", fragment.label())
}

/// Resolve an optional fragment: its content when present, the visible
/// placeholder when absent. An empty file is content, not absence.
pub fn fragment_or_placeholder(fragment: AgentFragment, content: Option<String>) -> String {
    content.unwrap_or_else(|| placeholder(fragment))
}

/// Metadata for a skill the host loads at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DynamicSkillRef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub usage: String,
}

/// Everything the renderer needs for one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub name: String,
    pub title: String,
    pub description: String,
    pub model: Option<String>,
    pub tools: Vec<String>,
    pub intro: String,
    pub workflow: String,
    pub examples: String,
    pub critical_requirements: String,
    pub critical_reminders: String,
    /// Concatenated `core_prompts` set
    pub core_prompts: String,
    /// Concatenated `ending_prompts` set; empty when the agent names none
    pub ending_prompts: String,
    pub output_format: String,
    /// Precompiled skills with `content` filled in
    pub precompiled_skills: Vec<ResolvedSkill>,
    pub dynamic_skills: Vec<DynamicSkillRef>,
}

/// Assemble the render context for one validated agent.
pub fn assemble_agent(
    agent: &AgentConfig,
    profile: &ProfileConfig,
    paths: &ProjectPaths,
) -> Result<RenderContext, CompileError> {
    let definition = &agent.definition;

    let intro = read_fragment(&paths.agent_fragment(&agent.name, AgentFragment::Intro))?;
    let workflow = read_fragment(&paths.agent_fragment(&agent.name, AgentFragment::Workflow))?;
    let examples = read_optional_fragment(paths, &agent.name, AgentFragment::Examples)?;
    let critical_requirements =
        read_optional_fragment(paths, &agent.name, AgentFragment::CriticalRequirements)?;
    let critical_reminders =
        read_optional_fragment(paths, &agent.name, AgentFragment::CriticalReminders)?;

    let core_set = profile
        .core_prompt_set(&definition.core_prompts)
        .unwrap_or_default();
    let core_prompts = concat_prompt_set(core_set, paths)?;

    let ending_prompts = match &definition.ending_prompts {
        Some(set) => concat_prompt_set(profile.ending_prompt_set(set).unwrap_or_default(), paths)?,
        None => String::new(),
    };

    let output_format = read_fragment(&paths.output_format(&definition.output_format))?;

    let precompiled_skills = agent
        .skills
        .precompiled
        .iter()
        .map(|skill| load_skill_content(&agent.name, skill, paths))
        .collect::<Result<Vec<_>, _>>()?;

    let dynamic_skills = agent
        .skills
        .dynamic
        .iter()
        .map(|skill| DynamicSkillRef {
            id: skill.id.clone(),
            name: skill.name.clone(),
            description: skill.description.clone(),
            usage: skill.usage_text().unwrap_or_default().to_string(),
        })
        .collect();

    debug!(agent = %agent.name, "Assembled agent content");

    Ok(RenderContext {
        name: agent.name.clone(),
        title: definition.title.clone(),
        description: definition.description.clone(),
        model: definition.model.clone(),
        tools: definition.tools.clone(),
        intro,
        workflow,
        examples,
        critical_requirements,
        critical_reminders,
        core_prompts,
        ending_prompts,
        output_format,
        precompiled_skills,
        dynamic_skills,
    })
}

/// Concatenate prompt-set fragments in declaration order, separated by a blank line.
pub fn concat_prompt_set(fragments: &[String], paths: &ProjectPaths) -> Result<String, CompileError> {
    let mut parts = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        parts.push(read_fragment(&paths.prompt_fragment(fragment))?);
    }
    Ok(parts.join("\n\n"))
}

fn load_skill_content(
    agent: &str,
    skill: &ResolvedSkill,
    paths: &ProjectPaths,
) -> Result<ResolvedSkill, CompileError> {
    let path = skill.path.as_deref().ok_or_else(|| CompileError::Render {
        agent: agent.to_string(),
        message: format!("precompiled skill '{}' has no path", skill.id),
    })?;
    let content = read_text(&paths.skill_source(path))?;
    Ok(skill.clone().with_content(content))
}

fn read_optional_fragment(
    paths: &ProjectPaths,
    agent: &str,
    fragment: AgentFragment,
) -> Result<String, CompileError> {
    let content = read_optional(&paths.agent_fragment(agent, fragment))?
        .map(|text| text.trim_end().to_string());
    Ok(fragment_or_placeholder(fragment, content))
}

/// Fragment text without trailing whitespace; the template owns spacing.
fn read_fragment(path: &Path) -> Result<String, CompileError> {
    let text = read_text(path)?;
    debug!(path = %path.display(), bytes = text.len(), "Read fragment");
    Ok(text.trim_end().to_string())
}

fn read_text(path: &Path) -> Result<String, CompileError> {
    std::fs::read_to_string(path).map_err(|e| CompileError::read(path, e))
}

fn read_optional(path: &Path) -> Result<Option<String>, CompileError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CompileError::read(path, e)),
    }
}
