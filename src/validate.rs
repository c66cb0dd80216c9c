//! Cross-Reference Validator
//!
//! One exhaustive pass over the resolved model and the filesystem. Every
//! problem is collected; nothing stops at the first failure, so one run
//! produces one complete report. Errors block compilation, warnings never do.

use crate::assemble::AgentFragment;
use crate::config::{is_contained_path, is_plain_name, ProjectPaths};
use crate::resolve::{AgentConfig, ResolvedModel, ResolvedSkill};
use crate::slug::slugify;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Which prompt-set map a name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptSetKind {
    Core,
    Ending,
}

impl PromptSetKind {
    fn field(self) -> &'static str {
        match self {
            PromptSetKind::Core => "core_prompts",
            PromptSetKind::Ending => "ending_prompts",
        }
    }
}

/// One validation finding. Severity is decided by which list of the
/// [`ValidationReport`] it lands in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Agent name is not a single plain file name
    InvalidAgentName {
        agent: String,
    },
    /// Intro or workflow fragment missing (error)
    MissingRequiredFragment {
        agent: String,
        fragment: String,
        path: PathBuf,
    },
    /// Examples or critical fragment missing; placeholder used (warning)
    MissingOptionalFragment {
        agent: String,
        fragment: String,
        path: PathBuf,
    },
    UnknownPromptSet {
        agent: String,
        #[serde(rename = "set_kind")]
        kind: PromptSetKind,
        set: String,
    },
    MissingPromptFragment {
        agent: String,
        set: String,
        fragment: String,
        path: PathBuf,
    },
    MissingOutputFormat {
        agent: String,
        format: String,
        path: PathBuf,
    },
    PrecompiledSkillWithoutPath {
        agent: String,
        skill: String,
    },
    MissingSkillFile {
        agent: String,
        skill: String,
        path: PathBuf,
    },
    /// Skill path escapes the skills directory
    InvalidSkillPath {
        agent: String,
        skill: String,
        path: String,
    },
    /// Dynamic skill without a file; referenced by id only (warning)
    DynamicSkillWithoutPath {
        agent: String,
        skill: String,
    },
    DynamicSkillWithoutUsage {
        agent: String,
        skill: String,
    },
    MissingProfileDocument {
        profile: String,
        path: PathBuf,
    },
    InvalidProfileDocument {
        profile: String,
        document: String,
    },
    SkillSlugCollision {
        slug: String,
        first: String,
        second: String,
    },
}

impl ValidationIssue {
    /// Agent the finding belongs to, if any.
    pub fn agent(&self) -> Option<&str> {
        match self {
            ValidationIssue::InvalidAgentName { agent }
            | ValidationIssue::MissingRequiredFragment { agent, .. }
            | ValidationIssue::MissingOptionalFragment { agent, .. }
            | ValidationIssue::UnknownPromptSet { agent, .. }
            | ValidationIssue::MissingPromptFragment { agent, .. }
            | ValidationIssue::MissingOutputFormat { agent, .. }
            | ValidationIssue::PrecompiledSkillWithoutPath { agent, .. }
            | ValidationIssue::MissingSkillFile { agent, .. }
            | ValidationIssue::InvalidSkillPath { agent, .. }
            | ValidationIssue::DynamicSkillWithoutPath { agent, .. }
            | ValidationIssue::DynamicSkillWithoutUsage { agent, .. } => Some(agent),
            ValidationIssue::MissingProfileDocument { .. }
            | ValidationIssue::InvalidProfileDocument { .. }
            | ValidationIssue::SkillSlugCollision { .. } => None,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::InvalidAgentName { agent } => write!(
                f,
                "Agent '{}': name must be a single file name without path separators",
                agent
            ),
            ValidationIssue::MissingRequiredFragment {
                agent,
                fragment,
                path,
            } => write!(
                f,
                "Agent '{}': required {} fragment not found at {}",
                agent,
                fragment,
                path.display()
            ),
            ValidationIssue::MissingOptionalFragment {
                agent,
                fragment,
                path,
            } => write!(
                f,
                "Agent '{}': no {} fragment at {}, using placeholder",
                agent,
                fragment,
                path.display()
            ),
            ValidationIssue::UnknownPromptSet { agent, kind, set } => write!(
                f,
                "Agent '{}': {} set '{}' is not defined in the profile",
                agent,
                kind.field(),
                set
            ),
            ValidationIssue::MissingPromptFragment {
                agent,
                set,
                fragment,
                path,
            } => write!(
                f,
                "Agent '{}': fragment '{}' of prompt set '{}' not found at {}",
                agent,
                fragment,
                set,
                path.display()
            ),
            ValidationIssue::MissingOutputFormat {
                agent,
                format,
                path,
            } => write!(
                f,
                "Agent '{}': output format '{}' not found at {}",
                agent,
                format,
                path.display()
            ),
            ValidationIssue::PrecompiledSkillWithoutPath { agent, skill } => write!(
                f,
                "Agent '{}': precompiled skill '{}' has no path",
                agent, skill
            ),
            ValidationIssue::MissingSkillFile { agent, skill, path } => write!(
                f,
                "Agent '{}': skill '{}' file not found at {}",
                agent,
                skill,
                path.display()
            ),
            ValidationIssue::InvalidSkillPath { agent, skill, path } => write!(
                f,
                "Agent '{}': skill '{}' path '{}' must stay inside the skills directory",
                agent, skill, path
            ),
            ValidationIssue::DynamicSkillWithoutPath { agent, skill } => write!(
                f,
                "Agent '{}': dynamic skill '{}' has no path and will be referenced by id only",
                agent, skill
            ),
            ValidationIssue::DynamicSkillWithoutUsage { agent, skill } => write!(
                f,
                "Agent '{}': dynamic skill '{}' has no usage text",
                agent, skill
            ),
            ValidationIssue::MissingProfileDocument { profile, path } => write!(
                f,
                "Profile '{}': document not found at {}",
                profile,
                path.display()
            ),
            ValidationIssue::InvalidProfileDocument { profile, document } => write!(
                f,
                "Profile '{}': document '{}' must stay inside the profile directory",
                profile, document
            ),
            ValidationIssue::SkillSlugCollision {
                slug,
                first,
                second,
            } => write!(
                f,
                "Skills '{}' and '{}' both map to output directory '{}'",
                first, second, slug
            ),
        }
    }
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, issue: ValidationIssue) {
        debug!(issue = %issue, "Validation error");
        self.errors.push(issue);
    }

    fn warning(&mut self, issue: ValidationIssue) {
        warn!(issue = %issue, "Validation warning");
        self.warnings.push(issue);
    }
}

/// Validate every resolved agent plus the profile document.
pub fn validate(model: &ResolvedModel, paths: &ProjectPaths) -> ValidationReport {
    let mut report = ValidationReport::default();

    let document = &model.profile.claude_md;
    let path = paths.profile_document(&model.profile.name, document);
    if !is_contained_path(document) {
        report.error(ValidationIssue::InvalidProfileDocument {
            profile: model.profile.name.clone(),
            document: document.clone(),
        });
    } else if !path.is_file() {
        report.error(ValidationIssue::MissingProfileDocument {
            profile: model.profile.name.clone(),
            path,
        });
    }

    for agent in &model.agents {
        // The name becomes both a source directory and an output file name.
        if !is_plain_name(&agent.name) {
            report.error(ValidationIssue::InvalidAgentName {
                agent: agent.name.clone(),
            });
            continue;
        }
        check_fragments(agent, paths, &mut report);
        check_prompt_sets(agent, model, paths, &mut report);
        check_output_format(agent, paths, &mut report);
        check_skills(agent, paths, &mut report);
    }

    check_slug_collisions(&model.agents, &mut report);

    report
}

fn check_fragments(agent: &AgentConfig, paths: &ProjectPaths, report: &mut ValidationReport) {
    for fragment in AgentFragment::ALL {
        let path = paths.agent_fragment(&agent.name, fragment);
        if path.is_file() {
            continue;
        }
        if fragment.is_required() {
            report.error(ValidationIssue::MissingRequiredFragment {
                agent: agent.name.clone(),
                fragment: fragment.label().to_string(),
                path,
            });
        } else {
            report.warning(ValidationIssue::MissingOptionalFragment {
                agent: agent.name.clone(),
                fragment: fragment.label().to_string(),
                path,
            });
        }
    }
}

fn check_prompt_sets(
    agent: &AgentConfig,
    model: &ResolvedModel,
    paths: &ProjectPaths,
    report: &mut ValidationReport,
) {
    let definition = &agent.definition;
    let mut sets = vec![(
        PromptSetKind::Core,
        definition.core_prompts.as_str(),
        model.profile.core_prompt_set(&definition.core_prompts),
    )];
    if let Some(ending) = &definition.ending_prompts {
        sets.push((
            PromptSetKind::Ending,
            ending.as_str(),
            model.profile.ending_prompt_set(ending),
        ));
    }

    for (kind, set, fragments) in sets {
        let Some(fragments) = fragments else {
            report.error(ValidationIssue::UnknownPromptSet {
                agent: agent.name.clone(),
                kind,
                set: set.to_string(),
            });
            continue;
        };
        for fragment in fragments {
            let path = paths.prompt_fragment(fragment);
            if !path.is_file() {
                report.error(ValidationIssue::MissingPromptFragment {
                    agent: agent.name.clone(),
                    set: set.to_string(),
                    fragment: fragment.clone(),
                    path,
                });
            }
        }
    }
}

fn check_output_format(agent: &AgentConfig, paths: &ProjectPaths, report: &mut ValidationReport) {
    let format = &agent.definition.output_format;
    let path = paths.output_format(format);
    if !path.is_file() {
        report.error(ValidationIssue::MissingOutputFormat {
            agent: agent.name.clone(),
            format: format.clone(),
            path,
        });
    }
}

fn check_skills(agent: &AgentConfig, paths: &ProjectPaths, report: &mut ValidationReport) {
    for skill in &agent.skills.precompiled {
        match &skill.path {
            Some(path) => check_skill_file(agent, skill, path, paths, report),
            None => report.error(ValidationIssue::PrecompiledSkillWithoutPath {
                agent: agent.name.clone(),
                skill: skill.id.clone(),
            }),
        }
    }

    for skill in &agent.skills.dynamic {
        match &skill.path {
            Some(path) => check_skill_file(agent, skill, path, paths, report),
            None => report.warning(ValidationIssue::DynamicSkillWithoutPath {
                agent: agent.name.clone(),
                skill: skill.id.clone(),
            }),
        }
        if skill.usage_text().is_none() {
            report.error(ValidationIssue::DynamicSkillWithoutUsage {
                agent: agent.name.clone(),
                skill: skill.id.clone(),
            });
        }
    }
}

fn check_skill_file(
    agent: &AgentConfig,
    skill: &ResolvedSkill,
    path: &str,
    paths: &ProjectPaths,
    report: &mut ValidationReport,
) {
    if !is_contained_path(path) {
        report.error(ValidationIssue::InvalidSkillPath {
            agent: agent.name.clone(),
            skill: skill.id.clone(),
            path: path.to_string(),
        });
        return;
    }
    let full = paths.skill_source(path);
    if !full.is_file() {
        report.error(ValidationIssue::MissingSkillFile {
            agent: agent.name.clone(),
            skill: skill.id.clone(),
            path: full,
        });
    }
}

/// Distinct path-bearing skills must land in distinct output directories.
fn check_slug_collisions(agents: &[AgentConfig], report: &mut ValidationReport) {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut reported: Vec<(String, String)> = Vec::new();
    for skill in agents.iter().flat_map(|agent| agent.skills.iter()) {
        if skill.path.is_none() {
            continue;
        }
        let slug = slugify(&skill.id);
        match seen.get(&slug) {
            Some(first) if first != &skill.id => {
                let pair = (first.clone(), skill.id.clone());
                if !reported.contains(&pair) {
                    report.error(ValidationIssue::SkillSlugCollision {
                        slug,
                        first: pair.0.clone(),
                        second: pair.1.clone(),
                    });
                    reported.push(pair);
                }
            }
            Some(_) => {}
            None => {
                seen.insert(slug, skill.id.clone());
            }
        }
    }
}
