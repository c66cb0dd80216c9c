//! Integration tests for load, resolution and validation failures
//!
//! Every failure here must leave the filesystem untouched.

use super::test_utils::{Project, PROFILE_YAML};
use agentc::build::{compile, prepare};
use agentc::error::CompileError;
use agentc::validate::{PromptSetKind, ValidationIssue};

fn validation_errors(err: CompileError) -> Vec<ValidationIssue> {
    match err {
        CompileError::Validation(report) => report.errors,
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_profile_agent_missing_from_agents_yaml_aborts() {
    let project = Project::new();
    project.write(
        "src/profiles/home/config.yaml",
        &format!("{PROFILE_YAML}  reviewer:\n    dynamic: []\n"),
    );

    let err = compile(&project.paths, "home", |_| {}).unwrap_err();
    match err {
        CompileError::UnknownAgent { agent, .. } => assert_eq!(agent, "reviewer"),
        other => panic!("unexpected error: {other:?}"),
    }
    project.assert_nothing_written();
}

#[test]
fn test_unknown_core_prompt_set_is_validation_error() {
    let project = Project::new();
    project.write(
        "src/agents.yaml",
        &super::test_utils::AGENTS_YAML.replacen(
            "core_prompts: developer",
            "core_prompts: standard",
            1,
        ),
    );

    let errors = validation_errors(compile(&project.paths, "home", |_| {}).unwrap_err());
    assert_eq!(
        errors,
        vec![ValidationIssue::UnknownPromptSet {
            agent: "dev".to_string(),
            kind: PromptSetKind::Core,
            set: "standard".to_string(),
        }]
    );
    project.assert_nothing_written();
}

#[test]
fn test_deleted_prompt_fragment_fails_and_writes_nothing() {
    let project = Project::new();
    project.remove("src/core-prompts/investigation.md");

    let errors = validation_errors(compile(&project.paths, "home", |_| {}).unwrap_err());
    // Both agents use the set.
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| matches!(e, ValidationIssue::MissingPromptFragment { fragment, .. } if fragment == "investigation")));
    project.assert_nothing_written();
}

#[test]
fn test_failed_validation_keeps_previous_output() {
    let project = Project::new();
    compile(&project.paths, "home", |_| {}).unwrap();
    let before = project.output_files();

    project.remove("src/agents/dev/intro.md");
    compile(&project.paths, "home", |_| {}).unwrap_err();

    assert_eq!(project.output_files(), before);
}

#[test]
fn test_dynamic_skill_without_usage_is_exactly_one_error() {
    let project = Project::new();
    project.write(
        "src/profiles/home/config.yaml",
        &PROFILE_YAML.replace("        usage: before touching unfamiliar code\n", ""),
    );

    let errors = validation_errors(compile(&project.paths, "home", |_| {}).unwrap_err());
    assert_eq!(
        errors,
        vec![ValidationIssue::DynamicSkillWithoutUsage {
            agent: "dev".to_string(),
            skill: "research".to_string(),
        }]
    );
    project.assert_nothing_written();
}

#[test]
fn test_whitespace_usage_counts_as_missing() {
    let project = Project::new();
    project.write(
        "src/profiles/home/config.yaml",
        &PROFILE_YAML.replace("usage: when writing tests", "usage: \"   \""),
    );

    let (_, report) = prepare(&project.paths, "home").unwrap();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].agent(), Some("dev"));
}

#[test]
fn test_unknown_skill_names_agent_and_skill() {
    let project = Project::new();
    project.write(
        "src/profiles/home/config.yaml",
        &PROFILE_YAML.replace("- id: style", "- id: ghost"),
    );

    let err = compile(&project.paths, "home", |_| {}).unwrap_err();
    match err {
        CompileError::UnknownSkill { agent, skill } => {
            assert_eq!(agent, "dev");
            assert_eq!(skill, "ghost");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    project.assert_nothing_written();
}

#[test]
fn test_missing_profile_is_config_load_error() {
    let project = Project::new();
    let err = compile(&project.paths, "work", |_| {}).unwrap_err();
    match err {
        CompileError::ConfigLoad { path, .. } => {
            assert!(path.ends_with("profiles/work/config.yaml"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_duplicate_skill_id_is_config_load_error() {
    let project = Project::new();
    project.write(
        "src/skills.yaml",
        "skills:\n  style:\n    name: A\n    description: a\n  style:\n    name: B\n    description: b\n",
    );
    let err = compile(&project.paths, "home", |_| {}).unwrap_err();
    assert_eq!(err.category(), "config");
    assert!(err.to_string().contains("skills.yaml"));
}

#[test]
fn test_every_problem_reported_in_one_run() {
    let project = Project::new();
    project.remove("src/agents/qa/workflow.md");
    project.remove("src/output-formats/default.md");
    project.remove("src/skills/style/docs.md");
    project.remove("src/profiles/home/CLAUDE.md");

    let (_, report) = prepare(&project.paths, "home").unwrap();
    // qa workflow, output format x2, style file, profile document
    assert_eq!(report.errors.len(), 5, "{:#?}", report.errors);
    assert!(!report.is_valid());
}

#[test]
fn test_agent_name_with_parent_component_is_rejected() {
    let project = Project::new();
    project.write(
        "src/agents.yaml",
        &format!(
            "{}  \"../escaped\":\n    title: Escaped\n    description: Outside\n    core_prompts: developer\n    output_format: default\n",
            super::test_utils::AGENTS_YAML
        ),
    );
    project.write(
        "src/profiles/home/config.yaml",
        &format!("{PROFILE_YAML}  \"../escaped\":\n    dynamic: []\n"),
    );
    project.write("src/agents/escaped/intro.md", "Outside.\n");

    let errors = validation_errors(compile(&project.paths, "home", |_| {}).unwrap_err());
    assert_eq!(
        errors,
        vec![ValidationIssue::InvalidAgentName {
            agent: "../escaped".to_string(),
        }]
    );
    project.assert_nothing_written();
    assert!(!project.paths.out_dir.join("escaped.md").exists());
}

#[test]
fn test_skill_path_leaving_skills_dir_is_rejected() {
    let project = Project::new();
    project.write(
        "src/skills.yaml",
        &super::test_utils::SKILLS_YAML.replace("path: style/docs.md", "path: ../agents.yaml"),
    );

    let errors = validation_errors(compile(&project.paths, "home", |_| {}).unwrap_err());
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationIssue::InvalidSkillPath { agent, skill, .. } if agent == "dev" && skill == "style"
    ));
    project.assert_nothing_written();
}
