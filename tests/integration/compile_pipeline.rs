//! Integration tests for a successful compile

use super::test_utils::{Project, STYLE_SKILL, TESTING_SKILL};
use agentc::build::{compile, ArtifactKind};
use std::fs;

#[test]
fn test_compiles_exactly_the_agent_skills_keys() {
    let project = Project::new();
    let report = compile(&project.paths, "home", |_| {}).unwrap();

    let agents: Vec<&str> = report
        .artifacts
        .iter()
        .filter(|a| a.kind == ArtifactKind::Agent)
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(agents, vec!["dev", "qa"]);
    assert!(!project.paths.out_dir.join("agents/unused.md").exists());
}

#[test]
fn test_precompiled_skill_is_embedded_and_written_verbatim() {
    let project = Project::new();
    compile(&project.paths, "home", |_| {}).unwrap();

    let dev = project.output("agents/dev.md");
    assert!(dev.contains(STYLE_SKILL), "style content missing:\n{dev}");
    assert_eq!(project.output("skills/style/SKILL.md"), STYLE_SKILL);
    assert_eq!(
        fs::read(project.paths.out_dir.join("skills/style/SKILL.md")).unwrap(),
        fs::read(project.path("src/skills/style/docs.md")).unwrap()
    );
}

#[test]
fn test_dynamic_skills_are_referenced_not_embedded() {
    let project = Project::new();
    compile(&project.paths, "home", |_| {}).unwrap();

    let dev = project.output("agents/dev.md");
    assert!(dev.contains("`research`"));
    assert!(dev.contains("Use when: before touching unfamiliar code"));
    assert!(!dev.contains(TESTING_SKILL), "dynamic skill content must not be embedded");

    // qa preloads the same skill dev loads dynamically.
    assert!(project.output("agents/qa.md").contains(TESTING_SKILL));
}

#[test]
fn test_skill_union_is_deduplicated() {
    let project = Project::new();
    let report = compile(&project.paths, "home", |_| {}).unwrap();

    assert_eq!(report.count(ArtifactKind::Skill), 2);
    assert_eq!(
        project.output_files(),
        vec![
            "agents/dev.md",
            "agents/qa.md",
            "skills/style/SKILL.md",
            "skills/testing/SKILL.md",
        ]
    );
}

#[test]
fn test_profile_document_copied_beside_output() {
    let project = Project::new();
    compile(&project.paths, "home", |_| {}).unwrap();

    assert_eq!(
        fs::read_to_string(project.path("CLAUDE.md")).unwrap(),
        "# Home\n\nProject instructions.\n"
    );
}

#[test]
fn test_agent_document_layout() {
    let project = Project::new();
    compile(&project.paths, "home", |_| {}).unwrap();

    let dev = project.output("agents/dev.md");
    assert!(dev.starts_with("---\nname: dev\ndescription: Implements features\nmodel: opus\n"));
    assert!(dev.contains("tools: Read, Write, Edit\n"));
    assert!(dev.contains("---\n\n# Developer\n\nYou are the developer."));
    assert!(dev.contains("CORE PRINCIPLES\n\nINVESTIGATE FIRST"));
    assert!(dev.contains("MANAGE CONTEXT"));
    assert!(dev.ends_with("</critical_reminders>\n"));

    let qa = project.output("agents/qa.md");
    assert!(!qa.contains("model:"));
    assert!(qa.contains("_No examples defined for this agent._"));
    assert!(!qa.contains("MANAGE CONTEXT"), "qa names no ending prompt set");
}

#[test]
fn test_warnings_do_not_block_and_are_reported() {
    let project = Project::new();
    let report = compile(&project.paths, "home", |_| {}).unwrap();
    // research has no path; qa lacks three optional fragments
    assert_eq!(report.warnings.len(), 4);
}

#[test]
fn test_callback_sees_every_artifact() {
    let project = Project::new();
    let mut seen = Vec::new();
    let report = compile(&project.paths, "home", |outcome| {
        seen.push((outcome.kind, outcome.name.clone()));
    })
    .unwrap();

    assert_eq!(seen.len(), report.artifacts.len());
    assert_eq!(seen.last().unwrap().0, ArtifactKind::ProfileDocument);
}
