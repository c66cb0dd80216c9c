//! Integration tests for project configuration (agentc.toml)

use super::test_utils::Project;
use agentc::cli::{Commands, RunContext};
use std::fs;

#[test]
fn test_project_file_moves_output_directory() {
    let project = Project::new();
    project.write("agentc.toml", "[paths]\nout_dir = \"dist/plugin\"\n");

    let context = RunContext::new(project.root().to_path_buf(), None).unwrap();
    context
        .execute(&Commands::Compile {
            profile: "home".to_string(),
        })
        .unwrap();

    assert!(project.path("dist/plugin/agents/dev.md").exists());
    assert!(project.path("dist/CLAUDE.md").exists());
    assert!(!project.paths.out_dir.exists());
}

#[test]
fn test_explicit_config_relocates_sources() {
    let project = Project::new();
    fs::rename(project.path("src"), project.path("content")).unwrap();
    let config = project.path("custom.toml");
    fs::write(&config, "[paths]\nsrc_dir = \"content\"\n").unwrap();

    let context = RunContext::new(project.root().to_path_buf(), Some(config)).unwrap();
    assert!(context.paths().agents_file.ends_with("content/agents.yaml"));
    context
        .execute(&Commands::Compile {
            profile: "home".to_string(),
        })
        .unwrap();
    assert!(project.paths.out_dir.join("agents/qa.md").exists());
}

#[test]
fn test_missing_explicit_config_is_error() {
    let project = Project::new();
    let result = RunContext::new(
        project.root().to_path_buf(),
        Some(project.path("absent.toml")),
    );
    assert!(result.is_err());
}
