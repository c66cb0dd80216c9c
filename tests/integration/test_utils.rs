//! Shared test utilities for integration tests
//!
//! Builds a complete, valid source tree in a temp directory. Tests break it in
//! targeted ways to exercise each failure path.

use agentc::config::ProjectPaths;
use agentc::build::collect_manifest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const AGENTS_YAML: &str = r#"agents:
  dev:
    title: Developer
    description: Implements features
    model: opus
    tools: [Read, Write, Edit]
    core_prompts: developer
    ending_prompts: developer
    output_format: default
  qa:
    title: QA
    description: Tests features
    tools: [Read, Bash]
    core_prompts: developer
    output_format: default
  unused:
    title: Unused
    description: Defined but never compiled
    core_prompts: developer
    output_format: default
"#;

pub const SKILLS_YAML: &str = r#"skills:
  style:
    path: style/docs.md
    name: Style Guide
    description: House coding style
  research:
    name: Research
    description: Look things up
  testing:
    path: testing/SKILL.md
    name: Testing
    description: Test conventions
"#;

pub const PROFILE_YAML: &str = r#"name: home
description: Personal setup
claude_md: CLAUDE.md
core_prompt_sets:
  developer: [core-principles, investigation]
ending_prompt_sets:
  developer: [context-management]
agent_skills:
  dev:
    precompiled:
      - id: style
        usage: always
    dynamic:
      - id: research
        usage: before touching unfamiliar code
      - id: testing
        usage: when writing tests
  qa:
    precompiled:
      - id: testing
        usage: always
"#;

pub const STYLE_SKILL: &str = "# Style Guide\n\nUse four spaces.\nNever abbreviate names.\n";
pub const TESTING_SKILL: &str = "# Testing\n\nOne assertion per behavior.\n";

/// A fixture project rooted in a temp directory.
pub struct Project {
    _temp: TempDir,
    pub paths: ProjectPaths,
}

impl Project {
    /// A valid project: profile `home` compiles `dev` and `qa`.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let paths = ProjectPaths::from_root(temp.path());
        let project = Self { _temp: temp, paths };

        project.write("src/agents.yaml", AGENTS_YAML);
        project.write("src/skills.yaml", SKILLS_YAML);
        project.write("src/profiles/home/config.yaml", PROFILE_YAML);
        project.write("src/profiles/home/CLAUDE.md", "# Home\n\nProject instructions.\n");

        project.write("src/agents/dev/intro.md", "You are the developer.\n");
        project.write("src/agents/dev/workflow.md", "1. Read\n2. Change\n3. Verify\n");
        project.write("src/agents/dev/examples.md", "Example: add a flag.\n");
        project.write("src/agents/dev/critical-requirements.md", "Never skip tests.\n");
        project.write("src/agents/dev/critical-reminders.md", "Re-read the task.\n");
        project.write("src/agents/qa/intro.md", "You are QA.\n");
        project.write("src/agents/qa/workflow.md", "Run the suite.\n");

        project.write("src/core-prompts/core-principles.md", "CORE PRINCIPLES\n");
        project.write("src/core-prompts/investigation.md", "INVESTIGATE FIRST\n");
        project.write("src/core-prompts/context-management.md", "MANAGE CONTEXT\n");
        project.write("src/output-formats/default.md", "Reply in markdown.\n");

        project.write("src/skills/style/docs.md", STYLE_SKILL);
        project.write("src/skills/testing/SKILL.md", TESTING_SKILL);
        project
    }

    pub fn root(&self) -> &Path {
        &self.paths.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.path(relative)).unwrap();
    }

    /// Contents of a file under the output directory.
    pub fn output(&self, relative: &str) -> String {
        fs::read_to_string(self.paths.out_dir.join(relative)).unwrap()
    }

    /// Relative paths of every file under the output directory.
    pub fn output_files(&self) -> Vec<String> {
        collect_manifest(&self.paths.out_dir)
            .unwrap()
            .into_iter()
            .map(|entry| entry.path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    /// Nothing was produced: no output tree and no profile document.
    pub fn assert_nothing_written(&self) {
        assert!(
            self.output_files().is_empty(),
            "unexpected output: {:?}",
            self.output_files()
        );
        assert!(!self.path("CLAUDE.md").exists());
    }
}
