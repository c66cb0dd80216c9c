//! Source layout and its resolved, absolute form.

use crate::assemble::AgentFragment;
use crate::error::CompileError;
use crate::source::PROFILE_CONFIG_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Where sources live, relative to the project root.
///
/// `agents_file`, `skills_file`, `profiles_dir`, `agents_dir`, `prompts_dir`,
/// `output_formats_dir` and `skills_dir` are relative to `src_dir`; `src_dir`
/// and `out_dir` are relative to the root. Absolute values are used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLayout {
    #[serde(default = "default_src_dir")]
    pub src_dir: PathBuf,
    #[serde(default = "default_agents_file")]
    pub agents_file: PathBuf,
    #[serde(default = "default_skills_file")]
    pub skills_file: PathBuf,
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: PathBuf,
    /// Per-agent fragment directories (`<agents_dir>/<agent>/intro.md`, ...)
    #[serde(default = "default_agents_dir")]
    pub agents_dir: PathBuf,
    /// Shared prompt-set fragments
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: PathBuf,
    #[serde(default = "default_output_formats_dir")]
    pub output_formats_dir: PathBuf,
    /// Skill files; skill `path` values are relative to this directory
    #[serde(default = "default_skills_dir")]
    pub skills_dir: PathBuf,
    /// Compiled plugin output; the profile document lands in its parent
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_agents_file() -> PathBuf {
    PathBuf::from("agents.yaml")
}

fn default_skills_file() -> PathBuf {
    PathBuf::from("skills.yaml")
}

fn default_profiles_dir() -> PathBuf {
    PathBuf::from("profiles")
}

fn default_agents_dir() -> PathBuf {
    PathBuf::from("agents")
}

fn default_prompts_dir() -> PathBuf {
    PathBuf::from("core-prompts")
}

fn default_output_formats_dir() -> PathBuf {
    PathBuf::from("output-formats")
}

fn default_skills_dir() -> PathBuf {
    PathBuf::from("skills")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".claude")
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            agents_file: default_agents_file(),
            skills_file: default_skills_file(),
            profiles_dir: default_profiles_dir(),
            agents_dir: default_agents_dir(),
            prompts_dir: default_prompts_dir(),
            output_formats_dir: default_output_formats_dir(),
            skills_dir: default_skills_dir(),
            out_dir: default_out_dir(),
        }
    }
}

impl SourceLayout {
    /// Resolve against a project root, canonicalizing the root first.
    pub fn resolve(&self, root: &Path) -> Result<ProjectPaths, CompileError> {
        let canonical = dunce::canonicalize(root).map_err(|e| {
            CompileError::Config(format!(
                "Project root {} is not accessible: {}",
                root.display(),
                e
            ))
        })?;
        Ok(self.resolve_unchecked(&canonical))
    }

    /// Resolve against a root without touching the filesystem.
    pub fn resolve_unchecked(&self, root: &Path) -> ProjectPaths {
        let src_dir = root.join(&self.src_dir);
        ProjectPaths {
            root: root.to_path_buf(),
            agents_file: src_dir.join(&self.agents_file),
            skills_file: src_dir.join(&self.skills_file),
            profiles_dir: src_dir.join(&self.profiles_dir),
            agents_dir: src_dir.join(&self.agents_dir),
            prompts_dir: src_dir.join(&self.prompts_dir),
            output_formats_dir: src_dir.join(&self.output_formats_dir),
            skills_dir: src_dir.join(&self.skills_dir),
            out_dir: root.join(&self.out_dir),
            src_dir,
        }
    }
}

/// Absolute locations for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub src_dir: PathBuf,
    pub agents_file: PathBuf,
    pub skills_file: PathBuf,
    pub profiles_dir: PathBuf,
    pub agents_dir: PathBuf,
    pub prompts_dir: PathBuf,
    pub output_formats_dir: PathBuf,
    pub skills_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl ProjectPaths {
    /// Default layout under `root`.
    pub fn from_root(root: &Path) -> Self {
        SourceLayout::default().resolve_unchecked(root)
    }

    pub fn profile_dir(&self, profile: &str) -> PathBuf {
        self.profiles_dir.join(profile)
    }

    pub fn profile_config(&self, profile: &str) -> PathBuf {
        self.profile_dir(profile).join(PROFILE_CONFIG_FILE)
    }

    /// Path of the profile's top-level document (`claude_md`).
    pub fn profile_document(&self, profile: &str, document: &str) -> PathBuf {
        self.profile_dir(profile).join(document)
    }

    pub fn agent_fragment(&self, agent: &str, fragment: AgentFragment) -> PathBuf {
        self.agents_dir.join(agent).join(fragment.file_name())
    }

    /// Shared prompt-set fragment; `.md` is appended when the name has no extension.
    pub fn prompt_fragment(&self, fragment: &str) -> PathBuf {
        self.prompts_dir.join(markdown_file_name(fragment))
    }

    pub fn output_format(&self, name: &str) -> PathBuf {
        self.output_formats_dir.join(markdown_file_name(name))
    }

    pub fn skill_source(&self, skill_path: &str) -> PathBuf {
        self.skills_dir.join(skill_path)
    }
}

/// True when `name` is exactly one normal path component.
pub fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// True when joining `path` onto a directory stays inside that directory.
pub fn is_contained_path(path: &str) -> bool {
    let mut normal = false;
    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) => normal = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    normal
}

fn markdown_file_name(name: &str) -> String {
    if Path::new(name).extension().is_some() {
        name.to_string()
    } else {
        format!("{}.md", name)
    }
}
