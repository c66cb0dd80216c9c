//! Renderer
//!
//! Turns an assembled [`RenderContext`] into the compiled agent document:
//! YAML frontmatter followed by the `templates/agent.md` body.

use crate::assemble::RenderContext;
use crate::error::CompileError;
use askama::Template;
use serde::Serialize;

/// Frontmatter the host reads from a compiled agent.
#[derive(Debug, Serialize)]
struct AgentFrontmatter<'a> {
    name: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(skip_serializing_if = "String::is_empty")]
    tools: String,
}

struct PreloadedSkill<'a> {
    id: &'a str,
    name: &'a str,
    content: &'a str,
}

#[derive(Template)]
#[template(path = "agent.md", escape = "none")]
struct AgentTemplate<'a> {
    frontmatter: &'a str,
    ctx: &'a RenderContext,
    preloaded: Vec<PreloadedSkill<'a>>,
}

/// Render the frontmatter block (without `---` fences).
pub fn render_frontmatter(ctx: &RenderContext) -> Result<String, CompileError> {
    let frontmatter = AgentFrontmatter {
        name: &ctx.name,
        description: &ctx.description,
        model: ctx.model.as_deref(),
        tools: ctx.tools.join(", "),
    };
    serde_yaml_ng::to_string(&frontmatter).map_err(|e| CompileError::Render {
        agent: ctx.name.clone(),
        message: format!("frontmatter: {}", e),
    })
}

/// Render one agent document. Output always ends with exactly one newline.
pub fn render_agent(ctx: &RenderContext) -> Result<String, CompileError> {
    let frontmatter = render_frontmatter(ctx)?;
    let preloaded = ctx
        .precompiled_skills
        .iter()
        .map(|skill| PreloadedSkill {
            id: &skill.id,
            name: &skill.name,
            content: skill.content.as_deref().unwrap_or_default(),
        })
        .collect();

    let template = AgentTemplate {
        frontmatter: &frontmatter,
        ctx,
        preloaded,
    };
    let rendered = template.render().map_err(|e| CompileError::Render {
        agent: ctx.name.clone(),
        message: e.to_string(),
    })?;

    let mut document = rendered.trim_end().to_string();
    document.push('\n');
    Ok(document)
}
