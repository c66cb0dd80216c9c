//! Property tests for reference resolution: purity and the compile set

use agentc::resolve::{resolve_model, resolve_skill};
use agentc::source::{
    AgentCatalog, AgentDefinition, AgentSkillRefs, ProfileConfig, SkillCatalog, SkillDefinition,
    SkillReference, Sources,
};
use indexmap::IndexMap;
use proptest::prelude::*;

fn definition() -> AgentDefinition {
    AgentDefinition {
        title: "T".to_string(),
        description: "D".to_string(),
        model: None,
        tools: vec![],
        core_prompts: "base".to_string(),
        ending_prompts: None,
        output_format: "default".to_string(),
    }
}

fn catalog(ids: &[String]) -> SkillCatalog {
    SkillCatalog::from_definitions(ids.iter().map(|id| SkillDefinition {
        id: id.clone(),
        path: Some(format!("{id}.md")),
        name: id.to_uppercase(),
        description: format!("about {id}"),
    }))
}

fn profile(agents: &[String], skill: &str) -> ProfileConfig {
    ProfileConfig {
        name: "prop".to_string(),
        description: None,
        claude_md: "CLAUDE.md".to_string(),
        core_prompt_sets: IndexMap::new(),
        ending_prompt_sets: IndexMap::new(),
        agent_skills: agents
            .iter()
            .map(|agent| {
                (
                    agent.clone(),
                    AgentSkillRefs {
                        precompiled: vec![],
                        dynamic: vec![SkillReference {
                            id: skill.to_string(),
                            usage: Some(format!("{agent} usage")),
                        }],
                    },
                )
            })
            .collect(),
    }
}

proptest! {
    #[test]
    fn resolving_twice_yields_identical_skills(
        ids in prop::collection::btree_set("[a-z]{1,10}", 1..8),
        usage in prop::option::of(".{0,40}"),
        pick in any::<prop::sample::Index>(),
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let catalog = catalog(&ids);
        let reference = SkillReference {
            id: pick.get(&ids).clone(),
            usage,
        };

        let first = resolve_skill("agent", &reference, &catalog).unwrap();
        let second = resolve_skill("agent", &reference, &catalog).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first.usage, &reference.usage);
    }

    #[test]
    fn compile_set_is_exactly_agent_skills_keys(
        defined in prop::collection::btree_set("[a-z]{1,8}", 1..10),
        keep in prop::collection::vec(any::<bool>(), 10),
    ) {
        let defined: Vec<String> = defined.into_iter().collect();
        // Reverse so profile order differs from agents.yaml order.
        let selected: Vec<String> = defined
            .iter()
            .zip(keep.iter())
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| name.clone())
            .rev()
            .collect();

        let sources = Sources {
            agents: AgentCatalog::from_definitions(
                defined.iter().map(|name| (name.clone(), definition())).collect(),
            ),
            skills: catalog(&["shared".to_string()]),
            profile: profile(&selected, "shared"),
        };

        let model = resolve_model(&sources).unwrap();
        let names: Vec<&str> = model.agent_names();
        let expected: Vec<&str> = selected.iter().map(String::as_str).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn unknown_skill_always_fails(id in "[a-z]{1,10}") {
        let catalog = catalog(&[format!("{id}-known")]);
        let reference = SkillReference { id, usage: None };
        prop_assert!(resolve_skill("agent", &reference, &catalog).is_err());
    }
}
