//! Agent-specific exclusions
//!
//! Some agents must not receive certain files from the shared layers (e.g.
//! `live_api` ships its own test utilities). Rules are registered per agent
//! as wax globs over forward-slash paths relative to the pass source.

use std::collections::BTreeMap;

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, config as config_error};

/// Decides whether a path is left out of the project for a given agent
pub trait ExclusionRule {
    /// `relative_path` uses forward slashes and is relative to the pass source
    fn excludes(&self, agent: &str, relative_path: &str) -> bool;
}

/// (agent, glob) pairs every registry starts with
const BUILTIN_RULES: &[(&str, &str)] = &[("live_api", "tests/unit/test_utils/**")];

struct AgentGlob {
    pattern: String,
    glob: Glob<'static>,
}

impl AgentGlob {
    fn matches(&self, relative_path: &str) -> bool {
        if self.glob.matched(&CandidatePath::from(relative_path)).is_some() {
            return true;
        }
        // `dir/**` also covers `dir` itself, so the directory is never created
        self.pattern
            .strip_suffix("/**")
            .is_some_and(|dir| relative_path == dir)
    }
}

/// Registry of per-agent exclusion globs
#[derive(Default)]
pub struct AgentExclusions {
    rules: BTreeMap<String, Vec<AgentGlob>>,
}

impl AgentExclusions {
    /// Registry with the built-in rules
    pub fn builtin() -> Self {
        let mut exclusions = Self::default();
        for (agent, pattern) in BUILTIN_RULES {
            if let Err(e) = exclusions.register(agent, pattern) {
                tracing::warn!(agent, pattern, error = %e, "skipping exclusion rule");
            }
        }
        exclusions
    }

    /// Exclude paths matching `pattern` when scaffolding `agent`
    pub fn register(&mut self, agent: &str, pattern: &str) -> Result<()> {
        let glob = Glob::new(pattern)
            .map_err(|e| config_error::invalid(format!("invalid exclusion glob '{pattern}': {e}")))?
            .into_owned();
        self.rules.entry(agent.to_string()).or_default().push(AgentGlob {
            pattern: pattern.to_string(),
            glob,
        });
        Ok(())
    }

    /// Patterns registered for `agent`
    pub fn patterns(&self, agent: &str) -> Vec<&str> {
        self.rules
            .get(agent)
            .map(|globs| globs.iter().map(|g| g.pattern.as_str()).collect())
            .unwrap_or_default()
    }
}

impl ExclusionRule for AgentExclusions {
    fn excludes(&self, agent: &str, relative_path: &str) -> bool {
        self.rules
            .get(agent)
            .is_some_and(|globs| globs.iter().any(|g| g.matches(relative_path)))
    }
}
