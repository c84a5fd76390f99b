//! Template library resource locator
//!
//! The library is a directory tree:
//!
//! ```text
//! templates/
//! ├── base_template/            # files every project gets
//! ├── deployment_targets/<t>/   # per deployment target
//! ├── data_ingestion/           # optional pipeline
//! ├── frontends/<f>/            # optional UIs
//! ├── agents/<name>/            # agent overlays, each with .template/templateconfig.yaml
//! └── resources/docs/adk-cheatsheet.md
//! ```
//!
//! Lookup order: an explicit path (CLI flag or environment), `templates/`
//! next to the executable, then the `templates/` directory shipped with the
//! crate sources.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::loader::{TEMPLATE_CONFIG_PATH, load_template_config};
use crate::config::TemplateConfig;
use crate::error::{Result, fs as fs_error, template as template_error};
use crate::path_utils::resolve_user_path;

/// Environment variable overriding the library location
pub const TEMPLATES_ENV: &str = "AGENT_STARTER_PACK_TEMPLATES";

const CHEATSHEET_PATH: &str = "resources/docs/adk-cheatsheet.md";

/// One bundled agent, as shown by `list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentSummary {
    pub name: String,
    pub description: String,
}

/// A located template library
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    root: PathBuf,
}

fn is_library(path: &Path) -> bool {
    path.join("base_template").is_dir() && path.join("agents").is_dir()
}

impl TemplateLibrary {
    /// Open a library at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = resolve_user_path(&root.into());
        if !is_library(&root) {
            return Err(template_error::library_not_found(&root));
        }
        tracing::debug!(root = %root.display(), "using template library");
        Ok(Self { root })
    }

    /// Locate the library, preferring an explicit path
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::open(path);
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates")));
        let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates");

        for candidate in beside_exe.into_iter().chain([bundled]) {
            if is_library(&candidate) {
                return Self::open(candidate);
            }
        }
        Err(template_error::library_not_found(Path::new("templates")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_template(&self) -> PathBuf {
        self.root.join("base_template")
    }

    pub fn deployment_target(&self, target: &str) -> PathBuf {
        self.root.join("deployment_targets").join(target)
    }

    pub fn data_ingestion(&self) -> PathBuf {
        self.root.join("data_ingestion")
    }

    pub fn frontend(&self, frontend_type: &str) -> PathBuf {
        self.root.join("frontends").join(frontend_type)
    }

    pub fn agent(&self, name: &str) -> PathBuf {
        self.root.join("agents").join(name)
    }

    /// Whether `name` is a bundled agent
    pub fn has_agent(&self, name: &str) -> bool {
        !name.contains(['/', '\\']) && self.agent(name).join(TEMPLATE_CONFIG_PATH).is_file()
    }

    /// Strictly load the config of a bundled agent
    pub fn agent_config(&self, name: &str) -> Result<TemplateConfig> {
        load_template_config(&self.agent(name).join(TEMPLATE_CONFIG_PATH))
    }

    /// Contents of the ADK cheatsheet, empty when the library has none
    pub fn cheatsheet(&self) -> String {
        fs::read_to_string(self.root.join(CHEATSHEET_PATH)).unwrap_or_default()
    }

    /// Names of the bundled agents, sorted
    pub fn agent_names(&self) -> Result<Vec<String>> {
        let agents_dir = self.root.join("agents");
        let entries = fs::read_dir(&agents_dir).map_err(|e| fs_error::read_failed(&agents_dir, &e))?;

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| entry.file_name().to_str().map(ToString::to_string))
            .filter(|name| self.has_agent(name))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Bundled agents with their descriptions, sorted by name
    pub fn list_agents(&self) -> Result<Vec<AgentSummary>> {
        self.agent_names()?
            .into_iter()
            .map(|name| {
                let config = self.agent_config(&name)?;
                Ok(AgentSummary {
                    name,
                    description: config.description,
                })
            })
            .collect()
    }
}
