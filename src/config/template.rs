//! Typed template configuration
//!
//! A template config names the template, describes it and carries the
//! `settings` that drive scaffolding. Keys this crate does not know about
//! are kept in residual maps so they still reach the render context.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Result, config as config_error};

/// Base template assumed by remote templates that do not name one
pub const DEFAULT_BASE_TEMPLATE: &str = "adk_base";

/// Template configuration (`.template/templateconfig.yaml` or the
/// `[tool.agent-starter-pack]` table of `pyproject.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub example_question: String,

    /// Library agent this template builds on (remote templates only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_template: Option<String>,

    #[serde(default)]
    pub settings: TemplateSettings,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// The `settings` section of a template config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSettings {
    #[serde(default)]
    pub deployment_targets: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_directory: Option<String>,

    #[serde(default)]
    pub requires_data_ingestion: bool,

    #[serde(default)]
    pub requires_session: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend_type: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub commands: CommandOverrides,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Makefile command overrides and additions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandOverrides {
    /// Replace the recipe of existing Makefile targets
    #[serde(rename = "override", default)]
    pub override_: Mapping,

    /// Targets appended to the Makefile
    #[serde(default)]
    pub extra: Mapping,
}

impl CommandOverrides {
    pub fn is_empty(&self) -> bool {
        self.override_.is_empty() && self.extra.is_empty()
    }
}

impl TemplateConfig {
    /// Convert a (possibly merged) config mapping into the typed form
    ///
    /// `origin` names where the mapping came from, for error messages.
    pub fn from_mapping(mapping: &Mapping, origin: &str) -> Result<Self> {
        serde_yaml::from_value(Value::Mapping(mapping.clone()))
            .map_err(|e| config_error::parse_failed(origin, e.to_string()))
    }

    /// The config as a generic value, for the render context
    pub fn to_value(&self) -> Value {
        serde_yaml::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_adk(&self) -> bool {
        self.settings.tags.iter().any(|t| t == "adk")
    }

    pub fn is_a2a(&self) -> bool {
        self.settings.tags.iter().any(|t| t == "a2a")
    }
}
