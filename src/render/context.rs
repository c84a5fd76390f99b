//! Render context
//!
//! Templates see every value under the `cookiecutter` namespace, e.g.
//! `{{ cookiecutter.project_name }}` or
//! `{% if cookiecutter.deployment_target == 'cloud_run' %}`.
//! Absent optional choices are empty strings so they test false and render
//! as nothing.

use serde::Serialize;

use crate::config::{CreateParams, TemplateConfig};

/// Values available to templates
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderContext {
    pub project_name: String,
    pub agent_name: String,
    pub agent_directory: String,
    pub agent_description: String,
    pub example_question: String,
    pub deployment_target: String,
    pub cicd_runner: String,
    pub session_type: String,
    pub include_data_ingestion: bool,
    pub datastore_type: String,
    pub frontend_type: String,
    pub tags: Vec<String>,
    pub is_adk: bool,
    pub is_a2a: bool,
    /// The effective `settings` section, unknown keys included
    pub settings: serde_yaml::Value,
    pub adk_cheatsheet: String,
    /// Agent spec recorded in the project metadata
    pub agent_spec: String,
    pub package_version: String,
    pub generated_at: String,
}

impl RenderContext {
    /// Start a context from the project name and effective template config
    pub fn new(project_name: &str, config: &TemplateConfig) -> Self {
        let settings = serde_yaml::to_value(&config.settings).unwrap_or(serde_yaml::Value::Null);
        Self {
            project_name: project_name.to_string(),
            agent_name: config.name.clone(),
            agent_description: config.description.clone(),
            example_question: config.example_question.clone(),
            tags: config.settings.tags.clone(),
            is_adk: config.is_adk(),
            is_a2a: config.is_a2a(),
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_agent_directory(mut self, agent_directory: &str) -> Self {
        self.agent_directory = agent_directory.to_string();
        self
    }

    /// Record the creation choices
    #[must_use]
    pub fn with_choices(mut self, params: &CreateParams) -> Self {
        self.deployment_target = params.deployment_target.clone();
        self.cicd_runner = params.cicd_runner.clone();
        self.session_type = params.session_type.clone().unwrap_or_default();
        self.include_data_ingestion = params.include_data_ingestion;
        self.datastore_type = params.datastore.clone().unwrap_or_default();
        self.frontend_type = params.frontend_type.clone().unwrap_or_default();
        self
    }

    #[must_use]
    pub fn with_cheatsheet(mut self, cheatsheet: String) -> Self {
        self.adk_cheatsheet = cheatsheet;
        self
    }

    /// Record where the project came from and when
    #[must_use]
    pub fn with_provenance(mut self, agent_spec: &str, version: &str, generated_at: &str) -> Self {
        self.agent_spec = agent_spec.to_string();
        self.package_version = version.to_string();
        self.generated_at = generated_at.to_string();
        self
    }

    /// The context as a template value, wrapped in its namespace
    pub fn to_template_value(&self) -> minijinja::Value {
        minijinja::context! { cookiecutter => minijinja::Value::from_serialize(self) }
    }
}
