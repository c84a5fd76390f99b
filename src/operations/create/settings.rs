//! Effective configuration and option resolution
//!
//! Bundled agents are loaded strictly. Remote and `local@` templates are
//! loaded leniently and merged over their `base_template` agent, so a remote
//! template only has to state what differs.

use serde_yaml::{Mapping, Value};

use super::request::CreateRequest;
use super::resolution::ResolvedTemplate;
use crate::compose::layers::CANONICAL_AGENT_DIR;
use crate::config::template::DEFAULT_BASE_TEMPLATE;
use crate::config::validation::validate_agent_directory_name;
use crate::config::{CreateParams, TemplateConfig, load_remote_template_config, merge};
use crate::error::{Result, config as config_error, template as template_error};
use crate::library::TemplateLibrary;

pub const DEPLOYMENT_TARGETS: &[&str] = &["agent_engine", "cloud_run"];
pub const CICD_RUNNERS: &[&str] = &["google_cloud_build", "github_actions"];
pub const SESSION_TYPES: &[&str] = &["in_memory", "alloydb", "agent_engine"];
pub const DATASTORES: &[&str] = &["vertex_ai_search", "vertex_ai_vector_search", "alloydb"];

pub const DEFAULT_DEPLOYMENT_TARGET: &str = "agent_engine";
pub const DEFAULT_CICD_RUNNER: &str = "google_cloud_build";
pub const DEFAULT_SESSION_TYPE: &str = "in_memory";
pub const DEFAULT_DATASTORE: &str = "vertex_ai_search";

/// Frontend value that turns a template's frontend off
pub const NO_FRONTEND: &str = "none";

/// The configuration a run works from
#[derive(Debug, Clone)]
pub struct EffectiveTemplate {
    pub config: TemplateConfig,
    /// Bundled agent whose files form the agent overlay
    pub library_agent: String,
    /// `base_template` of a remote template, recorded in the metadata
    pub base_template: Option<String>,
}

fn mapping_of(config: &TemplateConfig) -> Mapping {
    match config.to_value() {
        Value::Mapping(mapping) => mapping,
        _ => Mapping::new(),
    }
}

/// Build the effective config of a resolved template
pub fn effective_template(
    library: &TemplateLibrary,
    resolved: &ResolvedTemplate,
) -> Result<EffectiveTemplate> {
    let fetched = match resolved {
        ResolvedTemplate::Library { name } => {
            return Ok(EffectiveTemplate {
                config: library.agent_config(name)?,
                library_agent: name.clone(),
                base_template: None,
            });
        }
        ResolvedTemplate::Remote { fetched, .. } | ResolvedTemplate::Local { fetched } => fetched,
    };

    let overlay = load_remote_template_config(fetched.path());
    let base_name = overlay
        .get("base_template")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_BASE_TEMPLATE)
        .to_string();
    if !library.has_agent(&base_name) {
        return Err(template_error::not_found(base_name));
    }

    let base = mapping_of(&library.agent_config(&base_name)?);
    let merged = merge(&base, &overlay);
    let origin = fetched.path().display().to_string();
    let config = TemplateConfig::from_mapping(&merged, &origin)?;
    tracing::debug!(base = %base_name, name = %config.name, "merged remote template config");

    Ok(EffectiveTemplate {
        config,
        library_agent: base_name.clone(),
        base_template: Some(base_name),
    })
}

/// Agent directory: CLI, then template config, then `app`
pub fn resolve_agent_directory(request: &CreateRequest, config: &TemplateConfig) -> Result<String> {
    let directory = request
        .agent_directory
        .clone()
        .or_else(|| config.settings.agent_directory.clone())
        .unwrap_or_else(|| CANONICAL_AGENT_DIR.to_string());
    validate_agent_directory_name(&directory)?;
    Ok(directory)
}

fn check_choice(option: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(config_error::invalid_option(
            option,
            value,
            format!("expected one of: {}", allowed.join(", ")),
        ))
    }
}

fn resolve_deployment_target(
    library: &TemplateLibrary,
    request: &CreateRequest,
    config: &TemplateConfig,
) -> Result<String> {
    let supported = &config.settings.deployment_targets;
    let target = match (&request.deployment_target, supported.first()) {
        (Some(target), _) => target.clone(),
        (None, Some(first)) => first.clone(),
        (None, None) => DEFAULT_DEPLOYMENT_TARGET.to_string(),
    };

    if !supported.is_empty() && !supported.contains(&target) {
        return Err(config_error::invalid_option(
            "--deployment-target",
            &target,
            format!("'{}' supports: {}", config.name, supported.join(", ")),
        ));
    }
    if !library.deployment_target(&target).is_dir() {
        return Err(config_error::invalid_option(
            "--deployment-target",
            &target,
            format!("expected one of: {}", DEPLOYMENT_TARGETS.join(", ")),
        ));
    }
    Ok(target)
}

fn resolve_session_type(request: &CreateRequest, deployment_target: &str) -> Result<Option<String>> {
    match (&request.session_type, deployment_target) {
        (Some(session), "cloud_run") => {
            check_choice("--session-type", session, SESSION_TYPES)?;
            Ok(Some(session.clone()))
        }
        (Some(session), _) => Err(config_error::invalid_option(
            "--session-type",
            session,
            "session type only applies to the cloud_run deployment target",
        )),
        (None, "cloud_run") => Ok(Some(DEFAULT_SESSION_TYPE.to_string())),
        (None, _) => Ok(None),
    }
}

fn resolve_frontend(request: &CreateRequest, config: &TemplateConfig) -> Option<String> {
    request
        .frontend_type
        .clone()
        .or_else(|| config.settings.frontend_type.clone())
        .filter(|frontend| !frontend.is_empty() && frontend != NO_FRONTEND)
}

/// Validate the requested options and fill in defaults
pub fn resolve_params(
    library: &TemplateLibrary,
    request: &CreateRequest,
    config: &TemplateConfig,
) -> Result<CreateParams> {
    let deployment_target = resolve_deployment_target(library, request, config)?;
    let session_type = resolve_session_type(request, &deployment_target)?;

    let cicd_runner = request
        .cicd_runner
        .clone()
        .unwrap_or_else(|| DEFAULT_CICD_RUNNER.to_string());
    check_choice("--cicd-runner", &cicd_runner, CICD_RUNNERS)?;

    // A datastore implies data ingestion
    let include_data_ingestion = request.include_data_ingestion
        || request.datastore.is_some()
        || config.settings.requires_data_ingestion;
    let datastore = if include_data_ingestion {
        let datastore = request
            .datastore
            .clone()
            .unwrap_or_else(|| DEFAULT_DATASTORE.to_string());
        check_choice("--datastore", &datastore, DATASTORES)?;
        Some(datastore)
    } else {
        None
    };

    Ok(CreateParams {
        deployment_target,
        session_type,
        cicd_runner,
        include_data_ingestion,
        datastore,
        frontend_type: resolve_frontend(request, config),
    })
}
