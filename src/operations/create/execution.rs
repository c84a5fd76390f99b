//! The create pipeline
//!
//! validate → resolve → configure → compose → render → stamp → place.
//! Composition and rendering happen in sandboxes; the destination is only
//! written once everything before it succeeded.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use super::CreateContext;
use super::placement::{check_destination, place_project};
use super::request::CreateRequest;
use super::resolution::{ResolvedTemplate, resolve_template};
use super::settings::{effective_template, resolve_agent_directory, resolve_params};
use crate::compose::{ComposeReport, LayerInputs, LayerKind, LayerPlan, PassSettings};
use crate::config::metadata::stamp_pyproject;
use crate::config::validation::validate_project_name;
use crate::config::{CreateParams, ProjectMetadata};
use crate::error::Result;
use crate::path_utils::resolve_user_path;
use crate::render::{RenderContext, render_project};
use crate::source::agent_spec::LOCAL_PREFIX;
use crate::temp::Sandbox;

/// Tool version recorded in generated projects
pub const ASP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// What a successful run produced
#[derive(Debug)]
pub struct CreateOutcome {
    pub destination: PathBuf,
    pub agent_directory: String,
    pub metadata: ProjectMetadata,
    /// `unused_*` entries removed after rendering
    pub removed: Vec<String>,
    pub placement: ComposeReport,
}

/// Agent spec to record, stable across working directories and list order
fn recorded_spec(request: &CreateRequest, resolved: &ResolvedTemplate) -> String {
    match resolved {
        ResolvedTemplate::Library { name } => name.clone(),
        ResolvedTemplate::Local { .. } => match request.agent.trim().strip_prefix(LOCAL_PREFIX) {
            Some(path) => format!("{LOCAL_PREFIX}{}", resolve_user_path(Path::new(path)).display()),
            None => request.agent.trim().to_string(),
        },
        ResolvedTemplate::Remote { .. } => request.agent.trim().to_string(),
    }
}

fn generated_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Run the whole pipeline for one request
pub fn execute(ctx: &mut CreateContext<'_>, request: &CreateRequest) -> Result<CreateOutcome> {
    validate_project_name(&request.project_name)?;
    let destination = request.destination();
    check_destination(&destination, request.in_folder)?;

    let resolved = resolve_template(ctx.library, &request.agent, &mut *ctx.reporter)?;
    let effective = effective_template(ctx.library, &resolved)?;
    let config = &effective.config;
    let agent_directory = resolve_agent_directory(request, config)?;
    let params: CreateParams = resolve_params(ctx.library, request, config)?;
    tracing::debug!(?params, agent_directory = %agent_directory, "resolved options");

    ctx.reporter.step("Composing project");
    let staging = Sandbox::new("compose")?;
    let plan = LayerPlan::new(
        ctx.library,
        &LayerInputs {
            deployment_target: &params.deployment_target,
            include_data_ingestion: params.include_data_ingestion,
            frontend_type: params.frontend_type.as_deref(),
            library_agent: Some(effective.library_agent.as_str()),
            remote_dir: resolved.staged_dir(),
        },
    );
    for layer in plan.layers() {
        if layer.kind == LayerKind::Frontend && !layer.source.is_dir() {
            ctx.reporter
                .warn(&format!("{} not found: {}", layer.kind.label(), layer.source.display()));
        }
    }
    plan.compose(
        staging.path(),
        &PassSettings {
            agent_directory: &agent_directory,
            agent_name: &config.name,
            exclusions: ctx.exclusions,
        },
    )?;

    let agent = recorded_spec(request, &resolved);
    let generated_at = generated_now();
    let context = RenderContext::new(&request.project_name, config)
        .with_agent_directory(&agent_directory)
        .with_choices(&params)
        .with_cheatsheet(ctx.library.cheatsheet())
        .with_provenance(&agent, ASP_VERSION, &generated_at);

    ctx.reporter.step("Rendering project");
    let rendered = render_project(staging.path(), &context, &config.settings.commands)?;

    let metadata = ProjectMetadata {
        name: request.project_name.clone(),
        agent,
        base_template: effective.base_template.clone(),
        agent_directory: agent_directory.clone(),
        asp_version: ASP_VERSION.to_string(),
        generated_at,
        create_params: params,
    };
    let pyproject = rendered.path().join("pyproject.toml");
    if pyproject.is_file() {
        stamp_pyproject(&pyproject, &metadata)?;
    }

    ctx.reporter.step("Writing project");
    let placement = place_project(rendered.path(), &destination, request.in_folder)?;

    Ok(CreateOutcome {
        destination,
        agent_directory,
        metadata,
        removed: rendered.removed.clone(),
        placement,
    })
}
