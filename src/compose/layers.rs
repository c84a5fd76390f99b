//! Composition pass order
//!
//! Passes run in a fixed order and later passes win:
//!
//! 1. base template
//! 2. deployment target
//! 3. data ingestion, into `data_ingestion/` (optional)
//! 4. frontend, into `frontend/` (optional)
//! 5. library agent overlay
//! 6. remote or `local@` template overlay (optional)
//!
//! Every pass overwrites, renames `app` to the agent directory and protects
//! `README.md` at its root.

use std::path::{Path, PathBuf};

use super::{ComposeOptions, ComposeReport, ExclusionRule, compose_dir};
use crate::error::{Result, fs as fs_error};
use crate::library::TemplateLibrary;

/// Directory name templates use for the agent package
pub const CANONICAL_AGENT_DIR: &str = "app";

/// Files protected at the root of every pass
const PROTECTED_IN_PASSES: &[&str] = &["README.md"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Base,
    DeploymentTarget,
    DataIngestion,
    Frontend,
    Agent,
    Remote,
}

impl LayerKind {
    pub fn label(self) -> &'static str {
        match self {
            LayerKind::Base => "base template",
            LayerKind::DeploymentTarget => "deployment target",
            LayerKind::DataIngestion => "data ingestion",
            LayerKind::Frontend => "frontend",
            LayerKind::Agent => "agent",
            LayerKind::Remote => "remote template",
        }
    }

    /// Project-relative directory the layer is copied into
    pub fn target_subdir(self) -> &'static str {
        match self {
            LayerKind::DataIngestion => "data_ingestion",
            LayerKind::Frontend => "frontend",
            _ => "",
        }
    }
}

/// One composition pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub kind: LayerKind,
    pub source: PathBuf,
}

/// What decides which layers a project gets
#[derive(Debug, Clone, Default)]
pub struct LayerInputs<'a> {
    pub deployment_target: &'a str,
    pub include_data_ingestion: bool,
    pub frontend_type: Option<&'a str>,
    /// Library agent providing the agent overlay
    pub library_agent: Option<&'a str>,
    /// Staged remote or `local@` template
    pub remote_dir: Option<&'a Path>,
}

/// Per-run settings shared by every pass
pub struct PassSettings<'a> {
    pub agent_directory: &'a str,
    /// Name exclusion rules are looked up by
    pub agent_name: &'a str,
    pub exclusions: &'a dyn ExclusionRule,
}

/// The ordered passes of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerPlan {
    layers: Vec<Layer>,
}

impl LayerPlan {
    pub fn new(library: &TemplateLibrary, inputs: &LayerInputs<'_>) -> Self {
        let mut layers = vec![
            Layer {
                kind: LayerKind::Base,
                source: library.base_template(),
            },
            Layer {
                kind: LayerKind::DeploymentTarget,
                source: library.deployment_target(inputs.deployment_target),
            },
        ];
        if inputs.include_data_ingestion {
            layers.push(Layer {
                kind: LayerKind::DataIngestion,
                source: library.data_ingestion(),
            });
        }
        if let Some(frontend) = inputs.frontend_type {
            layers.push(Layer {
                kind: LayerKind::Frontend,
                source: library.frontend(frontend),
            });
        }
        if let Some(agent) = inputs.library_agent {
            layers.push(Layer {
                kind: LayerKind::Agent,
                source: library.agent(agent),
            });
        }
        if let Some(remote) = inputs.remote_dir {
            layers.push(Layer {
                kind: LayerKind::Remote,
                source: remote.to_path_buf(),
            });
        }
        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Run every pass into `staging`
    ///
    /// A missing frontend directory is skipped with a warning; any other
    /// missing layer is an error.
    pub fn compose(&self, staging: &Path, settings: &PassSettings<'_>) -> Result<ComposeReport> {
        let mut report = ComposeReport::default();

        for layer in &self.layers {
            if !layer.source.is_dir() {
                if layer.kind == LayerKind::Frontend {
                    tracing::warn!(path = %layer.source.display(), "frontend not found, skipping");
                    continue;
                }
                return Err(fs_error::not_found(&layer.source));
            }

            let subdir = layer.kind.target_subdir();
            let destination = if subdir.is_empty() {
                staging.to_path_buf()
            } else {
                staging.join(subdir)
            };
            let options = ComposeOptions {
                overwrite: true,
                protected: PROTECTED_IN_PASSES.iter().map(ToString::to_string).collect(),
                renames: vec![(
                    CANONICAL_AGENT_DIR.to_string(),
                    settings.agent_directory.to_string(),
                )],
                exclusions: Some((settings.agent_name, settings.exclusions)),
            };

            tracing::debug!(layer = layer.kind.label(), source = %layer.source.display(), "composing");
            let pass = compose_dir(&layer.source, &destination, &options)?;
            report.absorb(pass, subdir);
        }

        Ok(report)
    }
}
