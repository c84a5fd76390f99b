//! Template configuration handling
//!
//! This module contains:
//! - [`loader`]: reading template configs from YAML and `pyproject.toml`
//! - [`template`]: the typed `TemplateConfig` with a residual map
//! - [`merge`]: deep merge of base and override configs
//! - [`validation`]: agent directory and project name rules
//! - [`metadata`]: the `[tool.agent-starter-pack]` record of a generated project

pub mod loader;
pub mod merge;
pub mod metadata;
pub mod template;
pub mod validation;

pub use loader::{load_config_mapping, load_remote_template_config, load_template_config};
pub use merge::merge;
pub use metadata::{CreateParams, ProjectMetadata};
pub use template::{TemplateConfig, TemplateSettings};
