//! Operations module
//!
//! This module provides the high-level operations behind the CLI commands:
//! - CreateOperation: the whole project generation workflow
//!
//! The operation coordinates with:
//! - Source: agent spec parsing (from source module)
//! - Fetch: remote and `local@` template staging (from fetch module)
//! - Config: loading, merging and validating template configs
//! - Compose: layered file composition
//! - Render: template rendering and post-render fixups
//! - UI: Progress reporting (from ui module)

pub mod create;

pub use create::{CreateContext, CreateOperation, CreateRequest};
