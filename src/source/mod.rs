//! Template source handling
//!
//! This module handles parsing agent spec strings into template sources:
//! - Local directories: `local@./my-template`, `local@/abs/path`
//! - Curated ADK samples: `adk@data-science`
//! - GitHub web UI URLs: `https://github.com/org/repo/tree/main/path`
//! - Git URLs: `https://host/org/repo[.git][/path][@ref]`
//! - GitHub shorthand: `org/repo[/path][@ref]`
//!
//! ## Module Organization
//!
//! - `agent_spec.rs`: `AgentSpec` classification and `parse_agent_spec`
//! - `remote.rs`: `RemoteTemplateSpec` value object

pub mod agent_spec;
pub mod remote;

pub use agent_spec::{AgentSpec, parse_agent_spec};
pub use remote::RemoteTemplateSpec;
