//! Command implementations for the agent-starter-pack CLI

pub mod completions;
pub mod create;
pub mod list;
pub mod menu;
pub mod recreate;
pub mod version;
