//! Error types and handling for agent-starter-pack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Template configuration and validation errors
//! - [`fs`]: File system errors
//! - [`git`]: Git fetch errors
//! - [`template`]: Template resolution and rendering errors

pub mod config;
pub mod fs;
pub mod git;
pub mod template;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for scaffolding operations
#[derive(Error, Diagnostic, Debug)]
pub enum StarterPackError {
    // Template resolution errors
    #[error("Template '{spec}' not found")]
    #[diagnostic(
        code(agent_starter_pack::template::not_found),
        help(
            "Use a bundled agent name (see 'agent-starter-pack list'), a list index, \
             local@<path>, adk@<sample>, org/repo[/path][@ref] or a full Git URL"
        )
    )]
    TemplateNotFound { spec: String },

    #[error("Template path not found after fetch: {path}")]
    #[diagnostic(
        code(agent_starter_pack::template::path_not_found),
        help("Check the sub-path of the template inside the repository")
    )]
    TemplatePathNotFound { path: String },

    #[error("Failed to render '{path}'")]
    #[diagnostic(code(agent_starter_pack::template::render_failed))]
    RenderFailed {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Template library not found at {path}")]
    #[diagnostic(
        code(agent_starter_pack::template::library_not_found),
        help("Pass --templates-dir or set AGENT_STARTER_PACK_TEMPLATES")
    )]
    LibraryNotFound { path: String },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(agent_starter_pack::git::clone_failed),
        help("Check that URL is correct and you have access to repository")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Git ref '{git_ref}' not found in {url}")]
    #[diagnostic(
        code(agent_starter_pack::git::ref_not_found),
        help("Use an existing branch or tag name, e.g. org/repo/path@main")
    )]
    GitRefNotFound { url: String, git_ref: String },

    #[error("Failed to checkout commit '{sha}': {reason}")]
    #[diagnostic(code(agent_starter_pack::git::checkout_failed))]
    GitCheckoutFailed { sha: String, reason: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(agent_starter_pack::git::operation_failed))]
    GitOperationFailed { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(agent_starter_pack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Configuration file {path} is missing required fields: {}", fields.join(", "))]
    #[diagnostic(
        code(agent_starter_pack::config::missing_fields),
        help("Template configs must declare 'name', 'description' and 'settings'")
    )]
    ConfigMissingFields { path: String, fields: Vec<String> },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(agent_starter_pack::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid agent directory '{name}': {reason}")]
    #[diagnostic(
        code(agent_starter_pack::config::invalid_agent_directory),
        help("The agent directory becomes a Python package; use letters, digits and underscores, e.g. my_agent")
    )]
    InvalidAgentDirectory { name: String, reason: String },

    #[error("Invalid project name '{name}': {reason}")]
    #[diagnostic(code(agent_starter_pack::config::invalid_project_name))]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid value '{value}' for {option}: {reason}")]
    #[diagnostic(code(agent_starter_pack::config::invalid_option))]
    InvalidOption {
        option: String,
        value: String,
        reason: String,
    },

    // File system errors
    #[error("Destination already exists: {path}")]
    #[diagnostic(
        code(agent_starter_pack::fs::destination_exists),
        help("Choose another project name or output directory, or use --in-folder")
    )]
    DestinationExists { path: String },

    #[error("File not found: {path}")]
    #[diagnostic(code(agent_starter_pack::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(agent_starter_pack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(agent_starter_pack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agent_starter_pack::fs::io_error))]
    IoError { message: String },

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(agent_starter_pack::ui::prompt_failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for StarterPackError {
    fn from(err: std::io::Error) -> Self {
        StarterPackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for StarterPackError {
    fn from(err: serde_yaml::Error) -> Self {
        StarterPackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for StarterPackError {
    fn from(err: git2::Error) -> Self {
        StarterPackError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

impl From<inquire::InquireError> for StarterPackError {
    fn from(err: inquire::InquireError) -> Self {
        StarterPackError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StarterPackError>;
