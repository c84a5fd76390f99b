//! Name validation
//!
//! Both checks run before any file is copied, so a bad name never leaves a
//! half-written project behind.

use crate::error::{Result, config as config_error};

/// Longest accepted project name; GCP resource names are derived from it
pub const MAX_PROJECT_NAME_LEN: usize = 26;

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Check that the agent directory name is importable as a Python package
pub fn validate_agent_directory_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(config_error::invalid_agent_directory(
            name,
            "name must not be empty",
        ));
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(config_error::invalid_agent_directory(
            name,
            "must start with a letter or underscore",
        ));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        let reason = if bad == '-' {
            "hyphens are not allowed in Python package names; use underscores".to_string()
        } else {
            format!("character '{bad}' is not allowed; use letters, digits and underscores")
        };
        return Err(config_error::invalid_agent_directory(name, reason));
    }
    if PYTHON_KEYWORDS.contains(&name) {
        return Err(config_error::invalid_agent_directory(
            name,
            "is a reserved Python keyword",
        ));
    }
    Ok(())
}

/// Check that the project name is usable as a directory and resource name
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(config_error::invalid_project_name(
            name,
            "name must not be empty",
        ));
    }
    if name.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(config_error::invalid_project_name(
            name,
            format!("must be at most {MAX_PROJECT_NAME_LEN} characters"),
        ));
    }
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(config_error::invalid_project_name(
            name,
            "must start with a lowercase letter",
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
    {
        return Err(config_error::invalid_project_name(
            name,
            format!("character '{bad}' is not allowed; use lowercase letters, digits, '-' and '_'"),
        ));
    }
    Ok(())
}
