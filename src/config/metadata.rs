//! Generated project metadata
//!
//! Every generated `pyproject.toml` carries a `[tool.agent-starter-pack]`
//! table recording the agent spec and every creation choice. `recreate`
//! reads it back to reproduce the same scaffolding.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::PYPROJECT_TABLE;
use crate::error::{Result, config as config_error, fs as fs_error};

/// Creation choices, stored as `[tool.agent-starter-pack.create_params]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParams {
    pub deployment_target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,

    pub cicd_runner: String,

    #[serde(default)]
    pub include_data_ingestion: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datastore: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend_type: Option<String>,
}

/// The `[tool.agent-starter-pack]` record of a generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,

    /// Agent spec the project was created from
    pub agent: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_template: Option<String>,

    pub agent_directory: String,

    pub asp_version: String,

    pub generated_at: String,

    pub create_params: CreateParams,
}

/// Scalar fields, serialized ahead of the `create_params` sub-table
#[derive(Serialize)]
struct MetadataFields<'a> {
    name: &'a str,
    agent: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_template: Option<&'a str>,
    agent_directory: &'a str,
    asp_version: &'a str,
    generated_at: &'a str,
}

#[derive(Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Option<ToolTable>,
}

#[derive(Deserialize)]
struct ToolTable {
    #[serde(rename = "agent-starter-pack")]
    starter_pack: Option<ProjectMetadata>,
}

impl ProjectMetadata {
    /// TOML text of the metadata tables, headers included
    pub fn to_toml(&self) -> Result<String> {
        let fields = MetadataFields {
            name: &self.name,
            agent: &self.agent,
            base_template: self.base_template.as_deref(),
            agent_directory: &self.agent_directory,
            asp_version: &self.asp_version,
            generated_at: &self.generated_at,
        };
        let head = toml::to_string(&fields)
            .map_err(|e| config_error::invalid(format!("cannot serialize metadata: {e}")))?;
        let params = toml::to_string(&self.create_params)
            .map_err(|e| config_error::invalid(format!("cannot serialize metadata: {e}")))?;

        Ok(format!(
            "[tool.{PYPROJECT_TABLE}]\n{head}\n[tool.{PYPROJECT_TABLE}.create_params]\n{params}"
        ))
    }
}

/// Whether a TOML line is a header of the metadata table or one of its children
fn is_metadata_header(header: &str) -> bool {
    let name: String = header
        .trim_start_matches('[')
        .split(']')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '"' && *c != '\'')
        .collect();
    let table = format!("tool.{PYPROJECT_TABLE}");
    name == table || name.starts_with(&format!("{table}."))
}

/// Replace the metadata tables of a `pyproject.toml` text
///
/// Existing `[tool.agent-starter-pack...]` tables are dropped and the new
/// record is appended; the rest of the file is kept as written.
pub fn replace_metadata(pyproject: &str, metadata: &ProjectMetadata) -> Result<String> {
    let mut kept = Vec::new();
    let mut in_metadata = false;
    for line in pyproject.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('[') {
            in_metadata = is_metadata_header(trimmed);
        }
        if !in_metadata {
            kept.push(line);
        }
    }

    let body = kept.join("\n");
    let body = body.trim_end();
    let table = metadata.to_toml()?;
    if body.is_empty() {
        Ok(table)
    } else {
        Ok(format!("{body}\n\n{table}"))
    }
}

/// Write the metadata record into an existing `pyproject.toml`
pub fn stamp_pyproject(path: &Path, metadata: &ProjectMetadata) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, &e))?;
    let updated = replace_metadata(&text, metadata)?;
    fs::write(path, updated).map_err(|e| fs_error::write_failed(path, &e))
}

/// Read the metadata record of a generated project
pub fn read_project_metadata(project_dir: &Path) -> Result<ProjectMetadata> {
    let path = project_dir.join("pyproject.toml");
    if !path.is_file() {
        return Err(fs_error::not_found(&path));
    }
    let text = fs::read_to_string(&path).map_err(|e| fs_error::read_failed(&path, &e))?;
    let pyproject: PyProject = toml::from_str(&text)
        .map_err(|e| config_error::parse_failed(path.display().to_string(), e.to_string()))?;

    pyproject
        .tool
        .and_then(|tool| tool.starter_pack)
        .ok_or_else(|| {
            config_error::invalid(format!(
                "{} has no [tool.{PYPROJECT_TABLE}] table; was it generated by agent-starter-pack?",
                path.display()
            ))
        })
}
