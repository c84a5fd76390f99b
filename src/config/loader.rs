//! Template configuration loading
//!
//! Two flavours:
//! - Lenient loaders for remote and user-supplied templates: a missing or
//!   broken file yields an empty mapping and a warning, never an error
//! - The strict [`load_template_config`] for bundled library agents, whose
//!   configs must be complete

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::template::TemplateConfig;
use crate::error::{Result, config as config_error, fs as fs_error};

/// Location of a template's YAML config, relative to the template directory
pub const TEMPLATE_CONFIG_PATH: &str = ".template/templateconfig.yaml";

/// Table of `pyproject.toml` holding template settings and project metadata
pub const PYPROJECT_TABLE: &str = "agent-starter-pack";

/// Fields a library template config must declare
const REQUIRED_FIELDS: &[&str] = &["name", "description", "settings"];

/// Convert a TOML value into the YAML value model
///
/// Datetimes become their RFC 3339 string form.
pub fn toml_to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(f.into()),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(toml_to_value).collect()),
        toml::Value::Table(table) => Value::Mapping(toml_table_to_mapping(table)),
    }
}

fn toml_table_to_mapping(table: toml::Table) -> Mapping {
    table
        .into_iter()
        .map(|(k, v)| (Value::String(k), toml_to_value(v)))
        .collect()
}

/// Parse config text as TOML (`.toml` files) or YAML (everything else)
fn parse_config_text(path: &Path, text: &str) -> Result<Mapping> {
    let origin = path.display().to_string();
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");

    if is_toml {
        let table: toml::Table =
            toml::from_str(text).map_err(|e| config_error::parse_failed(&origin, e.to_string()))?;
        return Ok(toml_table_to_mapping(table));
    }

    match serde_yaml::from_str::<Value>(text)
        .map_err(|e| config_error::parse_failed(&origin, e.to_string()))?
    {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(config_error::parse_failed(
            origin,
            "top level must be a mapping",
        )),
    }
}

fn read_config_file(path: &Path) -> Result<Mapping> {
    let text = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, &e))?;
    parse_config_text(path, &text)
}

/// Load a config file leniently
///
/// Missing file: empty mapping. Unreadable or malformed file: empty mapping
/// plus a warning.
pub fn load_config_mapping(path: &Path) -> Mapping {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file");
        return Mapping::new();
    }
    match read_config_file(path) {
        Ok(mapping) => mapping,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Mapping::new()
        }
    }
}

/// The `[tool.agent-starter-pack]` table of `<dir>/pyproject.toml`
///
/// `name` and `description` default to those of the `[project]` table.
/// Returns an empty mapping when the file or table is absent or broken.
pub fn load_pyproject_settings(dir: &Path) -> Mapping {
    let pyproject = load_config_mapping(&dir.join("pyproject.toml"));

    let Some(Value::Mapping(mut settings)) = pyproject
        .get("tool")
        .and_then(|tool| tool.get(PYPROJECT_TABLE))
        .cloned()
    else {
        return Mapping::new();
    };

    if let Some(Value::Mapping(project)) = pyproject.get("project") {
        for field in ["name", "description"] {
            if !settings.contains_key(field) {
                if let Some(value) = project.get(field) {
                    settings.insert(Value::String(field.to_string()), value.clone());
                }
            }
        }
    }
    settings
}

/// Config of a remote or `local@` template directory, leniently
///
/// The `pyproject.toml` table wins; `.template/templateconfig.yaml` is the
/// fallback.
pub fn load_remote_template_config(dir: &Path) -> Mapping {
    let from_pyproject = load_pyproject_settings(dir);
    if !from_pyproject.is_empty() {
        tracing::debug!(dir = %dir.display(), "template config from pyproject.toml");
        return from_pyproject;
    }
    load_config_mapping(&dir.join(TEMPLATE_CONFIG_PATH))
}

/// Load a library template config strictly
///
/// Fails with `ConfigMissingFields` naming every absent required field.
pub fn load_template_config(path: &Path) -> Result<TemplateConfig> {
    if !path.is_file() {
        return Err(fs_error::not_found(path));
    }
    let mapping = read_config_file(path)?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !mapping.contains_key(**field))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(config_error::missing_fields(
            path.display().to_string(),
            missing,
        ));
    }

    TemplateConfig::from_mapping(&mapping, &path.display().to_string())
}
