//! Makefile command overrides
//!
//! Templates adjust the generated `Makefile` through
//! `settings.commands.override` (replace a target's recipe) and
//! `settings.commands.extra` (add targets). A command value is one of:
//!
//! ```yaml
//! test: "uv run pytest"                       # plain recipe
//! dev:
//!   command: "uv run adk web"
//!   description: "Launch the dev UI"          # rendered as a comment
//! deploy:
//!   agent_engine: "uv run deploy_engine"      # per deployment target
//!   cloud_run: "gcloud run deploy"
//! ```
//!
//! `command` may itself be keyed by deployment target. A target with no
//! command for the current deployment target is left alone.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::config::template::CommandOverrides;
use crate::error::{Result, fs as fs_error};

/// A resolved Makefile command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeCommand {
    pub command: String,
    pub description: Option<String>,
}

/// Resolve a command value for a deployment target
pub fn resolve_command(value: &Value, deployment_target: &str) -> Option<MakeCommand> {
    match value {
        Value::String(command) => Some(MakeCommand {
            command: command.clone(),
            description: None,
        }),
        Value::Mapping(map) => match map.get("command") {
            Some(command) => {
                let mut resolved = resolve_command(command, deployment_target)?;
                if let Some(description) = map.get("description").and_then(Value::as_str) {
                    resolved.description = Some(description.to_string());
                }
                Some(resolved)
            }
            None => map
                .get(deployment_target)
                .and_then(|v| resolve_command(v, deployment_target)),
        },
        _ => None,
    }
}

/// Name of the target a line declares, if any
fn target_name(line: &str) -> Option<&str> {
    if line.starts_with(['\t', ' ', '#', '.']) {
        return None;
    }
    let (name, rest) = line.split_once(':')?;
    // `a := b` and `a ::= b` are assignments
    if rest.starts_with('=') || rest.starts_with(":=") || name.contains('=') {
        return None;
    }
    let name = name.trim();
    (!name.is_empty() && !name.contains(char::is_whitespace)).then_some(name)
}

fn recipe_lines(command: &str) -> Vec<String> {
    command.lines().map(|line| format!("\t{line}")).collect()
}

fn replace_recipe(lines: &mut Vec<String>, target: &str, command: &str) -> bool {
    let Some(start) = lines.iter().position(|l| target_name(l) == Some(target)) else {
        return false;
    };
    let recipe_start = start + 1;
    let recipe_end = lines[recipe_start..]
        .iter()
        .position(|l| !l.starts_with('\t'))
        .map_or(lines.len(), |offset| recipe_start + offset);

    lines.splice(recipe_start..recipe_end, recipe_lines(command));
    true
}

fn append_target(lines: &mut Vec<String>, target: &str, command: &MakeCommand) {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    if let Some(description) = &command.description {
        lines.push(format!("# {description}"));
    }
    lines.push(format!("{target}:"));
    lines.extend(recipe_lines(&command.command));
}

fn apply_group(lines: &mut Vec<String>, group: &Mapping, deployment_target: &str) {
    for (name, value) in group {
        let Some(target) = name.as_str() else {
            continue;
        };
        let Some(command) = resolve_command(value, deployment_target) else {
            tracing::debug!(target, deployment_target, "no command for deployment target");
            continue;
        };
        if !replace_recipe(lines, target, &command.command) {
            append_target(lines, target, &command);
        }
    }
}

/// Apply overrides, then extra targets, to Makefile text
///
/// Overrides of missing targets and extras that already exist are handled
/// alike: an existing target gets its recipe replaced, a new one is appended.
pub fn merge_commands(makefile: &str, commands: &CommandOverrides, deployment_target: &str) -> String {
    let mut lines: Vec<String> = makefile.lines().map(ToString::to_string).collect();
    apply_group(&mut lines, &commands.override_, deployment_target);
    apply_group(&mut lines, &commands.extra, deployment_target);

    let mut merged = lines.join("\n");
    merged.push('\n');
    merged
}

/// Rewrite the Makefile at `path` with the command overrides applied
pub fn apply_to_file(path: &Path, commands: &CommandOverrides, deployment_target: &str) -> Result<()> {
    if commands.is_empty() || !path.is_file() {
        return Ok(());
    }
    let text = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, &e))?;
    let merged = merge_commands(&text, commands, deployment_target);
    fs::write(path, merged).map_err(|e| fs_error::write_failed(path, &e))
}
