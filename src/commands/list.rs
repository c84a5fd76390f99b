//! List command implementation
//!
//! This command lists the bundled agents with their descriptions, in the
//! order `create -a <index>` uses.

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::error::{Result, fs as fs_error};
use crate::library::{AgentSummary, TemplateLibrary};
use crate::ui::display::display_agent_list;

/// Run list command
pub fn run(templates_dir: Option<PathBuf>, args: &ListArgs) -> Result<()> {
    let library = TemplateLibrary::locate(templates_dir)?;
    let agents = library.list_agents()?;

    if args.json {
        println!("{}", agents_json(&agents)?);
    } else {
        display_agent_list(&agents);
    }
    Ok(())
}

fn agents_json(agents: &[AgentSummary]) -> Result<String> {
    serde_json::to_string_pretty(agents).map_err(|e| fs_error::io_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agents_json() {
        let agents = vec![AgentSummary {
            name: "adk_base".to_string(),
            description: "A base ReAct agent".to_string(),
        }];
        let json: serde_json::Value = serde_json::from_str(&agents_json(&agents).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "adk_base");
        assert_eq!(json[0]["description"], "A base ReAct agent");
    }
}
