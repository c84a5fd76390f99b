//! Interactive prompts
//!
//! Prompts only run when both stdin and stdout are terminals and `-y` was
//! not given; otherwise callers fall back to defaults.

use std::io::IsTerminal;

use inquire::Select;

use crate::error::{Result, config as config_error};
use crate::library::AgentSummary;
use crate::ui::display::agent_menu_label;

/// Whether prompting is possible at all
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && console::Term::stdout().is_term()
}

/// Let the user pick a bundled agent
pub fn select_agent(agents: &[AgentSummary]) -> Result<String> {
    if agents.is_empty() {
        return Err(config_error::invalid("the template library has no agents"));
    }
    let items: Vec<String> = agents.iter().map(agent_menu_label).collect();
    let choice = Select::new("Select an agent", items)
        .with_help_message("↑↓ to move, ENTER to select, ESC to cancel")
        .raw_prompt()?;

    agents
        .get(choice.index)
        .map(|agent| agent.name.clone())
        .ok_or_else(|| config_error::invalid("agent selection out of range"))
}

/// Let the user pick one of `options`; a single option is returned as is
pub fn select_option(message: &str, options: &[String]) -> Result<Option<String>> {
    match options {
        [] => Ok(None),
        [only] => Ok(Some(only.clone())),
        _ => Ok(Some(Select::new(message, options.to_vec()).prompt()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option_without_choice() {
        assert_eq!(select_option("Deployment target", &[]).unwrap(), None);
        assert_eq!(
            select_option("Deployment target", &["cloud_run".to_string()]).unwrap(),
            Some("cloud_run".to_string())
        );
    }

    #[test]
    fn test_select_agent_requires_agents() {
        assert!(select_agent(&[]).is_err());
    }
}
