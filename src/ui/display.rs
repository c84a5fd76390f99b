//! Display functions for agents and created projects

use std::path::Path;

use console::Style;

use crate::config::CreateParams;
use crate::library::AgentSummary;

/// Print the numbered agent list used by `list` and the interactive menu
pub fn display_agent_list(agents: &[AgentSummary]) {
    if agents.is_empty() {
        println!("{}", Style::new().dim().apply_to("No agents found"));
        return;
    }
    println!("{}", Style::new().bold().apply_to("Available agents:"));
    for (index, agent) in agents.iter().enumerate() {
        println!(
            "  {}. {} {}",
            index + 1,
            Style::new().bold().cyan().apply_to(&agent.name),
            Style::new().dim().apply_to(format!("- {}", agent.description))
        );
    }
}

/// One menu line for an agent
pub fn agent_menu_label(agent: &AgentSummary) -> String {
    format!("{} - {}", agent.name, agent.description)
}

/// Print what was created and how to start
pub fn display_created(project_dir: &Path, agent_directory: &str, params: &CreateParams) {
    let bold = Style::new().bold();
    println!("  {} {}", bold.apply_to("Project:"), project_dir.display());
    println!("  {} {}", bold.apply_to("Agent directory:"), agent_directory);
    println!(
        "  {} {}",
        bold.apply_to("Deployment target:"),
        params.deployment_target
    );
    println!("  {} {}", bold.apply_to("CI/CD runner:"), params.cicd_runner);
    if let Some(ref session) = params.session_type {
        println!("  {} {}", bold.apply_to("Session type:"), session);
    }
    if params.include_data_ingestion {
        println!(
            "  {} {}",
            bold.apply_to("Datastore:"),
            params.datastore.as_deref().unwrap_or_default()
        );
    }
    println!();
    println!("{}", bold.apply_to("Next steps:"));
    println!("  cd {}", project_dir.display());
    println!("  make install && make playground");
}
