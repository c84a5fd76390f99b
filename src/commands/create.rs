//! Create command implementation
//!
//! Resolves missing choices (prompting when interactive), then runs the
//! create operation and prints a summary.

use std::path::PathBuf;

use crate::cli::CreateArgs;
use crate::compose::AgentExclusions;
use crate::config::template::DEFAULT_BASE_TEMPLATE;
use crate::error::Result;
use crate::library::TemplateLibrary;
use crate::operations::create::resolution::library_agent_name;
use crate::operations::create::{CreateContext, CreateOperation, CreateRequest};
use crate::ui::display::display_created;
use crate::ui::{ConsoleReporter, Reporter, SilentReporter};

use super::menu;

impl From<CreateArgs> for CreateRequest {
    fn from(args: CreateArgs) -> Self {
        Self {
            project_name: args.project_name,
            agent: args
                .agent
                .unwrap_or_else(|| DEFAULT_BASE_TEMPLATE.to_string()),
            deployment_target: args.deployment_target,
            cicd_runner: args.cicd_runner,
            session_type: args.session_type,
            include_data_ingestion: args.include_data_ingestion,
            datastore: args.datastore,
            frontend_type: args.frontend_type,
            agent_directory: args.agent_directory,
            output_dir: args.output_dir,
            in_folder: args.in_folder,
        }
    }
}

/// Fill in choices the user left open
fn prompt_missing(
    library: &TemplateLibrary,
    agent_given: bool,
    request: &mut CreateRequest,
) -> Result<()> {
    if !agent_given {
        request.agent = menu::select_agent(&library.list_agents()?)?;
    }
    if request.deployment_target.is_none() {
        if let Some(name) = library_agent_name(library, &request.agent)? {
            let targets = library.agent_config(&name)?.settings.deployment_targets;
            request.deployment_target =
                menu::select_option("Select a deployment target", &targets)?;
        }
    }
    Ok(())
}

/// Run create command
pub fn run(templates_dir: Option<PathBuf>, args: CreateArgs, verbose: bool) -> Result<()> {
    let library = TemplateLibrary::locate(templates_dir)?;
    let interactive = !args.auto_approve && menu::is_interactive();
    let agent_given = args.agent.is_some();

    let mut request = CreateRequest::from(args);
    if interactive {
        prompt_missing(&library, agent_given, &mut request)?;
    }

    let exclusions = AgentExclusions::builtin();
    let mut reporter: Box<dyn Reporter> = if verbose {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new())
    };

    let mut operation = CreateOperation::new(CreateContext {
        library: &library,
        exclusions: &exclusions,
        reporter: reporter.as_mut(),
    });
    let outcome = operation.execute(&request)?;

    display_created(
        &outcome.destination,
        &outcome.agent_directory,
        &outcome.metadata.create_params,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    fn parse(args: &[&str]) -> CreateArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Create(args) => args,
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn test_request_from_args() {
        let request = CreateRequest::from(parse(&[
            "agent-starter-pack",
            "create",
            "my-agent",
            "--frontend",
            "none",
            "-o",
            "/tmp/out",
        ]));
        assert_eq!(request.project_name, "my-agent");
        assert_eq!(request.agent, DEFAULT_BASE_TEMPLATE);
        assert_eq!(request.frontend_type.as_deref(), Some("none"));
        assert_eq!(request.destination(), PathBuf::from("/tmp/out/my-agent"));
    }
}
