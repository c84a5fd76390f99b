//! Recreate command implementation
//!
//! Reads the `[tool.agent-starter-pack]` record of an existing project and
//! feeds it back through the create operation.

use std::path::PathBuf;

use crate::cli::RecreateArgs;
use crate::compose::AgentExclusions;
use crate::config::metadata::read_project_metadata;
use crate::error::Result;
use crate::library::TemplateLibrary;
use crate::operations::create::{CreateContext, CreateOperation, CreateRequest};
use crate::path_utils::resolve_user_path;
use crate::ui::display::display_created;
use crate::ui::{ConsoleReporter, Reporter, SilentReporter};

/// Build the request recorded in a project
pub fn recreate_request(args: &RecreateArgs) -> Result<CreateRequest> {
    let project_dir = resolve_user_path(&args.project_dir);
    let metadata = read_project_metadata(&project_dir)?;
    tracing::debug!(agent = %metadata.agent, generated_at = %metadata.generated_at, "recreating");

    let mut request = CreateRequest::from_metadata(&metadata, &args.output_dir);
    if let Some(ref name) = args.project_name {
        request.project_name.clone_from(name);
    }
    Ok(request)
}

/// Run recreate command
pub fn run(templates_dir: Option<PathBuf>, args: &RecreateArgs, verbose: bool) -> Result<()> {
    let library = TemplateLibrary::locate(templates_dir)?;
    let request = recreate_request(args)?;

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
