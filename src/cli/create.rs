use clap::Parser;
use std::path::PathBuf;

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create from a bundled agent with defaults:\n    agent-starter-pack create my-agent -a adk_base -y\n\n\
                  Deploy to Cloud Run with AlloyDB sessions:\n    agent-starter-pack create my-agent -a adk_base -d cloud_run --session-type alloydb\n\n\
                  Use a remote template:\n    agent-starter-pack create my-agent -a https://github.com/org/repo/tree/main/agents/rag\n\n\
                  Add agent files to the current directory:\n    agent-starter-pack create my-agent -a adk_base --in-folder")]
pub struct CreateArgs {
    /// Project name (lowercase letters, digits, '-' and '_', at most 26 characters)
    pub project_name: String,

    /// Agent: bundled name, list index, local@<path>, adk@<sample>, org/repo[/path][@ref] or a Git URL
    #[arg(long, short = 'a')]
    pub agent: Option<String>,

    /// Deployment target (agent_engine, cloud_run)
    #[arg(long, short = 'd')]
    pub deployment_target: Option<String>,

    /// CI/CD runner (google_cloud_build, github_actions)
    #[arg(long)]
    pub cicd_runner: Option<String>,

    /// Session store for cloud_run (in_memory, alloydb, agent_engine)
    #[arg(long)]
    pub session_type: Option<String>,

    /// Include the data ingestion pipeline
    #[arg(long, short = 'i')]
    pub include_data_ingestion: bool,

    /// Datastore for data ingestion (vertex_ai_search, vertex_ai_vector_search, alloydb)
    #[arg(long, alias = "ds")]
    pub datastore: Option<String>,

    /// Frontend type ('none' disables the template's frontend)
    #[arg(long = "frontend")]
    pub frontend_type: Option<String>,

    /// Name of the agent package directory (default: template setting or 'app')
    #[arg(long)]
    pub agent_directory: Option<String>,

    /// Directory the project is created in
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Write into the output directory itself, keeping an existing README.md and pyproject.toml
    #[arg(long)]
    pub in_folder: bool,

    /// Skip prompts and use defaults
    #[arg(long, short = 'y')]
    pub auto_approve: bool,
}
