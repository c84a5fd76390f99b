use clap::Parser;
use std::path::PathBuf;

/// Arguments for the recreate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Regenerate a project next to the original:\n    agent-starter-pack recreate ./my-agent -o ./fresh\n\n\
                  Regenerate under another name:\n    agent-starter-pack recreate ./my-agent --project-name my-agent-v2")]
pub struct RecreateArgs {
    /// Project generated by agent-starter-pack (reads [tool.agent-starter-pack] from its pyproject.toml)
    pub project_dir: PathBuf,

    /// Directory the project is recreated in
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Use another project name
    #[arg(long)]
    pub project_name: Option<String>,
}
