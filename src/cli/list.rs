use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List bundled agents:\n    agent-starter-pack list\n\n\
                  Print them as JSON:\n    agent-starter-pack list --json")]
pub struct ListArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
