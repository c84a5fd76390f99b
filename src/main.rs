//! agent-starter-pack - scaffold GCP agent projects
//!
//! A command line tool generating production-ready AI agent projects from a
//! bundled template library, local template directories and remote Git
//! repositories.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod common;
mod compose;
mod config;
mod error;
mod fetch;
mod git;
mod library;
mod operations;
mod path_utils;
mod render;
mod source;
mod temp;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Install the log subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Create(args) => commands::create::run(cli.templates_dir, args, cli.verbose),
        Commands::List(args) => commands::list::run(cli.templates_dir, &args),
        Commands::Recreate(args) => commands::recreate::run(cli.templates_dir, &args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
