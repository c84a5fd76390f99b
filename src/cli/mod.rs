//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - create: Create command arguments
//! - list: List command arguments
//! - recreate: Recreate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::library::TEMPLATES_ENV;

pub mod completions;
pub mod create;
pub mod list;
pub mod recreate;

pub use completions::CompletionsArgs;
pub use create::CreateArgs;
pub use list::ListArgs;
pub use recreate::RecreateArgs;

/// agent-starter-pack - scaffold GCP agent projects
///
/// Generate production-ready agent projects from bundled, local and remote templates.
#[derive(Parser, Debug)]
#[command(
    name = "agent-starter-pack",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold production-ready agent projects for Google Cloud",
    long_about = "agent-starter-pack generates agent projects (agent code, deployment \
                  Terraform, CI/CD pipelines, tests) from a bundled template library, \
                  local template directories or remote Git repositories.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  agent-starter-pack create my-agent                          \x1b[90m# Pick an agent interactively\x1b[0m\n   \
                  agent-starter-pack create my-agent -a adk_base -y           \x1b[90m# Bundled agent, defaults\x1b[0m\n   \
                  agent-starter-pack create my-agent -a adk@data-science      \x1b[90m# Curated ADK sample\x1b[0m\n   \
                  agent-starter-pack create my-agent -a org/repo/path@main    \x1b[90m# Remote template\x1b[0m\n   \
                  agent-starter-pack create my-agent -a local@./my-template   \x1b[90m# Local template\x1b[0m\n   \
                  agent-starter-pack list                                     \x1b[90m# List bundled agents\x1b[0m\n   \
                  agent-starter-pack recreate ./my-agent -o ./regenerated     \x1b[90m# Reproduce a project\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Template library directory (defaults to the bundled library)
    #[arg(long, global = true, env = TEMPLATES_ENV)]
    pub templates_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new agent project
    Create(CreateArgs),

    /// List bundled agents
    List(ListArgs),

    /// Regenerate a project from its recorded metadata
    Recreate(RecreateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["agent-starter-pack", "list", "--json"]).unwrap();
        match cli.command {
            Commands::List(args) => assert!(args.json),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_create() {
        let cli = Cli::try_parse_from([
            "agent-starter-pack",
            "create",
            "my-agent",
            "-a",
            "adk@data-science",
            "-d",
            "cloud_run",
            "--session-type",
            "alloydb",
            "-i",
            "--ds",
            "vertex_ai_search",
            "--agent-directory",
            "my_agent",
            "-o",
            "/tmp/out",
            "--in-folder",
            "-y",
        ])
        .unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.project_name, "my-agent");
                assert_eq!(args.agent.as_deref(), Some("adk@data-science"));
                assert_eq!(args.deployment_target.as_deref(), Some("cloud_run"));
                assert_eq!(args.session_type.as_deref(), Some("alloydb"));
                assert!(args.include_data_ingestion);
                assert_eq!(args.datastore.as_deref(), Some("vertex_ai_search"));
                assert_eq!(args.agent_directory.as_deref(), Some("my_agent"));
                assert_eq!(args.output_dir, PathBuf::from("/tmp/out"));
                assert!(args.in_folder);
                assert!(args.auto_approve);
            }
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn test_cli_create_defaults() {
        let cli = Cli::try_parse_from(["agent-starter-pack", "create", "my-agent"]).unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.agent, None);
                assert_eq!(args.output_dir, PathBuf::from("."));
                assert!(!args.auto_approve);
            }
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn test_cli_parsing_recreate() {
        let cli = Cli::try_parse_from([
            "agent-starter-pack",
            "recreate",
            "./my-agent",
            "-o",
            "/tmp/again",
            "--project-name",
            "renamed",
        ])
        .unwrap();
        match cli.command {
            Commands::Recreate(args) => {
                assert_eq!(args.project_dir, PathBuf::from("./my-agent"));
                assert_eq!(args.output_dir, PathBuf::from("/tmp/again"));
                assert_eq!(args.project_name.as_deref(), Some("renamed"));
            }
            _ => panic!("Expected Recreate command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["agent-starter-pack", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "agent-starter-pack",
            "-v",
            "--templates-dir",
            "/tmp/templates",
            "list",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.templates_dir, Some(PathBuf::from("/tmp/templates")));
    }

    #[test]
    #[serial_test::serial]
    fn test_templates_dir_from_env() {
        let original = std::env::var(TEMPLATES_ENV).ok();
        unsafe {
            std::env::set_var(TEMPLATES_ENV, "/opt/asp/templates");
        }

        let from_env = Cli::try_parse_from(["agent-starter-pack", "list"]).unwrap();
        let from_flag =
            Cli::try_parse_from(["agent-starter-pack", "--templates-dir", "/x", "list"]).unwrap();

        unsafe {
            match original {
                Some(value) => std::env::set_var(TEMPLATES_ENV, value),
                None => std::env::remove_var(TEMPLATES_ENV),
            }
        }
        assert_eq!(from_env.templates_dir, Some(PathBuf::from("/opt/asp/templates")));
        assert_eq!(from_flag.templates_dir, Some(PathBuf::from("/x")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["agent-starter-pack", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
