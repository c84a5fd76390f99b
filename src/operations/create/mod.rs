//! Create operation module
//!
//! This module provides `CreateOperation`, which turns a [`CreateRequest`]
//! into a project on disk.
//!
//! ## Module Organization
//!
//! - `request.rs`: the typed request and its reconstruction from metadata
//! - `resolution.rs`: agent spec → bundled, `local@` or remote template
//! - `settings.rs`: effective config, agent directory and option defaults
//! - `execution.rs`: the pipeline
//! - `placement.rs`: standard and in-folder placement

pub mod execution;
pub mod placement;
pub mod request;
pub mod resolution;
pub mod settings;

use crate::compose::AgentExclusions;
use crate::error::Result;
use crate::library::TemplateLibrary;
use crate::ui::Reporter;

pub use execution::CreateOutcome;
pub use request::CreateRequest;

/// Everything a run needs besides the request
pub struct CreateContext<'a> {
    pub library: &'a TemplateLibrary,
    pub exclusions: &'a AgentExclusions,
    pub reporter: &'a mut dyn Reporter,
}

/// High-level create operation
pub struct CreateOperation<'a> {
    ctx: CreateContext<'a>,
}

impl<'a> CreateOperation<'a> {
    pub fn new(ctx: CreateContext<'a>) -> Self {
        Self { ctx }
    }

    /// Execute the create operation
    ///
    /// The reporter is abandoned on error and finished on success.
    pub fn execute(&mut self, request: &CreateRequest) -> Result<CreateOutcome> {
        match execution::execute(&mut self.ctx, request) {
            Ok(outcome) => {
                self.ctx.reporter.finish(&format!(
                    "Created {} in {}",
                    request.project_name,
                    outcome.destination.display()
                ));
                Ok(outcome)
            }
            Err(err) => {
                self.ctx.reporter.abandon();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::config::metadata::read_project_metadata;
    use crate::error::StarterPackError;
    use crate::test_fixtures::{
        create_temp_dir, create_template_library, create_test_files, read_test_file,
    };
    use crate::ui::SilentReporter;

    struct Harness {
        _temp: tempfile::TempDir,
        library: TemplateLibrary,
        exclusions: AgentExclusions,
        out: tempfile::TempDir,
    }

    impl Harness {
        fn new() -> Self {
            let temp = create_temp_dir();
            let root = create_template_library(temp.path());
            Self {
                _temp: temp,
                library: TemplateLibrary::open(root).unwrap(),
                exclusions: AgentExclusions::builtin(),
                out: create_temp_dir(),
            }
        }

        fn request(&self, agent: &str) -> CreateRequest {
            let mut request = CreateRequest::new("my-agent", agent);
            request.output_dir = self.out.path().to_path_buf();
            request
        }

        fn create(&self, request: &CreateRequest) -> Result<CreateOutcome> {
            let mut reporter = SilentReporter;
            let mut op = CreateOperation::new(CreateContext {
                library: &self.library,
                exclusions: &self.exclusions,
                reporter: &mut reporter,
            });
            op.execute(request)
        }
    }

    fn project_files(root: &Path) -> Vec<(String, Vec<u8>)> {
        let mut files: Vec<(String, Vec<u8>)> = walkdir::WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = crate::path_utils::relative_slash_path(root, e.path()).unwrap();
                (rel, fs::read(e.path()).unwrap())
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_create_bundled_agent() {
        let harness = Harness::new();
        let outcome = harness.create(&harness.request("adk_base")).unwrap();
        let project = outcome.destination;

        assert_eq!(project, harness.out.path().join("my-agent"));
        assert_eq!(read_test_file(&project, "README.md"), "# my-agent\n");
        assert!(project.join("app/agent.py").is_file());
        assert!(project.join("app/agent_engine_app.py").is_file());
        assert!(project.join("deployment/terraform/engine.tf").is_file());
        assert!(!project.join("deployment/terraform/service.tf").exists());
        assert!(project.join(".cloudbuild").is_dir());
        assert!(!project.join("unused_github").exists());
        assert!(!project.join(".template").exists());
        assert_eq!(
            read_test_file(&project, "starter_pack_README.md"),
            "agent readme\n"
        );

        let metadata = read_project_metadata(&project).unwrap();
        assert_eq!(metadata.agent, "adk_base");
        assert_eq!(metadata.agent_directory, "app");
        assert_eq!(metadata.create_params.deployment_target, "agent_engine");
        assert!(read_test_file(&project, "pyproject.toml").starts_with("[project]\nname = \"my-agent\""));
    }

    #[test]
    fn test_create_renames_agent_directory() {
        let harness = Harness::new();
        let mut request = harness.request("live_api");
        request.agent_directory = Some("voice_agent".to_string());
        request.cicd_runner = Some("github_actions".to_string());
        let project = harness.create(&request).unwrap().destination;

        assert!(project.join("voice_agent/agent.py").is_file());
        assert!(project.join("voice_agent/server.py").is_file());
        assert!(!project.join("app").exists());
        assert_eq!(
            read_test_file(&project, "voice_agent/server.py"),
            "SESSION = \"in_memory\"\n"
        );
        assert!(project.join(".github").is_dir());
        assert!(!project.join(".cloudbuild").exists());
        // live_api excludes its test helpers
        assert!(!project.join("tests/unit/test_utils").exists());
        // frontends are copied without rendering
        assert!(
            read_test_file(&project, "frontend/app.py").contains("{{ this is not rendered }}")
        );

        let makefile = read_test_file(&project, "Makefile");
        assert!(makefile.contains("test:\n\tuv run pytest tests/integration\n"));
        assert!(makefile.contains("dev:\n\tuv run adk web\n"));
    }

    #[test]
    fn test_create_with_data_ingestion() {
        let harness = Harness::new();
        let mut request = harness.request("adk_base");
        request.include_data_ingestion = true;
        let outcome = harness.create(&request).unwrap();

        assert!(outcome.destination.join("data_ingestion/pipeline.py").is_file());
        assert_eq!(
            outcome.metadata.create_params.datastore.as_deref(),
            Some("vertex_ai_search")
        );
    }

    #[test]
    fn test_create_from_local_template() {
        let harness = Harness::new();
        let source = create_temp_dir();
        create_test_files(
            source.path(),
            &[
                (
                    ".template/templateconfig.yaml",
                    "name: custom\ndescription: Custom agent\nsettings:\n  agent_directory: custom_agent\n",
                ),
                ("app/agent.py", "custom = True\n"),
                ("README.md", "# remote readme\n"),
            ],
        );

        let request = harness.request(&format!("local@{}", source.path().display()));
        let outcome = harness.create(&request).unwrap();
        let project = outcome.destination;

        assert_eq!(read_test_file(&project, "custom_agent/agent.py"), "custom = True\n");
        assert_eq!(read_test_file(&project, "README.md"), "# my-agent\n");
        assert!(!read_test_file(&project, "starter_pack_README.md").contains("remote readme"));
        assert_eq!(outcome.metadata.base_template.as_deref(), Some("adk_base"));
        assert!(outcome.metadata.agent.starts_with("local@"));
        // the user's template is untouched
        assert!(source.path().join("README.md").is_file());
    }

    #[test]
    fn test_invalid_agent_directory_writes_nothing() {
        let harness = Harness::new();
        let mut request = harness.request("adk_base");
        request.agent_directory = Some("my-agent".to_string());

        let err = harness.create(&request).unwrap_err();
        assert!(matches!(err, StarterPackError::InvalidAgentDirectory { .. }));
        assert!(!harness.out.path().join("my-agent").exists());
    }

    #[test]
    fn test_existing_destination_is_refused() {
        let harness = Harness::new();
        create_test_files(harness.out.path(), &[("my-agent/keep.txt", "mine")]);

        let err = harness.create(&harness.request("adk_base")).unwrap_err();
        assert!(matches!(err, StarterPackError::DestinationExists { .. }));
        assert_eq!(read_test_file(harness.out.path(), "my-agent/keep.txt"), "mine");
    }

    #[test]
    fn test_in_folder_keeps_user_files() {
        let harness = Harness::new();
        create_test_files(
            harness.out.path(),
            &[("README.md", "# mine\n"), ("pyproject.toml", "[project]\nname = \"mine\"\n")],
        );
        let mut request = harness.request("adk_base");
        request.in_folder = true;

        let outcome = harness.create(&request).unwrap();
        assert_eq!(outcome.destination, harness.out.path());
        assert_eq!(read_test_file(harness.out.path(), "README.md"), "# mine\n");
        assert!(
            read_test_file(harness.out.path(), "starter_pack_pyproject.toml")
                .contains("[tool.agent-starter-pack]")
        );
        assert!(harness.out.path().join("app/agent.py").is_file());
    }

    #[test]
    fn test_recreate_reproduces_project() {
        let harness = Harness::new();
        let mut request = harness.request("live_api");
        request.agent_directory = Some("voice_agent".to_string());
        let original = harness.create(&request).unwrap().destination;

        let metadata = read_project_metadata(&original).unwrap();
        let again = create_temp_dir();
        let recreated = harness
            .create(&CreateRequest::from_metadata(&metadata, again.path()))
            .unwrap()
            .destination;

        let strip = |files: Vec<(String, Vec<u8>)>| -> Vec<(String, String)> {
            files
                .into_iter()
                .map(|(path, bytes)| {
                    let text = String::from_utf8_lossy(&bytes)
                        .lines()
                        .filter(|l| !l.starts_with("generated_at") && !l.starts_with("asp_version"))
                        .collect::<Vec<_>>()
                        .join("\n");
                    (path, text)
                })
                .collect()
        };
        assert_eq!(strip(project_files(&original)), strip(project_files(&recreated)));
    }
}
