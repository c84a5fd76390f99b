//! Typed creation request

use std::path::{Path, PathBuf};

use crate::config::ProjectMetadata;

/// Every choice that shapes a generated project
///
/// `None` means "use the template's default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRequest {
    pub project_name: String,
    /// Agent spec: library name, list index, `local@`, `adk@`, URL or shorthand
    pub agent: String,
    pub deployment_target: Option<String>,
    pub cicd_runner: Option<String>,
    pub session_type: Option<String>,
    pub include_data_ingestion: bool,
    pub datastore: Option<String>,
    pub frontend_type: Option<String>,
    pub agent_directory: Option<String>,
    pub output_dir: PathBuf,
    /// Generate into `output_dir` itself instead of `output_dir/project_name`
    pub in_folder: bool,
}

impl CreateRequest {
    pub fn new(project_name: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            agent: agent.into(),
            output_dir: PathBuf::from("."),
            ..Self::default()
        }
    }

    /// Rebuild the request a project was generated from
    ///
    /// Every recorded choice is passed explicitly so template defaults can
    /// not drift in between.
    pub fn from_metadata(metadata: &ProjectMetadata, output_dir: &Path) -> Self {
        let params = &metadata.create_params;
        Self {
            project_name: metadata.name.clone(),
            agent: metadata.agent.clone(),
            deployment_target: Some(params.deployment_target.clone()),
            cicd_runner: Some(params.cicd_runner.clone()),
            session_type: params.session_type.clone(),
            include_data_ingestion: params.include_data_ingestion,
            datastore: params.datastore.clone(),
            frontend_type: Some(
                params
                    .frontend_type
                    .clone()
                    .unwrap_or_else(|| super::settings::NO_FRONTEND.to_string()),
            ),
            agent_directory: Some(metadata.agent_directory.clone()),
            output_dir: output_dir.to_path_buf(),
            in_folder: false,
        }
    }

    /// Directory the project ends up in
    pub fn destination(&self) -> PathBuf {
        if self.in_folder {
            self.output_dir.clone()
        } else {
            self.output_dir.join(&self.project_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CreateParams;

    #[test]
    fn test_destination() {
        let mut request = CreateRequest::new("my-agent", "adk_base");
        request.output_dir = PathBuf::from("/work");
        assert_eq!(request.destination(), PathBuf::from("/work/my-agent"));
        request.in_folder = true;
        assert_eq!(request.destination(), PathBuf::from("/work"));
    }

    #[test]
    fn test_from_metadata_pins_every_choice() {
        let metadata = ProjectMetadata {
            name: "my-agent".to_string(),
            agent: "adk_base".to_string(),
            base_template: None,
            agent_directory: "my_agent".to_string(),
            asp_version: "0.1.0".to_string(),
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            create_params: CreateParams {
                deployment_target: "cloud_run".to_string(),
                session_type: Some("in_memory".to_string()),
                cicd_runner: "github_actions".to_string(),
                include_data_ingestion: false,
                datastore: None,
                frontend_type: None,
            },
        };

        let request = CreateRequest::from_metadata(&metadata, Path::new("/out"));
        assert_eq!(request.project_name, "my-agent");
        assert_eq!(request.deployment_target.as_deref(), Some("cloud_run"));
        assert_eq!(request.cicd_runner.as_deref(), Some("github_actions"));
        assert_eq!(request.session_type.as_deref(), Some("in_memory"));
        assert_eq!(request.frontend_type.as_deref(), Some("none"));
        assert_eq!(request.agent_directory.as_deref(), Some("my_agent"));
        assert_eq!(request.destination(), PathBuf::from("/out/my-agent"));
    }
}
