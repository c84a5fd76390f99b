//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_test_files, TemplateRepo};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     create_test_files(temp.path(), &[("app/agent.py", "root_agent = None\n")]);
//!
//!     let origin = TemplateRepo::new();
//!     origin.commit(&[("agents/x/app/agent.py", "")], "initial");
//!     origin.tag("v1");
//! }
//! ```

use std::path::{Path, PathBuf};

use git2::{Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create test files under `root`.
///
/// Takes a list of (path, content) tuples; parent directories are created.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Read a file relative to `root`.
///
/// # Panics
///
/// Panics if the file cannot be read.
#[must_use]
pub fn read_test_file(root: &Path, path: &str) -> String {
    std::fs::read_to_string(root.join(path))
        .unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
}

/// A local git repository standing in for a remote template repository.
///
/// The default branch is `main`, matching the default ref of remote specs.
pub struct TemplateRepo {
    temp: TempDir,
    repo: Repository,
}

impl TemplateRepo {
    /// # Panics
    ///
    /// Panics if the repository cannot be initialized.
    #[must_use]
    pub fn new() -> Self {
        let temp = create_temp_dir();
        let mut options = RepositoryInitOptions::new();
        options.initial_head("main");
        let repo =
            Repository::init_opts(temp.path(), &options).expect("Failed to init git repository");
        Self { temp, repo }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// `file://` URL of the repository
    #[must_use]
    pub fn url(&self) -> String {
        format!("file://{}", self.temp.path().display())
    }

    /// Write files and commit them on the current branch.
    ///
    /// # Panics
    ///
    /// Panics if any git operation fails.
    pub fn commit(&self, files: &[(&str, &str)], message: &str) -> git2::Oid {
        create_test_files(self.temp.path(), files);

        let mut index = self.repo.index().expect("Failed to open index");
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .expect("Failed to stage files");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = Signature::now("Test", "test@test.com").expect("Failed to create signature");
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to commit")
    }

    /// Create an annotated tag at HEAD.
    ///
    /// # Panics
    ///
    /// Panics if HEAD cannot be resolved or the tag cannot be created.
    pub fn tag(&self, name: &str) {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel(git2::ObjectType::Commit))
            .expect("Failed to resolve HEAD");
        let sig = Signature::now("Test", "test@test.com").expect("Failed to create signature");
        self.repo
            .tag(name, &head, &sig, name, false)
            .expect("Failed to create tag");
    }
}

/// Write a minimal template library under `root`.
///
/// Contains a base template with conditional CI directories, both deployment
/// targets, data ingestion, one frontend and two agents (`adk_base` and
/// `live_api`).
///
/// # Panics
///
/// Panics if any file cannot be written.
#[must_use]
pub fn create_template_library(root: &Path) -> PathBuf {
    create_test_files(
        root,
        &[
            (
                "base_template/pyproject.toml",
                "[project]\nname = \"{{ cookiecutter.project_name }}\"\nversion = \"0.1.0\"\n",
            ),
            (
                "base_template/Makefile",
                "install:\n\tuv sync\n\ntest:\n\tuv run pytest tests/unit\n",
            ),
            (
                "base_template/README.md",
                "# {{ cookiecutter.project_name }}\n",
            ),
            (
                "base_template/app/__init__.py",
                "",
            ),
            (
                "base_template/{% if cookiecutter.cicd_runner == 'github_actions' %}.github{% else %}unused_github{% endif %}/workflows/ci.yaml",
                "name: ci\n",
            ),
            (
                "base_template/{% if cookiecutter.cicd_runner == 'google_cloud_build' %}.cloudbuild{% else %}unused_cloudbuild{% endif %}/pr_checks.yaml",
                "steps: []\n",
            ),
            (
                "deployment_targets/cloud_run/deployment/terraform/service.tf",
                "# {{ cookiecutter.project_name }} on Cloud Run\n",
            ),
            (
                "deployment_targets/cloud_run/app/server.py",
                "SESSION = \"{{ cookiecutter.session_type }}\"\n",
            ),
            (
                "deployment_targets/agent_engine/deployment/terraform/engine.tf",
                "# {{ cookiecutter.project_name }} on Agent Engine\n",
            ),
            (
                "deployment_targets/agent_engine/app/agent_engine_app.py",
                "from {{ cookiecutter.agent_directory }}.agent import root_agent\n",
            ),
            (
                "data_ingestion/pipeline.py",
                "DATASTORE = \"{{ cookiecutter.datastore_type }}\"\n",
            ),
            (
                "frontends/adk_streamlit/app.py",
                "{{ this is not rendered }}\n",
            ),
            (
                "agents/adk_base/.template/templateconfig.yaml",
                "name: adk_base\ndescription: A base ReAct agent\nexample_question: What's the weather?\nsettings:\n  deployment_targets: [\"agent_engine\", \"cloud_run\"]\n  tags: [\"adk\"]\n",
            ),
            (
                "agents/adk_base/app/agent.py",
                "# {{ cookiecutter.agent_name }}\nroot_agent = None\n",
            ),
            (
                "agents/adk_base/README.md",
                "agent readme\n",
            ),
            (
                "agents/live_api/.template/templateconfig.yaml",
                "name: live_api\ndescription: Real-time multimodal agent\nsettings:\n  deployment_targets: [\"cloud_run\"]\n  frontend_type: adk_streamlit\n  tags: [\"adk\"]\n  commands:\n    override:\n      test: \"uv run pytest tests/integration\"\n    extra:\n      dev: \"uv run adk web\"\n",
            ),
            (
                "agents/live_api/app/agent.py",
                "root_agent = None\n",
            ),
            (
                "agents/live_api/tests/unit/test_utils/helpers.py",
                "",
            ),
            (
                "resources/docs/adk-cheatsheet.md",
                "ADK cheatsheet\n",
            ),
        ],
    );
    root.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(temp.path(), &[("a/b.txt", "hello")]);
        assert_eq!(read_test_file(temp.path(), "a/b.txt"), "hello");
    }

    #[test]
    fn test_template_repo_commits_on_main() {
        let origin = TemplateRepo::new();
        origin.commit(&[("x.txt", "1")], "first");
        origin.commit(&[("x.txt", "2")], "second");
        let repo = Repository::open(origin.path()).unwrap();
        assert_eq!(repo.head().unwrap().shorthand(), Some("main"));
    }

    #[test]
    fn test_create_template_library() {
        let temp = create_temp_dir();
        let root = create_template_library(temp.path());
        assert!(root.join("agents/adk_base/.template/templateconfig.yaml").is_file());
        assert!(root.join("resources/docs/adk-cheatsheet.md").is_file());
    }
}
