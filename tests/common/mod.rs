//! Common test utilities for agent-starter-pack integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A scratch directory projects are generated into
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", file_path.display()))
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// A command running in this workspace with the bundled template library
    pub fn cmd(&self) -> Command {
        let mut cmd = asp_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

/// The agent-starter-pack binary, isolated from the caller's environment
#[allow(deprecated)]
pub fn asp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("agent-starter-pack").expect("binary is built");
    cmd.env_remove("AGENT_STARTER_PACK_TEMPLATES")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Every file below `root` as (relative path, contents), sorted
#[allow(dead_code)]
pub fn project_files(root: &Path) -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e
                .path()
                .strip_prefix(root)
                .expect("walked below root")
                .to_string_lossy()
                .replace('\\', "/");
            let contents = String::from_utf8_lossy(&std::fs::read(e.path()).expect("readable"))
                .into_owned();
            (relative, contents)
        })
        .collect();
    files.sort();
    files
}
