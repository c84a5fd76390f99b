//! Scoped scratch directories
//!
//! Every fetch, composition and render step works inside a [`Sandbox`]: a
//! temporary directory that is removed when the guard is dropped, on success
//! and error paths alike. Sandboxes are never created under the current
//! working directory (e.g. when TMPDIR=tmp or TMPDIR=./tmp).

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, fs};

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path, so temp dirs are never created under the current working
/// directory.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// A temporary directory owned by a single operation
#[derive(Debug)]
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Create a sandbox whose directory name starts with `prefix`
    pub fn new(prefix: &str) -> Result<Self> {
        let base = temp_dir_base();
        let dir = tempfile::Builder::new()
            .prefix(&format!("asp-{prefix}-"))
            .tempdir_in(&base)
            .map_err(|e| fs::write_failed(&base, &e))?;
        tracing::debug!(path = %dir.path().display(), "created sandbox");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A path inside the sandbox
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }

    #[test]
    fn test_sandbox_removed_on_drop() {
        let sandbox = Sandbox::new("test").unwrap();
        let path = sandbox.path().to_path_buf();
        std::fs::write(sandbox.join("file.txt"), "x").unwrap();
        assert!(path.is_dir());

        drop(sandbox);
        assert!(!path.exists());
    }

    #[test]
    fn test_sandbox_prefix() {
        let sandbox = Sandbox::new("render").unwrap();
        let name = sandbox.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("asp-render-"));
    }
}
