//! Cross-platform path utilities
//!
//! Template paths are compared and glob-matched as forward-slash strings
//! relative to the tree being processed, whatever the host platform.

use std::path::{Component, Path, PathBuf};

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Forward-slash form of `path` relative to `root`
///
/// Returns `None` when `path` is not inside `root`.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(to_forward_slashes)
}

/// Join a forward-slash relative path onto `root`, refusing to escape it
///
/// Absolute paths and `..` components are rejected; empty and `.` components
/// are ignored, so `""` yields `root` itself.
pub fn safe_join(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut joined = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(joined)
}

/// Resolve a user-supplied path against the current directory
///
/// Existing paths are canonicalized without Windows `\\?\` prefixes.
pub fn resolve_user_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    dunce::canonicalize(&absolute).unwrap_or(absolute)
}
