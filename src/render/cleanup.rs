//! Post-render cleanup
//!
//! Conditional path names render to `unused_<something>` when their branch
//! is not taken; those entries must not ship.

use std::path::Path;

use walkdir::WalkDir;

use crate::common::fs::remove_path;
use crate::error::{Result, fs as fs_error};
use crate::path_utils::relative_slash_path;

/// Name prefix marking an entry for removal
pub const UNUSED_PREFIX: &str = "unused_";

/// Remove every `unused_*` file or directory under `root`
///
/// Returns the removed paths relative to `root`.
pub fn remove_unused(root: &Path) -> Result<Vec<String>> {
    let mut doomed = Vec::new();
    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name().into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| {
            fs_error::read_failed(root, &std::io::Error::other(e.to_string()))
        })?;
        if !entry.file_name().to_string_lossy().starts_with(UNUSED_PREFIX) {
            continue;
        }
        if entry.file_type().is_dir() {
            walker.skip_current_dir();
        }
        doomed.push(entry.into_path());
    }

    let mut removed = Vec::with_capacity(doomed.len());
    for path in doomed {
        tracing::debug!(path = %path.display(), "removing unused entry");
        remove_path(&path)?;
        removed.push(relative_slash_path(root, &path).unwrap_or_default());
    }
    Ok(removed)
}
