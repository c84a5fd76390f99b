//! Layered file composition
//!
//! A project is built by copying several source trees, one after another,
//! into a staging directory. Each copy is a pass of [`compose_dir`]:
//!
//! - Build and VCS artifacts are never copied (see [`is_skipped`])
//! - Agent-specific exclusions are consulted for every entry
//! - Top-level directories can be renamed (`app` → the agent directory)
//! - Protected names at the pass root are never overwritten; the incoming
//!   file is written next to them as `starter_pack_<name>`
//!
//! The pass order itself lives in [`layers`].

pub mod exclusions;
pub mod layers;

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};
use crate::path_utils::relative_slash_path;

pub use exclusions::{AgentExclusions, ExclusionRule};
pub use layers::{Layer, LayerInputs, LayerKind, LayerPlan, PassSettings};

/// Prefix given to the incoming copy of a protected file
pub const PRESERVED_PREFIX: &str = "starter_pack_";

/// Entry names never copied, at any depth
const SKIPPED_NAMES: &[&str] = &[
    "__pycache__",
    ".git",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    ".venv",
    "node_modules",
    ".template",
];

/// File extensions never copied
const SKIPPED_EXTENSIONS: &[&str] = &["pyc", "pyo"];

/// Whether an entry name is a build, cache or VCS artifact
pub fn is_skipped(name: &str) -> bool {
    SKIPPED_NAMES.contains(&name)
        || Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SKIPPED_EXTENSIONS.contains(&ext))
}

/// Options of one composition pass
#[derive(Default)]
pub struct ComposeOptions<'a> {
    /// Replace files that already exist in the destination
    pub overwrite: bool,

    /// File names protected at the destination root
    pub protected: Vec<String>,

    /// Top-level directory renames, `(from, to)`
    pub renames: Vec<(String, String)>,

    /// Agent name and the rule deciding its exclusions
    pub exclusions: Option<(&'a str, &'a dyn ExclusionRule)>,
}

impl ComposeOptions<'_> {
    fn is_excluded(&self, relative: &str) -> bool {
        self.exclusions
            .is_some_and(|(agent, rule)| rule.excludes(agent, relative))
    }

    fn renamed(&self, relative: &str) -> String {
        let (head, tail) = match relative.split_once('/') {
            Some((head, tail)) => (head, Some(tail)),
            None => (relative, None),
        };
        let Some((_, to)) = self.renames.iter().find(|(from, _)| from == head) else {
            return relative.to_string();
        };
        match tail {
            Some(tail) => format!("{to}/{tail}"),
            None => to.clone(),
        }
    }
}

/// What a pass did, as forward-slash paths
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComposeReport {
    /// Destination-relative paths of copied files
    pub copied: Vec<String>,

    /// Source-relative paths left out by skip rules, exclusions or `overwrite = false`
    pub skipped: Vec<String>,

    /// Protected destination files left untouched
    pub preserved: Vec<String>,
}

impl ComposeReport {
    /// Append another report, prefixing its paths with `prefix`
    pub fn absorb(&mut self, other: ComposeReport, prefix: &str) {
        let with_prefix = |path: String| {
            if prefix.is_empty() {
                path
            } else {
                format!("{prefix}/{path}")
            }
        };
        self.copied.extend(other.copied.into_iter().map(with_prefix));
        self.skipped.extend(other.skipped.into_iter().map(with_prefix));
        self.preserved.extend(other.preserved.into_iter().map(with_prefix));
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, &e))?;
    }
    fs::copy(from, to).map_err(|e| fs_error::write_failed(to, &e))?;
    Ok(())
}

/// Copy the tree at `src` into `dst` as one composition pass
pub fn compose_dir(src: &Path, dst: &Path, options: &ComposeOptions<'_>) -> Result<ComposeReport> {
    if !src.is_dir() {
        return Err(fs_error::not_found(src));
    }
    fs::create_dir_all(dst).map_err(|e| fs_error::write_failed(dst, &e))?;

    let mut report = ComposeReport::default();
    let mut walker = WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| src.to_path_buf(), Path::to_path_buf);
            fs_error::read_failed(&path, &std::io::Error::other(e.to_string()))
        })?;
        let is_dir = entry.file_type().is_dir();
        let Some(relative) = relative_slash_path(src, entry.path()) else {
            continue;
        };
        let name = entry.file_name().to_string_lossy();

        if is_skipped(&name) || options.is_excluded(&relative) {
            tracing::debug!(path = %relative, "skipping");
            report.skipped.push(relative);
            if is_dir {
                walker.skip_current_dir();
            }
            continue;
        }

        let target_relative = options.renamed(&relative);
        let target: PathBuf = dst.join(&target_relative);

        if is_dir {
            fs::create_dir_all(&target).map_err(|e| fs_error::write_failed(&target, &e))?;
            continue;
        }

        let at_root = entry.depth() == 1;
        if at_root && target.exists() && options.protected.iter().any(|p| *p == name) {
            let stash = dst.join(format!("{PRESERVED_PREFIX}{name}"));
            tracing::debug!(path = %target_relative, stash = %stash.display(), "preserving protected file");
            copy_file(entry.path(), &stash)?;
            report.preserved.push(target_relative);
            continue;
        }

        if target.exists() && !options.overwrite {
            report.skipped.push(relative);
            continue;
        }

        copy_file(entry.path(), &target)?;
        report.copied.push(target_relative);
    }

    Ok(report)
}
