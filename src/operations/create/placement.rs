//! Placement of a rendered project
//!
//! Standard placement creates a new directory and refuses to touch an
//! existing one. In-folder placement writes into an existing directory and
//! keeps the user's `README.md` and `pyproject.toml`; the generated versions
//! land next to them as `starter_pack_<name>`.

use std::path::Path;

use crate::compose::{ComposeOptions, ComposeReport, compose_dir};
use crate::error::{Result, fs as fs_error};

/// Files never overwritten in an existing folder
pub const IN_FOLDER_PROTECTED: &[&str] = &["README.md", "pyproject.toml"];

/// Fail early when a standard placement would clobber a directory
pub fn check_destination(destination: &Path, in_folder: bool) -> Result<()> {
    if !in_folder && destination.exists() {
        return Err(fs_error::destination_exists(destination));
    }
    Ok(())
}

/// Copy the rendered project at `rendered` to `destination`
pub fn place_project(rendered: &Path, destination: &Path, in_folder: bool) -> Result<ComposeReport> {
    check_destination(destination, in_folder)?;

    let protected = if in_folder {
        IN_FOLDER_PROTECTED.iter().map(ToString::to_string).collect()
    } else {
        Vec::new()
    };
    let options = ComposeOptions {
        overwrite: true,
        protected,
        ..ComposeOptions::default()
    };

    let report = compose_dir(rendered, destination, &options)?;
    tracing::debug!(
        destination = %destination.display(),
        copied = report.copied.len(),
        preserved = report.preserved.len(),
        "placed project"
    );
    Ok(report)
}
