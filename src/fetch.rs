//! Template fetching
//!
//! Remote templates are fetched into a [`Sandbox`] and `local@` templates are
//! copied into one, so later stages never touch the original location. In
//! both cases the template's own `Makefile` and `README.md` are dropped: the
//! generated project gets those from the base template.

use std::path::{Path, PathBuf};

use crate::common::fs::{CopyOptions, copy_dir_recursive, remove_path};
use crate::error::{Result, fs as fs_error, template as template_error};
use crate::git;
use crate::path_utils::safe_join;
use crate::source::RemoteTemplateSpec;
use crate::temp::Sandbox;

/// Files removed from a fetched template directory
const STRIPPED_FILES: &[&str] = &["Makefile", "README.md"];

/// A template staged in its own sandbox
///
/// The sandbox, and with it the template, is removed when this is dropped.
#[derive(Debug)]
pub struct FetchedTemplate {
    sandbox: Sandbox,
    template_dir: PathBuf,
}

impl FetchedTemplate {
    /// Directory holding the template files
    pub fn path(&self) -> &Path {
        &self.template_dir
    }

    /// Root of the sandbox the template lives in
    pub fn sandbox_path(&self) -> &Path {
        self.sandbox.path()
    }
}

fn strip_template_files(template_dir: &Path) -> Result<()> {
    for name in STRIPPED_FILES {
        let path = template_dir.join(name);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "removing template file");
            remove_path(&path)?;
        }
    }
    Ok(())
}

/// Fetch a remote template at its ref into a fresh sandbox
pub fn fetch_remote_template(spec: &RemoteTemplateSpec) -> Result<FetchedTemplate> {
    let sandbox = Sandbox::new("fetch")?;
    let repo_dir = sandbox.join("repo");

    tracing::info!(url = %spec.repo_url, git_ref = %spec.git_ref, "fetching remote template");
    git::fetch_ref(&spec.repo_url, &spec.git_ref, &repo_dir)?;

    let template_dir = safe_join(&repo_dir, &spec.template_path)
        .filter(|dir| dir.is_dir())
        .ok_or_else(|| template_error::path_not_found(&repo_dir.join(&spec.template_path)))?;

    strip_template_files(&template_dir)?;
    Ok(FetchedTemplate {
        sandbox,
        template_dir,
    })
}

/// Copy a local template directory into a fresh sandbox
pub fn stage_local_template(path: &Path) -> Result<FetchedTemplate> {
    if !path.is_dir() {
        return Err(fs_error::not_found(path));
    }

    let sandbox = Sandbox::new("local")?;
    let name = path
        .file_name()
        .map_or_else(|| "template".into(), |n| n.to_string_lossy().into_owned());
    let template_dir = sandbox.join(name);

    copy_dir_recursive(path, &template_dir, &CopyOptions::exclude_git())?;
    strip_template_files(&template_dir)?;

    Ok(FetchedTemplate {
        sandbox,
        template_dir,
    })
}
