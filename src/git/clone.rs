//! Single-ref shallow fetch
//!
//! This module handles:
//! - Listing the refs a remote advertises
//! - Fetching exactly one branch or tag at depth 1 into a fresh repository
//! - Checking the fetched commit out with a detached HEAD

use std::path::Path;

use git2::{Direction, FetchOptions, RemoteCallbacks, Repository};

use super::auth::setup_auth_callbacks;
use super::checkout::checkout_commit;
use super::error::interpret_git_error;
use super::refs::{resolve_fetched_commit, select_advertised_ref};
use super::url::{is_local_url, normalize_remote_url};
use crate::error::{Result, git as git_error};

fn fetch_options<'cb>(shallow: bool) -> FetchOptions<'cb> {
    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    if shallow {
        fetch_options.depth(1);
    }
    fetch_options
}

/// List the ref names a remote advertises (like `git ls-remote`)
pub fn list_remote_refs(repo: &Repository, url: &str) -> std::result::Result<Vec<String>, git2::Error> {
    let mut remote = repo.remote_anonymous(url)?;
    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);

    let connection = remote.connect_auth(Direction::Fetch, Some(callbacks), None)?;
    let names = connection
        .list()?
        .iter()
        .map(|head| head.name().to_string())
        .collect();
    Ok(names)
}

/// Fetch a single branch or tag of `url` into `target` and check it out
///
/// `target` is initialized as a new repository. Only the requested ref is
/// fetched, at depth 1 for network remotes; local repositories are fetched in
/// full since libgit2 cannot shallow-fetch over the local transport.
pub fn fetch_ref(url: &str, git_ref: &str, target: &Path) -> Result<Repository> {
    let repo = Repository::init(target).map_err(|e| git_error::clone_failed(url, e.message()))?;
    let remote_url = normalize_remote_url(url);

    let advertised = list_remote_refs(&repo, &remote_url)
        .map_err(|e| git_error::clone_failed(url, interpret_git_error(&e)))?;
    let selected = select_advertised_ref(&advertised, git_ref)
        .ok_or_else(|| git_error::ref_not_found(url, git_ref))?;
    tracing::debug!(url, refspec = %selected.refspec(), "fetching template ref");

    {
        let mut remote = repo
            .remote_anonymous(&remote_url)
            .map_err(|e| git_error::clone_failed(url, e.message()))?;
        let mut options = fetch_options(!is_local_url(url));
        remote
            .fetch(&[selected.refspec()], Some(&mut options), None)
            .map_err(|e| git_error::clone_failed(url, interpret_git_error(&e)))?;
    }

    let commit = resolve_fetched_commit(&repo, &selected)?;
    checkout_commit(&repo, commit)?;
    Ok(repo)
}
