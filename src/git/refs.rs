//! Git reference selection and resolution
//!
//! This module handles:
//! - Picking the advertised ref (branch or tag) that matches a requested name
//! - Resolving a fetched ref to the commit it points at

use git2::{Oid, Repository};

use crate::error::{Result, git};

/// A ref advertised by the remote and selected for fetching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvertisedRef {
    Branch(String),
    Tag(String),
}

impl AdvertisedRef {
    /// Refspec fetching only this ref
    pub fn refspec(&self) -> String {
        match self {
            AdvertisedRef::Branch(name) => {
                format!("+refs/heads/{name}:refs/remotes/origin/{name}")
            }
            AdvertisedRef::Tag(name) => format!("+refs/tags/{name}:refs/tags/{name}"),
        }
    }

    /// Name of the local ref the fetch writes
    pub fn local_name(&self) -> String {
        match self {
            AdvertisedRef::Branch(name) => format!("refs/remotes/origin/{name}"),
            AdvertisedRef::Tag(name) => format!("refs/tags/{name}"),
        }
    }
}

/// Pick the advertised ref matching `git_ref`
///
/// Branches win over tags of the same name, as with `git clone --branch`.
/// A fully qualified `refs/heads/...` or `refs/tags/...` name is matched
/// exactly.
pub fn select_advertised_ref<S: AsRef<str>>(
    advertised: &[S],
    git_ref: &str,
) -> Option<AdvertisedRef> {
    let has = |name: &str| advertised.iter().any(|r| r.as_ref() == name);

    if let Some(branch) = git_ref.strip_prefix("refs/heads/") {
        return has(git_ref).then(|| AdvertisedRef::Branch(branch.to_string()));
    }
    if let Some(tag) = git_ref.strip_prefix("refs/tags/") {
        return has(git_ref).then(|| AdvertisedRef::Tag(tag.to_string()));
    }

    if has(&format!("refs/heads/{git_ref}")) {
        Some(AdvertisedRef::Branch(git_ref.to_string()))
    } else if has(&format!("refs/tags/{git_ref}")) {
        Some(AdvertisedRef::Tag(git_ref.to_string()))
    } else {
        None
    }
}

/// Resolve a fetched ref to the commit it points at
///
/// Annotated tags are peeled to their commit.
pub fn resolve_fetched_commit(repo: &Repository, selected: &AdvertisedRef) -> Result<Oid> {
    let local_name = selected.local_name();
    let ref_candidates = [
        local_name.clone(),
        "FETCH_HEAD".to_string(),
    ];

    for candidate in &ref_candidates {
        if let Ok(reference) = repo.find_reference(candidate) {
            if let Ok(commit) = reference.peel_to_commit() {
                return Ok(commit.id());
            }
        }
    }

    Err(git::checkout_failed(
        &local_name,
        "fetched ref does not point at a commit",
    ))
}
