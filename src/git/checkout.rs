//! Checkout operations for git repositories

use git2::{Oid, Repository};

use crate::error::{Result, git};

/// Checkout a specific commit in the repository with a detached HEAD
pub fn checkout_commit(repo: &Repository, oid: Oid) -> Result<()> {
    let sha = oid.to_string();
    let commit = repo
        .find_commit(oid)
        .map_err(|e| git::checkout_failed(&sha, e.message()))?;

    repo.set_head_detached(commit.id())
        .map_err(|e| git::checkout_failed(&sha, e.message()))?;

    let mut checkout_builder = git2::build::CheckoutBuilder::new();
    checkout_builder.force();

    repo.checkout_head(Some(&mut checkout_builder))
        .map_err(|e| git::checkout_failed(&sha, e.message()))?;

    Ok(())
}
