//! URL normalization for git operations
//!
//! This module handles:
//! - Normalizing SSH URLs from SCP-style to ssh:// format
//! - Normalizing file:// URLs for libgit2 compatibility
//! - Detecting local repositories, which libgit2 cannot shallow-fetch

use std::borrow::Cow;
use std::path::Path;

/// Whether a URL points at a repository on the local filesystem
pub fn is_local_url(url: &str) -> bool {
    url.starts_with("file://") || url.starts_with('/') || Path::new(url).is_absolute()
}

/// Normalize SSH URLs from SCP-style (git@host:path) to ssh:// format.
///
/// libgit2 may have issues with SCP-style SSH URLs, so we convert them to
/// the explicit ssh:// format. Repository URLs recorded in project metadata
/// may be in either form.
pub fn normalize_ssh_url(url: &str) -> Cow<'_, str> {
    if !url.starts_with("git@") {
        return Cow::Borrowed(url);
    }

    match url.split_once(':') {
        Some((host_part, path_part)) => {
            let path_part = path_part.trim_start_matches('/');
            Cow::Owned(format!("ssh://{host_part}/{path_part}"))
        }
        None => Cow::Borrowed(url),
    }
}

/// Normalize file:// URLs so libgit2 can resolve them.
pub fn normalize_file_url(url: &str) -> Cow<'_, str> {
    let Some(after) = url.strip_prefix("file://") else {
        return Cow::Borrowed(url);
    };
    if after.contains('\\') {
        let path = after.replace('\\', "/");
        return Cow::Owned(format!("file:///{}", path.trim_start_matches('/')));
    }
    if !after.is_empty() && !after.starts_with('/') {
        return Cow::Owned(format!("file:///{after}"));
    }
    Cow::Borrowed(url)
}

/// Normalize any supported repository URL for libgit2
pub fn normalize_remote_url(url: &str) -> String {
    normalize_file_url(&normalize_ssh_url(url)).into_owned()
}
