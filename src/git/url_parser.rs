//! Git URL parsing utilities
//!
//! Provides the string-level pieces of the agent spec grammar: GitHub web UI
//! `tree` URLs, generic `https://host/org/repo[/path][@ref]` URLs and the
//! `org/repo[/path][@ref]` shorthand. Every function is pure and returns
//! `None` instead of failing.
//!
//! Each parser returns `(repo_url, template_path, optional_ref)`.

/// Parsed pieces of a repository reference: (repo URL, sub-path, optional ref)
pub type RepoParts = (String, String, Option<String>);

/// Split off the `http://` or `https://` scheme
///
/// Returns (scheme, rest)
pub fn split_scheme(input: &str) -> Option<(&'static str, &str)> {
    if let Some(rest) = input.strip_prefix("https://") {
        Some(("https://", rest))
    } else if let Some(rest) = input.strip_prefix("http://") {
        Some(("http://", rest))
    } else {
        None
    }
}

/// Normalize a template sub-path: no leading or trailing slashes
pub fn trim_template_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Split a `@ref` suffix on the last `@`
///
/// Returns (main_part, optional_ref). An empty ref (`repo@`) counts as no ref.
pub fn split_ref(input: &str) -> (&str, Option<String>) {
    match input.rfind('@') {
        Some(at_pos) => {
            let git_ref = input[at_pos + 1..].trim_matches('/');
            if git_ref.is_empty() {
                (&input[..at_pos], None)
            } else {
                (&input[..at_pos], Some(git_ref.to_string()))
            }
        }
        None => (input, None),
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.chars().any(char::is_whitespace)
}

/// Split `repo[/path][@ref]` into its parts
fn split_repo_remainder(remainder: &str) -> Option<(&str, String, Option<String>)> {
    let (left, git_ref) = split_ref(remainder);
    let (repo, path) = left.split_once('/').unwrap_or((left, ""));
    if !is_valid_segment(repo) {
        return None;
    }
    Some((repo, trim_template_path(path), git_ref))
}

/// Parse a web UI URL: `https://host/{org}/{repo}/tree/{ref}[/{path}]`
pub fn parse_tree_url(input: &str) -> Option<RepoParts> {
    let (scheme, rest) = split_scheme(input)?;
    let parts: Vec<&str> = rest.split('/').collect();

    // Need at least: host, org, repo, "tree", ref
    if parts.len() < 5 || parts[3] != "tree" {
        return None;
    }
    if !parts[..3].iter().all(|p| is_valid_segment(p)) || parts[4].is_empty() {
        return None;
    }

    let repo_url = format!("{scheme}{}", parts[..3].join("/"));
    let git_ref = parts[4].to_string();
    let path_val = trim_template_path(&parts[5..].join("/"));

    Some((repo_url, path_val, Some(git_ref)))
}

/// Parse a generic repository URL: `https://host/{org}/{repo}[/{path}][@{ref}]`
///
/// The repository URL is the host plus the first two path segments, kept
/// verbatim (a `.git` suffix is not stripped).
pub fn parse_repo_url(input: &str) -> Option<RepoParts> {
    let (scheme, rest) = split_scheme(input)?;
    let (host, after_host) = rest.split_once('/')?;
    let (org, remainder) = after_host.split_once('/')?;
    if !is_valid_segment(host) || !is_valid_segment(org) {
        return None;
    }

    let (repo, path_val, git_ref) = split_repo_remainder(remainder)?;
    Some((format!("{scheme}{host}/{org}/{repo}"), path_val, git_ref))
}

/// Check if string looks like a GitHub `org/repo` shorthand
///
/// No scheme, no leading slash, no whitespace and no SCP-style `host:path`.
pub fn is_github_shorthand(input: &str) -> bool {
    if input.contains("://") || input.starts_with('/') || input.chars().any(char::is_whitespace)
    {
        return false;
    }
    match input.split_once('/') {
        Some((org, _)) => is_valid_segment(org) && !org.contains(':'),
        None => false,
    }
}

/// Parse GitHub shorthand: `{org}/{repo}[/{path}][@{ref}]`
pub fn parse_github_shorthand(input: &str) -> Option<RepoParts> {
    if !is_github_shorthand(input) {
        return None;
    }
    let (org, remainder) = input.split_once('/')?;
    let (repo, path_val, git_ref) = split_repo_remainder(remainder)?;
    Some((format!("https://github.com/{org}/{repo}"), path_val, git_ref))
}
