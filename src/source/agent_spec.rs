//! Agent spec classification
//!
//! An agent spec is the short string naming the template to scaffold from.
//! Forms are tried in a fixed order and the first match wins; the order is
//! part of the contract (e.g. `adk@x` must never be read as a shorthand).

use std::path::PathBuf;

use crate::git::url_parser;

use super::remote::RemoteTemplateSpec;

/// Prefix marking a local template directory
pub const LOCAL_PREFIX: &str = "local@";

/// Prefix marking a curated ADK sample
pub const KNOWN_SAMPLE_PREFIX: &str = "adk@";

/// A classified agent spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentSpec {
    /// `local@<path>`: a directory on disk, resolved by the caller
    Local(PathBuf),
    /// `adk@<name>`: a sample in the curated ADK samples repository
    KnownSample(RemoteTemplateSpec),
    /// `https://host/org/repo/tree/<ref>/<path>`
    GitHubTree(RemoteTemplateSpec),
    /// `https://host/org/repo[/path][@ref]`
    FullUrl(RemoteTemplateSpec),
    /// `org/repo[/path][@ref]`
    Shorthand(RemoteTemplateSpec),
    /// Anything else: a bundled template name, a list index, or garbage
    Unparseable,
}

impl AgentSpec {
    /// Classify an agent spec string
    ///
    /// Never fails; inputs matching no rule are [`AgentSpec::Unparseable`].
    pub fn classify(input: &str) -> Self {
        let input = input.trim();

        if let Some(path) = input.strip_prefix(LOCAL_PREFIX) {
            return AgentSpec::Local(PathBuf::from(path));
        }

        if let Some(name) = input.strip_prefix(KNOWN_SAMPLE_PREFIX) {
            let name = name.trim_matches('/');
            if name.is_empty() {
                return AgentSpec::Unparseable;
            }
            return AgentSpec::KnownSample(RemoteTemplateSpec::known_sample(name));
        }

        if let Some((repo_url, path, git_ref)) = url_parser::parse_tree_url(input) {
            return AgentSpec::GitHubTree(RemoteTemplateSpec::from_parts(repo_url, path, git_ref));
        }

        if let Some((repo_url, path, git_ref)) = url_parser::parse_repo_url(input) {
            return AgentSpec::FullUrl(RemoteTemplateSpec::from_parts(repo_url, path, git_ref));
        }

        if let Some((repo_url, path, git_ref)) = url_parser::parse_github_shorthand(input) {
            return AgentSpec::Shorthand(RemoteTemplateSpec::from_parts(repo_url, path, git_ref));
        }

        AgentSpec::Unparseable
    }

    /// The remote template, if this spec names one
    pub fn remote(&self) -> Option<&RemoteTemplateSpec> {
        match self {
            AgentSpec::KnownSample(spec)
            | AgentSpec::GitHubTree(spec)
            | AgentSpec::FullUrl(spec)
            | AgentSpec::Shorthand(spec) => Some(spec),
            AgentSpec::Local(_) | AgentSpec::Unparseable => None,
        }
    }

    /// Consume the spec, keeping only a remote template
    pub fn into_remote(self) -> Option<RemoteTemplateSpec> {
        match self {
            AgentSpec::KnownSample(spec)
            | AgentSpec::GitHubTree(spec)
            | AgentSpec::FullUrl(spec)
            | AgentSpec::Shorthand(spec) => Some(spec),
            AgentSpec::Local(_) | AgentSpec::Unparseable => None,
        }
    }
}

/// Parse an agent spec into a remote template spec
///
/// Returns `None` for `local@` specs and for anything that is not a remote
/// reference. Pure string parsing: no network or filesystem access.
pub fn parse_agent_spec(input: &str) -> Option<RemoteTemplateSpec> {
    AgentSpec::classify(input).into_remote()
}
