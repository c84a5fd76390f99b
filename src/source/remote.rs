//! Remote template source details

use serde::{Deserialize, Serialize};

/// Repository holding the curated ADK sample agents
pub const KNOWN_SAMPLES_REPO: &str = "https://github.com/google/adk-samples";

/// Directory inside the samples repository that holds the agents
pub const KNOWN_SAMPLES_PATH: &str = "python/agents";

/// Ref used when a spec does not name one
pub const DEFAULT_GIT_REF: &str = "main";

/// A template living in a remote Git repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTemplateSpec {
    /// Repository URL, kept verbatim (may end in `.git`)
    pub repo_url: String,

    /// Sub-path within the repository; empty means the repository root
    #[serde(default)]
    pub template_path: String,

    /// Branch or tag to fetch
    #[serde(rename = "ref", default = "default_git_ref")]
    pub git_ref: String,

    /// True for `adk@<name>` specs
    #[serde(default)]
    pub is_known_sample_collection: bool,
}

fn default_git_ref() -> String {
    DEFAULT_GIT_REF.to_string()
}

impl RemoteTemplateSpec {
    /// Create a spec for the repository root at the default ref
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            template_path: String::new(),
            git_ref: default_git_ref(),
            is_known_sample_collection: false,
        }
    }

    /// Set the template sub-path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.template_path = path.into();
        self
    }

    /// Set the git ref
    #[must_use]
    pub fn with_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.git_ref = git_ref.into();
        self
    }

    /// Spec for a sample in the curated ADK samples repository
    pub fn known_sample(name: &str) -> Self {
        Self {
            repo_url: KNOWN_SAMPLES_REPO.to_string(),
            template_path: format!("{KNOWN_SAMPLES_PATH}/{name}"),
            git_ref: default_git_ref(),
            is_known_sample_collection: true,
        }
    }

    /// Build a spec from parsed URL parts, defaulting the ref
    pub fn from_parts(repo_url: String, template_path: String, git_ref: Option<String>) -> Self {
        Self {
            repo_url,
            template_path,
            git_ref: git_ref.unwrap_or_else(default_git_ref),
            is_known_sample_collection: false,
        }
    }

    /// Name of the template: last path segment, or the repository name
    pub fn template_name(&self) -> String {
        let last_path_segment = self.template_path.rsplit('/').find(|s| !s.is_empty());
        match last_path_segment {
            Some(segment) => segment.to_string(),
            None => self
                .repo_url
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .trim_end_matches(".git")
                .to_string(),
        }
    }

    /// Display string showing where the template is fetched from
    ///
    /// ```ignore
    /// let spec = RemoteTemplateSpec::new("https://github.com/org/repo")
    ///     .with_path("agents/x")
    ///     .with_ref("dev");
    /// assert_eq!(spec.display_url(), "https://github.com/org/repo/tree/dev/agents/x");
    /// ```
    pub fn display_url(&self) -> String {
        let base = self.repo_url.trim_end_matches(".git");
        if self.template_path.is_empty() {
            format!("{base}/tree/{}", self.git_ref)
        } else {
            format!("{base}/tree/{}/{}", self.git_ref, self.template_path)
        }
    }
}
