//! Template resolution
//!
//! An agent spec resolves, in order, to:
//! 1. a remote template (`adk@`, URL, `org/repo` shorthand), fetched
//! 2. a `local@` directory, staged into a sandbox
//! 3. a bundled library agent by name
//! 4. a bundled library agent by 1-based list index
//!
//! Anything else is [`TemplateNotFound`](crate::error::StarterPackError::TemplateNotFound).

use std::path::Path;

use crate::error::{Result, template as template_error};
use crate::fetch::{FetchedTemplate, fetch_remote_template, stage_local_template};
use crate::library::TemplateLibrary;
use crate::path_utils::resolve_user_path;
use crate::source::{AgentSpec, RemoteTemplateSpec};
use crate::ui::Reporter;

/// Where the template of a run comes from
#[derive(Debug)]
pub enum ResolvedTemplate {
    /// A bundled agent
    Library { name: String },
    /// A fetched remote template
    Remote {
        spec: RemoteTemplateSpec,
        fetched: FetchedTemplate,
    },
    /// A staged `local@` directory
    Local { fetched: FetchedTemplate },
}

impl ResolvedTemplate {
    /// Directory of a fetched or staged template
    pub fn staged_dir(&self) -> Option<&Path> {
        match self {
            ResolvedTemplate::Library { .. } => None,
            ResolvedTemplate::Remote { fetched, .. } | ResolvedTemplate::Local { fetched } => {
                Some(fetched.path())
            }
        }
    }
}

/// Look up a bundled agent by name or 1-based index
pub fn library_agent_name(library: &TemplateLibrary, spec: &str) -> Result<Option<String>> {
    if library.has_agent(spec) {
        return Ok(Some(spec.to_string()));
    }
    let Ok(index) = spec.parse::<usize>() else {
        return Ok(None);
    };
    let names = library.agent_names()?;
    Ok(index
        .checked_sub(1)
        .and_then(|i| names.get(i))
        .cloned())
}

/// Resolve an agent spec to a template
pub fn resolve_template(
    library: &TemplateLibrary,
    spec: &str,
    reporter: &mut dyn Reporter,
) -> Result<ResolvedTemplate> {
    match AgentSpec::classify(spec) {
        AgentSpec::Local(path) => {
            let path = resolve_user_path(&path);
            reporter.step(&format!("Staging local template {}", path.display()));
            let fetched = stage_local_template(&path)?;
            Ok(ResolvedTemplate::Local { fetched })
        }
        AgentSpec::Unparseable => {
            let trimmed = spec.trim();
            match library_agent_name(library, trimmed)? {
                Some(name) => {
                    tracing::debug!(agent = %name, "resolved bundled agent");
                    Ok(ResolvedTemplate::Library { name })
                }
                None => Err(template_error::not_found(trimmed)),
            }
        }
        remote => {
            let Some(spec) = remote.into_remote() else {
                return Err(template_error::not_found(spec));
            };
            reporter.step(&format!("Fetching {}", spec.display_url()));
            let fetched = fetch_remote_template(&spec)?;
            Ok(ResolvedTemplate::Remote { spec, fetched })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StarterPackError;
    use crate::test_fixtures::{create_temp_dir, create_template_library, create_test_files};
    use crate::ui::SilentReporter;

    fn library() -> (tempfile::TempDir, TemplateLibrary) {
        let temp = create_temp_dir();
        let root = create_template_library(temp.path());
        let library = TemplateLibrary::open(root).unwrap();
        (temp, library)
    }

    #[test]
    fn test_library_agent_by_name_and_index() {
        let (_temp, library) = library();
        assert_eq!(
            library_agent_name(&library, "live_api").unwrap(),
            Some("live_api".to_string())
        );
        assert_eq!(
            library_agent_name(&library, "1").unwrap(),
            Some("adk_base".to_string())
        );
        assert_eq!(
            library_agent_name(&library, "2").unwrap(),
            Some("live_api".to_string())
        );
        assert_eq!(library_agent_name(&library, "0").unwrap(), None);
        assert_eq!(library_agent_name(&library, "99").unwrap(), None);
        assert_eq!(library_agent_name(&library, "nope").unwrap(), None);
    }

    #[test]
    fn test_unknown_spec_is_template_not_found() {
        let (_temp, library) = library();
        let err = resolve_template(&library, "not a valid spec!!", &mut SilentReporter).unwrap_err();
        assert!(matches!(err, StarterPackError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_local_spec_is_staged() {
        let (_temp, library) = library();
        let source = create_temp_dir();
        create_test_files(source.path(), &[("app/agent.py", "x = 1\n")]);

        let spec = format!("local@{}", source.path().display());
        let resolved = resolve_template(&library, &spec, &mut SilentReporter).unwrap();
        let staged = resolved.staged_dir().unwrap();
        assert!(staged.join("app/agent.py").is_file());
        assert_ne!(staged, source.path());
    }
}
