//! Project rendering
//!
//! The composed staging tree is a template: file contents and path names
//! are rendered with [`minijinja`] against a [`RenderContext`]. Rendering
//! happens in a fresh sandbox, never in place.
//!
//! - A path component renders only when it contains template syntax
//! - A component rendering to an empty string drops the entry and its subtree
//! - Copy-only files (binary assets, notebooks, lock files) are copied verbatim
//! - `unused_*` entries are removed afterwards (see [`cleanup`])
//! - Makefile command overrides are applied last (see [`makefile`])

pub mod cleanup;
pub mod context;
pub mod makefile;

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::Environment;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::template::CommandOverrides;
use crate::error::{Result, config as config_error, fs as fs_error, template as template_error};
use crate::path_utils::relative_slash_path;
use crate::temp::Sandbox;

pub use context::RenderContext;

/// Rendered-path globs whose files are copied without rendering
pub const COPY_WITHOUT_RENDER: &[&str] = &[
    "**/*.ipynb",
    "**/*.json",
    "frontend/**",
    "**/uv.lock",
    "**/package-lock.json",
    "**/*.png",
    "**/*.ico",
];

/// Directory holding the rendered project inside its sandbox
const PROJECT_DIR: &str = "project";

fn has_template_syntax(text: &str) -> bool {
    text.contains("{{") || text.contains("{%")
}

/// Renders file contents and path names of a template tree
pub struct Renderer {
    env: Environment<'static>,
    context: minijinja::Value,
    copy_only: Vec<Glob<'static>>,
}

impl Renderer {
    pub fn new(context: &RenderContext) -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);

        let copy_only = COPY_WITHOUT_RENDER
            .iter()
            .map(|pattern| {
                Glob::new(pattern)
                    .map(Glob::into_owned)
                    .map_err(|e| config_error::invalid(format!("invalid glob '{pattern}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            env,
            context: context.to_template_value(),
            copy_only,
        })
    }

    /// Whether a rendered project-relative path is copied verbatim
    pub fn is_copy_only(&self, relative_path: &str) -> bool {
        let candidate = CandidatePath::from(relative_path);
        self.copy_only
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    }

    /// Render a template string; `name` is used in error messages
    pub fn render_str(&self, name: &str, source: &str) -> Result<String> {
        self.env
            .render_named_str(name, source, &self.context)
            .map_err(|e| template_error::render_failed(name, e))
    }

    /// Render a relative path component by component
    ///
    /// Returns `None` when a component renders empty.
    pub fn render_path(&self, relative_path: &str) -> Result<Option<String>> {
        let mut rendered = Vec::new();
        for component in relative_path.split('/') {
            let component = if has_template_syntax(component) {
                self.render_str(relative_path, component)?
            } else {
                component.to_string()
            };
            let component = component.trim();
            if component.is_empty() {
                return Ok(None);
            }
            rendered.push(component.to_string());
        }
        Ok(Some(rendered.join("/")))
    }

    fn render_file(&self, src: &Path, dst: &Path, rendered_path: &str) -> Result<()> {
        if self.is_copy_only(rendered_path) {
            fs::copy(src, dst).map_err(|e| fs_error::write_failed(dst, &e))?;
            return Ok(());
        }
        let bytes = fs::read(src).map_err(|e| fs_error::read_failed(src, &e))?;
        match String::from_utf8(bytes) {
            Ok(text) if has_template_syntax(&text) => {
                let output = self.render_str(rendered_path, &text)?;
                fs::write(dst, output).map_err(|e| fs_error::write_failed(dst, &e))
            }
            Ok(text) => fs::write(dst, text).map_err(|e| fs_error::write_failed(dst, &e)),
            Err(not_utf8) => {
                fs::write(dst, not_utf8.into_bytes()).map_err(|e| fs_error::write_failed(dst, &e))
            }
        }?;
        copy_permissions(src, dst)
    }

    /// Render every entry of `src` into `dst`
    pub fn render_tree(&self, src: &Path, dst: &Path) -> Result<()> {
        fs::create_dir_all(dst).map_err(|e| fs_error::write_failed(dst, &e))?;
        let mut walker = WalkDir::new(src).min_depth(1).sort_by_file_name().into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry
                .map_err(|e| fs_error::read_failed(src, &std::io::Error::other(e.to_string())))?;
            let Some(relative) = relative_slash_path(src, entry.path()) else {
                continue;
            };
            let Some(rendered) = self.render_path(&relative)? else {
                tracing::debug!(path = %relative, "path rendered empty, dropping");
                if entry.file_type().is_dir() {
                    walker.skip_current_dir();
                }
                continue;
            };

            let target = dst.join(&rendered);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| fs_error::write_failed(&target, &e))?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, &e))?;
                }
                self.render_file(entry.path(), &target, &rendered)?;
            }
        }
        Ok(())
    }
}

#[cfg(unix)]
fn copy_permissions(src: &Path, dst: &Path) -> Result<()> {
    let permissions = fs::metadata(src)
        .map_err(|e| fs_error::read_failed(src, &e))?
        .permissions();
    fs::set_permissions(dst, permissions).map_err(|e| fs_error::write_failed(dst, &e))
}

#[cfg(not(unix))]
fn copy_permissions(_src: &Path, _dst: &Path) -> Result<()> {
    Ok(())
}

/// A rendered project waiting to be placed
#[derive(Debug)]
pub struct RenderedProject {
    sandbox: Sandbox,
    root: PathBuf,
    /// `unused_*` entries removed after rendering
    pub removed: Vec<String>,
}

impl RenderedProject {
    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn sandbox_path(&self) -> &Path {
        self.sandbox.path()
    }
}

/// Render a composed staging tree into a new sandbox
pub fn render_project(
    staging: &Path,
    context: &RenderContext,
    commands: &CommandOverrides,
) -> Result<RenderedProject> {
    let renderer = Renderer::new(context)?;
    let sandbox = Sandbox::new("render")?;
    let root = sandbox.join(PROJECT_DIR);

    renderer.render_tree(staging, &root)?;
    let removed = cleanup::remove_unused(&root)?;
    makefile::apply_to_file(&root.join("Makefile"), commands, &context.deployment_target)?;

    tracing::debug!(
        root = %root.display(),
        removed = removed.len(),
        "rendered project"
    );
    Ok(RenderedProject {
        sandbox,
        root,
        removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CreateParams, TemplateConfig};
    use crate::test_fixtures::{create_temp_dir, create_test_files, read_test_file};

    fn context() -> RenderContext {
        let config: TemplateConfig = serde_yaml::from_str(
            "name: adk_base\ndescription: A base agent\nsettings:\n  deployment_targets: [cloud_run]\n",
        )
        .unwrap();
        RenderContext::new("my-agent", &config)
            .with_agent_directory("app")
            .with_choices(&CreateParams {
                deployment_target: "cloud_run".to_string(),
                session_type: Some("in_memory".to_string()),
                cicd_runner: "google_cloud_build".to_string(),
                include_data_ingestion: false,
                datastore: None,
                frontend_type: None,
            })
    }

    #[test]
    fn test_render_path_components() {
        let renderer = Renderer::new(&context()).unwrap();
        assert_eq!(
            renderer
                .render_path("{{ cookiecutter.agent_directory }}/agent.py")
                .unwrap(),
            Some("app/agent.py".to_string())
        );
        assert_eq!(
            renderer
                .render_path("{% if cookiecutter.include_data_ingestion %}data{% endif %}/x.py")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_copy_only_globs() {
        let renderer = Renderer::new(&context()).unwrap();
        assert!(renderer.is_copy_only("notebooks/intro.ipynb"));
        assert!(renderer.is_copy_only("frontend/src/App.tsx"));
        assert!(renderer.is_copy_only("uv.lock"));
        assert!(!renderer.is_copy_only("app/agent.py"));
    }

    #[test]
    fn test_render_tree() {
        let src = create_temp_dir();
        let dst = create_temp_dir();
        create_test_files(
            src.path(),
            &[
                ("README.md", "# {{ cookiecutter.project_name }}\n"),
                ("{{ cookiecutter.agent_directory }}/agent.py", "ROOT = 1\n"),
                (
                    "{% if cookiecutter.deployment_target == 'agent_engine' %}engine{% endif %}/app.py",
                    "x",
                ),
                ("notebooks/eval.ipynb", "{\"cells\": \"{{ raw }}\"}"),
            ],
        );

        let renderer = Renderer::new(&context()).unwrap();
        renderer.render_tree(src.path(), dst.path()).unwrap();

        assert_eq!(read_test_file(dst.path(), "README.md"), "# my-agent\n");
        assert_eq!(read_test_file(dst.path(), "app/agent.py"), "ROOT = 1\n");
        assert_eq!(
            read_test_file(dst.path(), "notebooks/eval.ipynb"),
            "{\"cells\": \"{{ raw }}\"}"
        );
        assert!(!dst.path().join("engine").exists());
    }

    #[test]
    fn test_non_utf8_copied_verbatim() {
        let src = create_temp_dir();
        let dst = create_temp_dir();
        let bytes = [0xff_u8, 0xfe, b'{', b'{', 0x00];
        fs::write(src.path().join("blob.bin"), bytes).unwrap();

        Renderer::new(&context())
            .unwrap()
            .render_tree(src.path(), dst.path())
            .unwrap();
        assert_eq!(fs::read(dst.path().join("blob.bin")).unwrap(), bytes);
    }

    #[test]
    fn test_render_error_names_file() {
        let src = create_temp_dir();
        let dst = create_temp_dir();
        create_test_files(src.path(), &[("broken.py", "{% if %}")]);

        let err = Renderer::new(&context())
            .unwrap()
            .render_tree(src.path(), dst.path())
            .unwrap_err();
        assert!(err.to_string().contains("broken.py"), "{err}");
    }

    #[test]
    fn test_render_project_removes_unused_and_merges_makefile() {
        let staging = create_temp_dir();
        create_test_files(
            staging.path(),
            &[
                ("Makefile", "test:\n\tuv run pytest\n"),
                (
                    "{% if cookiecutter.cicd_runner == 'github_actions' %}.github{% else %}unused_github{% endif %}/ci.yaml",
                    "on: push\n",
                ),
            ],
        );
        let commands: CommandOverrides =
            serde_yaml::from_str("override:\n  test: uv run pytest tests/unit\n").unwrap();

        let project = render_project(staging.path(), &context(), &commands).unwrap();
        assert_eq!(project.removed, vec!["unused_github".to_string()]);
        assert!(!project.path().join("unused_github").exists());
        assert_eq!(
            read_test_file(project.path(), "Makefile"),
            "test:\n\tuv run pytest tests/unit\n"
        );

        let sandbox = project.sandbox_path().to_path_buf();
        drop(project);
        assert!(!sandbox.exists());
    }
}
