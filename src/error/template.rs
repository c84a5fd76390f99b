//! Template resolution and rendering errors

use std::path::Path;

use super::StarterPackError;

/// Creates a template not found error
pub fn not_found(spec: impl Into<String>) -> StarterPackError {
    StarterPackError::TemplateNotFound { spec: spec.into() }
}

/// Creates a template path not found error
pub fn path_not_found(path: &Path) -> StarterPackError {
    StarterPackError::TemplatePathNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a render failed error, chaining the engine error
pub fn render_failed(path: impl Into<String>, source: minijinja::Error) -> StarterPackError {
    StarterPackError::RenderFailed {
        path: path.into(),
        source,
    }
}

/// Creates a library not found error
pub fn library_not_found(path: &Path) -> StarterPackError {
    StarterPackError::LibraryNotFound {
        path: path.display().to_string(),
    }
}
