//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{Result, fs as fs_error};

#[derive(Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    pub fn exclude_git() -> Self {
        Self {
            exclude: vec![".git".to_string()],
        }
    }
}

/// Copy a directory recursively with options
///
/// Symlinks are followed; entries named in `options.exclude` are skipped at
/// every depth.
pub fn copy_dir_recursive(src: &Path, dst: &Path, options: &CopyOptions) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| fs_error::write_failed(dst, &e))?;

    for entry in fs::read_dir(src).map_err(|e| fs_error::read_failed(src, &e))? {
        let entry = entry.map_err(|e| fs_error::read_failed(src, &e))?;
        let entry_path = entry.path();
        let file_name = entry.file_name();

        if options
            .exclude
            .iter()
            .any(|excluded| file_name.to_str() == Some(excluded.as_str()))
        {
            continue;
        }

        let dst_path = dst.join(&file_name);

        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path, options)?;
        } else {
            fs::copy(&entry_path, &dst_path).map_err(|e| fs_error::write_failed(&dst_path, &e))?;
        }
    }

    Ok(())
}

/// Remove a file or a whole directory tree; missing paths are not an error
pub fn remove_path(path: &Path) -> Result<()> {
    let result = if path.is_dir() && !path.is_symlink() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(fs_error::write_failed(path, &e)),
    }
}
