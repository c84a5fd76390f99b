//! File system errors

use std::path::Path;

use super::StarterPackError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> StarterPackError {
    StarterPackError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read error
pub fn read_failed(path: &Path, err: &std::io::Error) -> StarterPackError {
    StarterPackError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, err: &std::io::Error) -> StarterPackError {
    StarterPackError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a destination exists error
pub fn destination_exists(path: impl AsRef<Path>) -> StarterPackError {
    StarterPackError::DestinationExists {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> StarterPackError {
    StarterPackError::IoError {
        message: message.into(),
    }
}
