//! Configuration errors

use super::StarterPackError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> StarterPackError {
    StarterPackError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing required fields error
pub fn missing_fields(path: impl Into<String>, fields: Vec<String>) -> StarterPackError {
    StarterPackError::ConfigMissingFields {
        path: path.into(),
        fields,
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> StarterPackError {
    StarterPackError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an invalid agent directory error
pub fn invalid_agent_directory(
    name: impl Into<String>,
    reason: impl Into<String>,
) -> StarterPackError {
    StarterPackError::InvalidAgentDirectory {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid project name error
pub fn invalid_project_name(
    name: impl Into<String>,
    reason: impl Into<String>,
) -> StarterPackError {
    StarterPackError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid CLI option error
pub fn invalid_option(
    option: impl Into<String>,
    value: impl Into<String>,
    reason: impl Into<String>,
) -> StarterPackError {
    StarterPackError::InvalidOption {
        option: option.into(),
        value: value.into(),
        reason: reason.into(),
    }
}
