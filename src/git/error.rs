//! Git error handling
//!
//! This module handles:
//! - Interpreting git2 errors into user-friendly messages
//! - Categorizing errors by type (not found, auth, network, etc.)

use git2::{Error, ErrorClass};

/// Internal enum for error type classification
#[derive(Clone, Copy)]
enum ErrorClassOrMessage {
    RepositoryNotFound,
    AuthenticationFailed,
    PermissionDenied,
    NetworkError,
    HttpCertificate,
    Other(ErrorClass),
}

type ErrorCheck = fn(&str, ErrorClass) -> bool;

const ERROR_CLASSIFICATIONS: &[(ErrorCheck, ErrorClassOrMessage)] = &[
    (
        |msg, _| {
            msg.contains("not found")
                || msg.contains("404")
                || msg.contains("too many redirects")
                || msg.contains("authentication replays")
        },
        ErrorClassOrMessage::RepositoryNotFound,
    ),
    (
        |msg, _| msg.contains("authentication") || msg.contains("credentials"),
        ErrorClassOrMessage::AuthenticationFailed,
    ),
    (
        |msg, _| msg.contains("permission denied") || msg.contains("access denied"),
        ErrorClassOrMessage::PermissionDenied,
    ),
    (
        |msg, _| {
            msg.contains("could not resolve")
                || msg.contains("connection")
                || msg.contains("network")
                || msg.contains("timed out")
        },
        ErrorClassOrMessage::NetworkError,
    ),
    (
        |msg, class| class == ErrorClass::Http && msg.contains("certificate"),
        ErrorClassOrMessage::HttpCertificate,
    ),
];

fn classify_error_type(msg: &str, class: ErrorClass) -> ErrorClassOrMessage {
    for (check, result) in ERROR_CLASSIFICATIONS {
        if check(msg, class) {
            return *result;
        }
    }
    ErrorClassOrMessage::Other(class)
}

/// Interpret a git2 error and provide a more user-friendly message
///
/// The original libgit2 message is kept after the summary so the underlying
/// cause is never lost.
pub fn interpret_git_error(err: &Error) -> String {
    let message = err.message().to_lowercase();

    let summary = match classify_error_type(message.as_str(), err.class()) {
        ErrorClassOrMessage::RepositoryNotFound => "Repository not found",
        ErrorClassOrMessage::AuthenticationFailed => "Authentication failed",
        ErrorClassOrMessage::PermissionDenied => "Permission denied",
        ErrorClassOrMessage::NetworkError => "Network error",
        ErrorClassOrMessage::HttpCertificate => "Certificate error",
        ErrorClassOrMessage::Other(ErrorClass::Http) => "HTTP error",
        ErrorClassOrMessage::Other(ErrorClass::Ssh) => "SSH error",
        ErrorClassOrMessage::Other(_) => return err.message().to_string(),
    };

    format!("{summary} ({})", err.message())
}
