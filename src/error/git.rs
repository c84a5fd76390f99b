//! Git fetch errors

use super::StarterPackError;

/// Creates a clone failed error
pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> StarterPackError {
    StarterPackError::GitCloneFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a ref not found error
pub fn ref_not_found(url: impl Into<String>, git_ref: impl Into<String>) -> StarterPackError {
    StarterPackError::GitRefNotFound {
        url: url.into(),
        git_ref: git_ref.into(),
    }
}

/// Creates a checkout failed error
pub fn checkout_failed(sha: impl Into<String>, reason: impl Into<String>) -> StarterPackError {
    StarterPackError::GitCheckoutFailed {
        sha: sha.into(),
        reason: reason.into(),
    }
}
