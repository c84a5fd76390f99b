//! Git authentication configuration
//!
//! This module handles:
//! - Setting up SSH authentication (agent, then keys from ~/.ssh/)
//! - Anonymous access for public HTTPS repositories
//!
//! Authentication never prompts. Credential helpers are not consulted since
//! some of them open interactive dialogs; a repository that needs them fails
//! immediately with an authentication error instead.

use git2::{Cred, CredentialType, Error, ErrorClass, RemoteCallbacks};

/// libgit2 re-invokes the callback after a rejected credential
const MAX_CREDENTIAL_ATTEMPTS: u8 = 3;

fn auth_failed() -> Error {
    Error::new(
        git2::ErrorCode::Auth,
        ErrorClass::Http,
        "authentication failed",
    )
}

fn try_ssh_credentials(username: &str) -> std::result::Result<Cred, Error> {
    let home = dirs::home_dir().unwrap_or_default();
    let ssh_dir = home.join(".ssh");

    for key_name in &["id_ed25519", "id_rsa", "id_ecdsa"] {
        let private_key = ssh_dir.join(key_name);
        let public_key = ssh_dir.join(format!("{key_name}.pub"));

        if !private_key.exists() {
            continue;
        }

        let public_key_path = public_key.exists().then_some(public_key.as_path());

        if let Ok(cred) = Cred::ssh_key(username, public_key_path, &private_key, None) {
            return Ok(cred);
        }
    }

    Err(Error::new(
        git2::ErrorCode::Auth,
        ErrorClass::Ssh,
        "SSH key not found",
    ))
}

/// Set up non-interactive authentication callbacks for git operations
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks<'_>) {
    let mut attempts: u8 = 0;
    callbacks.credentials(move |_url, username_from_url, allowed_types| {
        attempts += 1;
        if attempts > MAX_CREDENTIAL_ATTEMPTS {
            return Err(auth_failed());
        }

        if allowed_types.contains(CredentialType::DEFAULT) {
            return Cred::default();
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            let username = username_from_url.unwrap_or("git");
            return Cred::ssh_key_from_agent(username).or_else(|_| try_ssh_credentials(username));
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) && attempts == 1 {
            return Cred::userpass_plaintext(username_from_url.unwrap_or("anonymous"), "");
        }

        Err(auth_failed())
    });
}
