//! Git operations for fetching remote templates
//!
//! This module handles:
//! - Parsing repository references out of agent specs
//! - Fetching a single branch or tag at depth 1
//! - Authentication via non-interactive sources only
//!
//! Authentication never prompts:
//! - SSH agent and SSH keys from ~/.ssh/
//! - Anonymous access for public HTTPS repositories

pub mod auth;
pub mod checkout;
pub mod clone;
pub mod error;
pub mod refs;
pub mod url;
pub mod url_parser;

pub use clone::fetch_ref;
pub use error::interpret_git_error;
pub use refs::AdvertisedRef;
pub use url::is_local_url;
