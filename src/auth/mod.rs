//! Authentication for GitLab
//!
//! Supports the token stored in the config file and an environment variable
//! override.

mod gitlab;

pub use gitlab::{
    GitLabAuthConfig, TOKEN_ENV_VAR, authenticate, get_gitlab_auth, resolve_token,
};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the config file
    Config,
    /// Token from environment variable
    EnvVar,
}
