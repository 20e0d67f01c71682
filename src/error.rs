//! Error types for gitlab-mr

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by gitlab-mr
///
/// Authentication problems, transport failures and missing configuration are
/// kept as separate variants so the CLI can tell the user what to fix.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be read, parsed or written
    #[error("config error: {0}")]
    Config(String),

    /// No config file exists yet
    #[error("You need to init first (no config at {})", .0.display())]
    NotInitialized(PathBuf),

    /// No usable credentials
    #[error("authentication failed: {0}")]
    Auth(String),

    /// GitLab rejected the token
    #[error("Your token is invalid or expired\nRun 'gitlab-mr edit' and change the token")]
    AuthExpired,

    /// GitLab answered with a non-success status
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Request never got a usable response
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// A fetched record is missing fields the classification needs
    #[error("invalid merge request data: {0}")]
    InvalidSnapshot(String),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error means the credentials need attention
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::AuthExpired)
    }
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
