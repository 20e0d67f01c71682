//! Shared command context for CLI commands
//!
//! Extracts the authentication step shared by every command that talks to
//! GitLab.

use gitlab_mr::auth::{authenticate, get_gitlab_auth};
use gitlab_mr::config::{Config, load_config, save_config};
use gitlab_mr::error::Result;
use gitlab_mr::platform::{GitLabService, PlatformService};
use gitlab_mr::types::User;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Shared context for CLI commands that interact with GitLab
///
/// Building it performs the whole auth sequence:
/// - Load config (fails if `init` was never run)
/// - Resolve the token (config or environment)
/// - Create the GitLab service
/// - Confirm the token by fetching the current user
pub struct CommandContext {
    /// Where the config was loaded from
    pub config_path: PathBuf,
    /// Loaded config
    pub config: Config,
    /// Platform service
    pub platform: Box<dyn PlatformService>,
    /// The authenticated user
    pub user: User,
}

impl CommandContext {
    /// Load config and authenticate
    pub async fn new(config_path: &Path) -> Result<Self> {
        let config = load_config(config_path)?;
        let auth = get_gitlab_auth(&config)?;

        let platform: Box<dyn PlatformService> =
            Box::new(GitLabService::new(auth.token, &auth.host)?);
        let user = authenticate(platform.as_ref()).await?;
        debug!(username = %user.username, projects = config.projects.len(), "context ready");

        Ok(Self {
            config_path: config_path.to_path_buf(),
            config,
            platform,
            user,
        })
    }

    /// Configured project paths
    pub fn projects(&self) -> &[String] {
        &self.config.projects
    }

    /// Write the (possibly modified) config back
    pub fn save_config(&self) -> Result<()> {
        save_config(&self.config_path, &self.config)
    }
}
