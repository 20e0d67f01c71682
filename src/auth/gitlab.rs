//! GitLab token resolution and the authentication check

use super::AuthSource;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::User;
use tracing::debug;

/// Environment variable that overrides the configured token
pub const TOKEN_ENV_VAR: &str = "GITLAB_MR_TOKEN";

/// Resolved GitLab credentials
#[derive(Debug, Clone)]
pub struct GitLabAuthConfig {
    /// Personal access token
    pub token: String,
    /// GitLab instance from config
    pub host: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Pick a token: a non-empty environment value wins over the config file.
pub fn resolve_token(
    config_token: &str,
    env_token: Option<String>,
) -> Option<(String, AuthSource)> {
    if let Some(token) = env_token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
        return Some((token, AuthSource::EnvVar));
    }

    let token = config_token.trim();
    (!token.is_empty()).then(|| (token.to_string(), AuthSource::Config))
}

/// Resolve GitLab credentials for `config`
pub fn get_gitlab_auth(config: &Config) -> Result<GitLabAuthConfig> {
    let (token, source) = resolve_token(&config.token, std::env::var(TOKEN_ENV_VAR).ok())
        .ok_or_else(|| {
            Error::Auth(format!(
                "no GitLab token configured. Run 'gitlab-mr init' or set {TOKEN_ENV_VAR}"
            ))
        })?;
    debug!(?source, "resolved GitLab token");

    Ok(GitLabAuthConfig {
        token,
        host: config.host.clone(),
        source,
    })
}

/// Confirm the token works and return who it belongs to.
///
/// Transport failures are passed through untouched so they stay
/// distinguishable from a rejected token.
pub async fn authenticate(platform: &dyn PlatformService) -> Result<User> {
    platform.current_user().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_token_overrides_config() {
        let resolved = resolve_token("from-config", Some("from-env".to_string()));
        assert_eq!(resolved, Some(("from-env".to_string(), AuthSource::EnvVar)));
    }

    #[test]
    fn test_blank_env_token_falls_back_to_config() {
        let resolved = resolve_token("from-config", Some("  ".to_string()));
        assert_eq!(
            resolved,
            Some(("from-config".to_string(), AuthSource::Config))
        );
    }

    #[test]
    fn test_no_token_anywhere() {
        assert_eq!(resolve_token("", None), None);
    }

    #[test]
    fn test_get_auth_uses_config_host() {
        // Only meaningful when the override is unset in the test environment
        if std::env::var(TOKEN_ENV_VAR).is_ok() {
            return;
        }
        let config = Config::new("gitlab.example.com".to_string(), "tok".to_string());
        let auth = get_gitlab_auth(&config).unwrap();
        assert_eq!(auth.host, "gitlab.example.com");
        assert_eq!(auth.token, "tok");
        assert_eq!(auth.source, AuthSource::Config);
    }
}
