//! Persistence for the config file.

use super::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for gitlab-mr within the platform config dir.
const APP_DIR: &str = "gitlab-mr";

/// Filename for the config.
pub const CONFIG_FILE: &str = "config.toml";

/// Default config location.
///
/// `~/.config/gitlab-mr/config.toml` on Linux,
/// `~/Library/Application Support/gitlab-mr/config.toml` on macOS.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Load config from disk.
///
/// Returns [`Error::NotInitialized`] if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(Error::NotInitialized(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}

/// Save config to disk.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty())
        && !dir.exists()
    {
        fs::create_dir_all(dir)
            .map_err(|e| Error::Config(format!("failed to create {}: {e}", dir.display())))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;

    let content_with_header =
        format!("# gitlab-mr configuration\n# Edit with 'gitlab-mr edit'\n\n{content}");

    fs::write(path, content_with_header)
        .map_err(|e| Error::Config(format!("failed to write {}: {e}", path.display())))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> Config {
        let mut config = Config::new("https://gitlab.example.com".to_string(), "tok".to_string());
        config.add_project("group/app");
        config.add_project("group/sub/lib");
        config
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = default_config_path().unwrap();
        assert!(path.ends_with("gitlab-mr/config.toml"));
    }

    #[test]
    fn test_load_missing_file_is_not_initialized() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);

        match load_config(&path) {
            Err(Error::NotInitialized(p)) => assert_eq!(p, path),
            other => panic!("Expected NotInitialized error, got: {other:?}"),
        }
    }

    #[test]
    fn test_save_creates_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILE);

        save_config(&path, &sample_config()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_roundtrip_keeps_project_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);

        save_config(&path, &sample_config()).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded, sample_config());
        assert_eq!(loaded.projects, vec!["group/app", "group/sub/lib"]);
    }

    #[test]
    fn test_file_contains_header_comment() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        save_config(&path, &sample_config()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# gitlab-mr configuration"));
    }

    #[test]
    fn test_missing_projects_defaults_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "host = \"gitlab.com\"\ntoken = \"t\"\n").unwrap();

        let loaded = load_config(&path).unwrap();
        assert!(loaded.projects.is_empty());
    }

    #[test]
    fn test_garbage_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "host = [").unwrap();

        assert!(matches!(load_config(&path), Err(Error::Config(_))));
    }
}
