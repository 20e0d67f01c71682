//! Per-user configuration: GitLab host, token and watched projects

mod storage;

pub use storage::{CONFIG_FILE, default_config_path, load_config, save_config};

use serde::{Deserialize, Serialize};

/// Persisted configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitLab instance, e.g. `https://gitlab.com`
    pub host: String,
    /// Personal access token
    pub token: String,
    /// Project paths (`group/name`) to triage, in display order
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Config {
    /// Fresh config with no projects
    pub const fn new(host: String, token: String) -> Self {
        Self {
            host,
            token,
            projects: Vec::new(),
        }
    }

    /// Add a project. Returns `false` if it was already configured.
    pub fn add_project(&mut self, project: &str) -> bool {
        if self.has_project(project) {
            return false;
        }
        self.projects.push(project.to_string());
        true
    }

    /// Remove a project. Returns `false` if it was not configured.
    pub fn remove_project(&mut self, project: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p != project);
        self.projects.len() != before
    }

    /// Check whether a project is configured
    pub fn has_project(&self, project: &str) -> bool {
        self.projects.iter().any(|p| p == project)
    }
}
