//! Init command - write a fresh config

use crate::cli::style::{Stylize, check};
use anstream::println;
use dialoguer::{Input, Password};
use gitlab_mr::config::{Config, save_config};
use gitlab_mr::error::{Error, Result};
use gitlab_mr::platform::normalize_host;
use std::path::Path;

/// Run the init command, prompting for anything not passed as a flag
pub fn run_init(config_path: &Path, host: Option<String>, token: Option<String>) -> Result<()> {
    let host = match host {
        Some(host) => host,
        None => Input::<String>::new()
            .with_prompt("Host")
            .interact_text()
            .map_err(|e| Error::Internal(format!("Failed to read host: {e}")))?,
    };
    let host = normalize_host(&host)?;

    let token = match token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("Token")
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read token: {e}")))?,
    };

    save_config(config_path, &Config::new(host, token))?;

    println!(
        "{} GitLab token has been successfully saved {}",
        check(),
        config_path.display().accent()
    );
    println!(
        "{}",
        "Add projects with 'gitlab-mr projects --add <group/name>'".muted()
    );
    Ok(())
}
