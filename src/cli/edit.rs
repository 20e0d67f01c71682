//! Edit command - open the config in $EDITOR

use crate::cli::style::{Stylize, check};
use anstream::println;
use dialoguer::Editor;
use gitlab_mr::config::Config;
use gitlab_mr::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Run the edit command
///
/// The edited text is only written back if it still parses as a config.
pub fn run_edit(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(Error::NotInitialized(config_path.to_path_buf()));
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", config_path.display())))?;

    let Some(edited) = Editor::new()
        .extension(".toml")
        .edit(&content)
        .map_err(|e| Error::Internal(format!("Failed to run editor: {e}")))?
    else {
        println!("{}", "Config unchanged".muted());
        return Ok(());
    };

    toml::from_str::<Config>(&edited)
        .map_err(|e| Error::Config(format!("edited config is invalid, not saved: {e}")))?;

    fs::write(config_path, edited)
        .map_err(|e| Error::Config(format!("failed to write {}: {e}", config_path.display())))?;

    println!("{} Saved {}", check(), config_path.display().accent());
    Ok(())
}
