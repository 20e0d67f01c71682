//! Test command - verify config, token and project list

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::{eprintln, println};
use gitlab_mr::error::Result;
use std::path::Path;

/// Run the test command
pub async fn run_check(config_path: &Path) -> Result<()> {
    let ctx = CommandContext::new(config_path).await?;
    println!(
        "{}",
        format!("Authenticated as @{}", ctx.user.username).muted()
    );

    if ctx.projects().is_empty() {
        eprintln!("{}", "No projects are configured".warn());
        return Ok(());
    }

    println!("{} Everything is OK", check());
    Ok(())
}
