//! Projects command - list, add or remove watched projects

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::{eprintln, println};
use gitlab_mr::error::Result;
use std::path::Path;

/// What to do with the project list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsAction {
    /// Print configured projects
    List,
    /// Add a project
    Add(String),
    /// Remove a project
    Remove(String),
}

/// Run the projects command
pub async fn run_projects(config_path: &Path, action: ProjectsAction) -> Result<()> {
    let mut ctx = CommandContext::new(config_path).await?;

    let (project, past_tense) = match action {
        ProjectsAction::List => {
            if ctx.projects().is_empty() {
                println!("{}", "No projects configured".muted());
            }
            for project in ctx.projects() {
                println!("\t{}", project.accent());
            }
            return Ok(());
        }
        ProjectsAction::Add(project) => {
            if !ctx.config.add_project(&project) {
                eprintln!("{}", format!("Project '{project}' already exists").warn());
                return Ok(());
            }
            (project, "added")
        }
        ProjectsAction::Remove(project) => {
            if !ctx.config.remove_project(&project) {
                eprintln!(
                    "{}",
                    format!("Project '{project}' is not configured").warn()
                );
                return Ok(());
            }
            (project, "removed")
        }
    };

    ctx.save_config()?;
    println!("{} Successfully {past_tense} '{project}' project", check());
    Ok(())
}
