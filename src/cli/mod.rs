//! CLI command implementations

pub mod context;
pub mod format;
pub mod style;

mod actions;
mod check;
mod edit;
mod init;
mod overview;
mod projects;

pub use actions::run_actions;
pub use check::run_check;
pub use edit::run_edit;
pub use init::run_init;
pub use overview::run_overview;
pub use projects::{ProjectsAction, run_projects};

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, spinner_style};
use anstream::eprintln;
use gitlab_mr::error::Result;
use gitlab_mr::gather::{DEFAULT_CONCURRENCY, ProjectSnapshot, gather_projects};
use indicatif::ProgressBar;
use std::time::Duration;

/// Fetch snapshots for every configured project.
///
/// Projects or MRs that fail to load are reported on stderr and skipped.
/// An authentication failure aborts, whether it hit the project listing or
/// a single MR's awards or discussions.
pub async fn gather_all(ctx: &CommandContext, show_spinner: bool) -> Result<Vec<ProjectSnapshot>> {
    let spinner = if show_spinner {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(format!(
            "Fetching merge requests for {} project(s)...",
            ctx.projects().len()
        ));
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    } else {
        ProgressBar::hidden()
    };

    let results = gather_projects(ctx.platform.as_ref(), ctx.projects(), DEFAULT_CONCURRENCY).await;
    spinner.finish_and_clear();

    let mut snapshots = Vec::with_capacity(results.len());
    for result in results {
        match result.outcome {
            Ok(mut snapshot) => {
                if let Some(pos) = snapshot.failures.iter().position(|f| f.error.is_auth()) {
                    return Err(snapshot.failures.swap_remove(pos).error);
                }
                for failure in &snapshot.failures {
                    eprintln!(
                        "{}",
                        format!(
                            "⚠ Skipped {} !{} ({}): {}",
                            snapshot.project, failure.mr_iid, failure.title, failure.error
                        )
                        .warn()
                    );
                }
                snapshots.push(snapshot);
            }
            Err(e) if e.is_auth() => return Err(e),
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("⚠ Failed to load project '{}': {e}", result.project).warn()
                );
            }
        }
    }

    Ok(snapshots)
}
