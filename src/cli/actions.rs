//! Actions command - only the MRs that need attention now

use crate::cli::context::CommandContext;
use crate::cli::gather_all;
use crate::cli::style::{Stylize, hyperlink, separator, styled_action, title_style};
use anstream::println;
use gitlab_mr::error::Result;
use gitlab_mr::review::Review;
use owo_colors::OwoColorize;
use std::path::Path;

/// Run the actions command
///
/// With `only_count`, prints just the number of notable MRs, and nothing at
/// all when there are none, so it can feed a shell prompt.
pub async fn run_actions(config_path: &Path, only_count: bool) -> Result<()> {
    let ctx = CommandContext::new(config_path).await?;

    if ctx.projects().is_empty() && !only_count {
        println!("{}", "No projects are configured".muted());
        return Ok(());
    }

    let snapshots = gather_all(&ctx, !only_count).await?;

    let mut count = 0usize;
    for snapshot in &snapshots {
        for mr in &snapshot.merge_requests {
            let review = Review::new(mr, &ctx.user);
            if !review.action().is_notable() {
                continue;
            }

            count += 1;
            if only_count {
                continue;
            }

            println!(
                "{}",
                [
                    snapshot.project.accent().to_string(),
                    mr.title
                        .style(title_style(mr.work_in_progress, review.is_mine()))
                        .to_string(),
                    review.author_label(),
                    hyperlink(&mr.web_url),
                    styled_action(review.action()),
                ]
                .join(separator().as_str())
            );
        }
    }

    if only_count && count > 0 {
        println!("{count}");
    }

    Ok(())
}
