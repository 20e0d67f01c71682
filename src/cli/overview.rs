//! Overview command - every open MR with its details and action

use crate::cli::context::CommandContext;
use crate::cli::format::{created_at_text, is_stale, likes_text};
use crate::cli::gather_all;
use crate::cli::style::{Stylize, hyperlink, styled_action, title_style};
use anstream::println;
use chrono::{DateTime, Utc};
use gitlab_mr::error::Result;
use gitlab_mr::review::Review;
use owo_colors::OwoColorize;
use std::path::Path;

/// Run the overview command
pub async fn run_overview(config_path: &Path) -> Result<()> {
    let ctx = CommandContext::new(config_path).await?;

    if ctx.projects().is_empty() {
        println!("{}", "No projects are configured".muted());
        return Ok(());
    }

    let snapshots = gather_all(&ctx, true).await?;
    let now = Utc::now();

    for snapshot in &snapshots {
        if snapshot.merge_requests.is_empty() {
            continue;
        }

        println!("{}", format!("{}:", snapshot.project).blue().bold());
        for mr in &snapshot.merge_requests {
            print_review(&Review::new(mr, &ctx.user), now);
        }
    }

    Ok(())
}

fn discussions_text(review: &Review<'_>) -> Option<String> {
    let buckets = review.discussions();
    if buckets.is_empty() {
        return None;
    }
    Some(format!(
        "{} new, {} waiting, {} resolved",
        buckets.new.len(),
        buckets.wait.len(),
        buckets.resolved.len()
    ))
}

fn print_review(review: &Review<'_>, now: DateTime<Utc>) {
    let mr = review.merge_request();

    println!(
        "\t{}",
        mr.title
            .style(title_style(mr.work_in_progress, review.is_mine()))
    );

    let created_at = created_at_text(mr.created_at, now);
    let created_at = if is_stale(mr.created_at, now) {
        created_at.red().blink().to_string()
    } else {
        created_at
    };

    let mut fields = vec![
        ("Url", hyperlink(&mr.web_url)),
        ("Description", mr.description.clone()),
        ("Likes", likes_text(review.votes(), now)),
        ("Author", review.author_label()),
        ("Created at", created_at),
    ];
    if let Some(text) = discussions_text(review) {
        fields.push(("Discussions", text));
    }
    fields.push(("Action", styled_action(review.action())));

    for (label, value) in fields {
        println!("\t\t{} {value}", format!("{label}:").emphasis());
    }
    println!();
}
