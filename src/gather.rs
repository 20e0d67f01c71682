//! Snapshot gathering - effectful
//!
//! Fetches everything the review engine needs and hands back immutable
//! `MergeRequest` snapshots. Fetches run concurrently with a bound, and a
//! failure for one MR or one project never aborts its siblings.
//! Authentication errors are reported like any other failure; callers
//! decide whether to abort on them.

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{MergeRequest, MergeRequestSummary};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

/// Default number of concurrent fetches per level
pub const DEFAULT_CONCURRENCY: usize = 4;

/// An MR whose snapshot could not be assembled
#[derive(Debug)]
pub struct ItemFailure {
    /// MR number
    pub mr_iid: u64,
    /// MR title, for reporting
    pub title: String,
    /// What went wrong
    pub error: Error,
}

/// Snapshots gathered for one project
#[derive(Debug)]
pub struct ProjectSnapshot {
    /// Project path as configured
    pub project: String,
    /// Assembled snapshots, in the order GitLab listed the MRs
    pub merge_requests: Vec<MergeRequest>,
    /// MRs that failed to assemble
    pub failures: Vec<ItemFailure>,
}

/// Outcome of gathering one project
#[derive(Debug)]
pub struct ProjectResult {
    /// Project path as configured
    pub project: String,
    /// Snapshots, or the error that prevented listing the project's MRs
    pub outcome: Result<ProjectSnapshot>,
}

async fn snapshot_merge_request(
    platform: &dyn PlatformService,
    project: &str,
    summary: MergeRequestSummary,
) -> std::result::Result<MergeRequest, ItemFailure> {
    let mr_iid = summary.iid;
    let fetched = tokio::try_join!(
        platform.list_awards(project, mr_iid),
        platform.list_discussions(project, mr_iid),
    );

    match fetched {
        Ok((awards, discussions)) => Ok(MergeRequest::from_parts(summary, awards, discussions)),
        Err(error) => {
            warn!(project, mr_iid, %error, "failed to fetch MR details");
            Err(ItemFailure {
                mr_iid,
                title: summary.title,
                error,
            })
        }
    }
}

/// Gather snapshots for every open MR of one project
pub async fn gather_project(
    platform: &dyn PlatformService,
    project: &str,
    concurrency: usize,
) -> Result<ProjectSnapshot> {
    let summaries = platform.list_open_merge_requests(project).await?;
    debug!(project, count = summaries.len(), "gathering MR snapshots");

    let results: Vec<_> = stream::iter(summaries)
        .map(|summary| snapshot_merge_request(platform, project, summary))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut merge_requests = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(mr) => merge_requests.push(mr),
            Err(failure) => failures.push(failure),
        }
    }

    Ok(ProjectSnapshot {
        project: project.to_string(),
        merge_requests,
        failures,
    })
}

/// Gather every project, one result per project in configured order
pub async fn gather_projects(
    platform: &dyn PlatformService,
    projects: &[String],
    concurrency: usize,
) -> Vec<ProjectResult> {
    stream::iter(projects)
        .map(|project| async move {
            let outcome = gather_project(platform, project, concurrency).await;
            if let Err(ref error) = outcome {
                warn!(project = %project, %error, "failed to gather project");
            }
            ProjectResult {
                project: project.clone(),
                outcome,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
