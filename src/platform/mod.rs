//! Platform services for GitLab
//!
//! Provides the read-only interface the review engine's inputs are fetched
//! through.

mod gitlab;

pub use gitlab::{GitLabService, normalize_host};

use crate::error::Result;
use crate::types::{Award, Discussion, MergeRequestSummary, User};
use async_trait::async_trait;

/// Platform service trait for MR triage
///
/// Abstracts the hosting platform so snapshot gathering can run against
/// GitLab or a test double.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// The user the token belongs to
    ///
    /// Fails with [`Error::AuthExpired`](crate::error::Error::AuthExpired)
    /// when the token is rejected.
    async fn current_user(&self) -> Result<User>;

    /// List open MRs of a project (`group/name` path)
    async fn list_open_merge_requests(&self, project: &str) -> Result<Vec<MergeRequestSummary>>;

    /// List emoji reactions on an MR
    async fn list_awards(&self, project: &str, mr_iid: u64) -> Result<Vec<Award>>;

    /// List discussion threads (with notes) on an MR
    async fn list_discussions(&self, project: &str, mr_iid: u64) -> Result<Vec<Discussion>>;
}
