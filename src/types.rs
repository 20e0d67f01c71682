//! Core types for gitlab-mr

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Award emoji name GitLab uses for a thumbs-up reaction
pub const AWARD_THUMBS_UP: &str = "thumbsup";

/// A GitLab user, reduced to what triage needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Numeric user ID
    pub id: u64,
    /// Login handle (without the leading `@`)
    pub username: String,
}

/// A single note inside a discussion thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// ID of the note's author
    pub author_id: u64,
    /// Whether the note can be resolved at all
    pub resolvable: bool,
    /// Whether the note has been resolved
    pub resolved: bool,
}

/// A discussion thread: its notes in posting order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Discussion {
    /// GitLab discussion ID (opaque)
    pub id: String,
    /// Notes, oldest first
    pub notes: Vec<Note>,
}

/// An emoji reaction on a merge request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Award {
    /// Emoji name, e.g. `thumbsup`
    pub name: String,
    /// Who reacted
    pub user: User,
    /// When the reaction was made
    pub created_at: DateTime<Utc>,
}

/// A thumbs-up reaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Upvote {
    /// Who voted
    pub voter: User,
    /// When the vote was cast
    pub voted_at: DateTime<Utc>,
}

/// Merge request fields as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeRequestSummary {
    /// Project-scoped MR number (`!iid`)
    pub iid: u64,
    /// MR title
    pub title: String,
    /// Web URL for the MR
    pub web_url: String,
    /// MR description (empty when none)
    pub description: String,
    /// Creator of the MR
    pub author: User,
    /// Draft / work-in-progress marker
    pub work_in_progress: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Immutable snapshot of a merge request, ready for classification
///
/// Assembled once from the list record, its award events and its
/// discussions. Nothing in the review engine performs I/O against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeRequest {
    /// Project-scoped MR number (`!iid`)
    pub iid: u64,
    /// MR title
    pub title: String,
    /// Web URL for the MR
    pub web_url: String,
    /// MR description (empty when none)
    pub description: String,
    /// Creator of the MR
    pub author: User,
    /// Draft / work-in-progress marker
    pub work_in_progress: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Thumbs-up reactions, in the order GitLab reported them
    pub upvotes: Vec<Upvote>,
    /// Discussion threads
    pub discussions: Vec<Discussion>,
}

impl MergeRequest {
    /// Build a snapshot from its fetched parts.
    ///
    /// Only `thumbsup` awards become upvotes; every other reaction is dropped.
    pub fn from_parts(
        summary: MergeRequestSummary,
        awards: Vec<Award>,
        discussions: Vec<Discussion>,
    ) -> Self {
        let upvotes = awards
            .into_iter()
            .filter(|a| a.name == AWARD_THUMBS_UP)
            .map(|a| Upvote {
                voter: a.user,
                voted_at: a.created_at,
            })
            .collect();

        Self {
            iid: summary.iid,
            title: summary.title,
            web_url: summary.web_url,
            description: summary.description,
            author: summary.author,
            work_in_progress: summary.work_in_progress,
            created_at: summary.created_at,
            upvotes,
            discussions,
        }
    }
}
