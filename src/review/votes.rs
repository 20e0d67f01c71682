//! Thumbs-up tally

use crate::types::{Upvote, User};
use chrono::{DateTime, Utc};

/// Label used in vote history for the current user's own vote
pub const SELF_LABEL: &str = "You";

/// One entry of the vote history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteEntry {
    /// `You` for the current user, otherwise the voter's handle
    pub label: String,
    /// When the vote was cast
    pub voted_at: DateTime<Utc>,
}

/// Votes on one merge request as seen by the current user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    /// Number of thumbs-up reactions (the author's own included)
    pub count: usize,
    /// Whether the current user is among the voters
    pub i_liked: bool,
    /// Voters in reaction order
    pub history: Vec<VoteEntry>,
}

/// Tally upvotes in a single pass so count and `i_liked` always agree.
pub fn tally_votes(upvotes: &[Upvote], current_user: &User) -> VoteTally {
    let mut i_liked = false;
    let history = upvotes
        .iter()
        .map(|vote| {
            let label = if vote.voter.id == current_user.id {
                i_liked = true;
                SELF_LABEL.to_string()
            } else {
                vote.voter.username.clone()
            };
            VoteEntry {
                label,
                voted_at: vote.voted_at,
            }
        })
        .collect::<Vec<_>>();

    VoteTally {
        count: history.len(),
        i_liked,
        history,
    }
}
