//! Review engine: classify a merge request into the next action
//!
//! Two-phase pattern:
//! 1. Gather - assemble immutable `MergeRequest` snapshots (see `gather`)
//! 2. Review - bucket discussions, tally votes, decide (pure, this module)

mod action;
mod decide;
mod discussions;
mod votes;

pub use action::{Action, NOTABLE_ACTIONS, WAIT_ACTIONS};
pub use decide::{APPROVAL_THRESHOLD, decide};
pub use discussions::{
    DiscussionBuckets, DiscussionState, classify_discussion, classify_discussions,
};
pub use votes::{SELF_LABEL, VoteEntry, VoteTally, tally_votes};

use crate::types::{MergeRequest, User};

/// A merge request evaluated for one user
///
/// Discussion buckets and the vote tally are computed exactly once when the
/// review is built and live as long as the borrowed snapshot. A fresh
/// snapshot needs a fresh `Review`.
#[derive(Debug, Clone)]
pub struct Review<'a> {
    merge_request: &'a MergeRequest,
    current_user: &'a User,
    buckets: DiscussionBuckets<'a>,
    votes: VoteTally,
    action: Action,
}

impl<'a> Review<'a> {
    /// Evaluate `merge_request` from the point of view of `current_user`
    pub fn new(merge_request: &'a MergeRequest, current_user: &'a User) -> Self {
        let buckets = classify_discussions(&merge_request.discussions, current_user.id);
        let votes = tally_votes(&merge_request.upvotes, current_user);
        let action = decide(
            merge_request.work_in_progress,
            merge_request.author.id == current_user.id,
            &buckets,
            votes.count,
            votes.i_liked,
        );

        Self {
            merge_request,
            current_user,
            buckets,
            votes,
            action,
        }
    }

    /// The snapshot under review
    pub const fn merge_request(&self) -> &'a MergeRequest {
        self.merge_request
    }

    /// Discussions split by state
    pub const fn discussions(&self) -> &DiscussionBuckets<'a> {
        &self.buckets
    }

    /// Thumbs-up tally
    pub const fn votes(&self) -> &VoteTally {
        &self.votes
    }

    /// Suggested next action
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Whether the current user authored the MR
    pub fn is_mine(&self) -> bool {
        self.merge_request.author.id == self.current_user.id
    }

    /// Author handle, prefixed with `You` for the current user's own MRs
    pub fn author_label(&self) -> String {
        let username = &self.merge_request.author.username;
        if self.is_mine() {
            format!("{SELF_LABEL} ({username})")
        } else {
            username.clone()
        }
    }
}

/// Decide the next action for a snapshot without keeping the intermediates
pub fn evaluate(merge_request: &MergeRequest, current_user: &User) -> Action {
    Review::new(merge_request, current_user).action()
}
