//! Discussion bucketing
//!
//! Each discussion lands in exactly one of three buckets depending on
//! whether the conversation currently waits on the current user.

use crate::types::Discussion;

/// Where a single discussion stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscussionState {
    /// A note in the thread is resolved
    Resolved,
    /// The current user took part and someone else spoke last
    New,
    /// Anything else: waiting on others, or not actionable
    Wait,
}

/// Discussions of one merge request, split by [`DiscussionState`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscussionBuckets<'a> {
    /// Resolved threads
    pub resolved: Vec<&'a Discussion>,
    /// Threads awaiting the current user
    pub new: Vec<&'a Discussion>,
    /// Threads awaiting someone else
    pub wait: Vec<&'a Discussion>,
}

impl DiscussionBuckets<'_> {
    /// Total number of discussions bucketed
    pub fn len(&self) -> usize {
        self.resolved.len() + self.new.len() + self.wait.len()
    }

    /// Whether no discussions were bucketed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify one discussion.
///
/// Notes are scanned in order and the first decisive note wins: a
/// non-resolvable note ends the scan as [`DiscussionState::Wait`], a resolved
/// note ends it as [`DiscussionState::Resolved`]. The order matters; do not
/// replace this with an order-independent aggregate.
pub fn classify_discussion(discussion: &Discussion, current_user_id: u64) -> DiscussionState {
    let mut notable = false;
    let mut me_involved = false;

    for note in &discussion.notes {
        if !note.resolvable {
            return DiscussionState::Wait;
        }
        if note.resolved {
            return DiscussionState::Resolved;
        }

        // `notable` tracks only the latest note's author
        if note.author_id == current_user_id {
            notable = false;
            me_involved = true;
        } else {
            notable = true;
        }
    }

    if notable && me_involved {
        DiscussionState::New
    } else {
        DiscussionState::Wait
    }
}

/// Split discussions into resolved / new / wait buckets, preserving order.
pub fn classify_discussions(
    discussions: &[Discussion],
    current_user_id: u64,
) -> DiscussionBuckets<'_> {
    let mut buckets = DiscussionBuckets::default();

    for discussion in discussions {
        match classify_discussion(discussion, current_user_id) {
            DiscussionState::Resolved => buckets.resolved.push(discussion),
            DiscussionState::New => buckets.new.push(discussion),
            DiscussionState::Wait => buckets.wait.push(discussion),
        }
    }

    buckets
}
