//! Action decision - pure function from review state to one [`Action`]
//!
//! No I/O happens here. All inputs are computed beforehand from a
//! merge request snapshot, which keeps every branch easy to unit test.

use crate::review::action::Action;
use crate::review::discussions::DiscussionBuckets;

/// Thumbs-up count at which a merge request counts as approved
pub const APPROVAL_THRESHOLD: usize = 2;

/// Decide the next action (PURE - first matching rule wins)
///
/// 1. Drafts always wait for the author to finish.
/// 2. On your own MR: answer new discussions, wait on open ones, then merge
///    once approved or wait for reviews.
/// 3. On someone else's MR: answer new discussions, wait on open ones,
///    review if you have not liked it yet, then nudge the author to merge
///    once approved or wait for other reviewers.
#[allow(clippy::fn_params_excessive_bools)]
pub fn decide(
    work_in_progress: bool,
    is_author: bool,
    buckets: &DiscussionBuckets<'_>,
    vote_count: usize,
    i_liked: bool,
) -> Action {
    if work_in_progress {
        return Action::WaitFinish;
    }

    if is_author {
        if !buckets.new.is_empty() {
            Action::ResolveDiscussions
        } else if !buckets.wait.is_empty() {
            Action::WaitResolve
        } else if vote_count < APPROVAL_THRESHOLD {
            Action::WaitReview
        } else {
            Action::Merge
        }
    } else if !buckets.new.is_empty() {
        Action::ResolveOrDiscuss
    } else if !buckets.wait.is_empty() {
        Action::WaitResolve
    } else if !i_liked {
        Action::Review
    } else if vote_count >= APPROVAL_THRESHOLD {
        Action::TellMerge
    } else {
        Action::WaitOthers
    }
}
