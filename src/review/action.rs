//! Action taxonomy - what to do next with a merge request

/// The single next step suggested for a merge request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Author has discussions awaiting their reply
    ResolveDiscussions,
    /// Merge conflicts need resolving.
    ///
    /// Never produced by [`decide`](crate::review::decide); kept so the
    /// taxonomy and its filters stay stable.
    ResolveConflicts,
    /// Reviewer has discussions awaiting their reply
    ResolveOrDiscuss,
    /// Author can merge
    Merge,
    /// Reviewer has not reviewed yet
    Review,
    /// Author waits for approvals
    WaitReview,
    /// Someone else has to answer open discussions
    WaitResolve,
    /// Reviewer liked it, others still need to
    WaitOthers,
    /// MR is still a draft
    WaitFinish,
    /// Reviewer should nudge the author to merge
    TellMerge,
}

/// Actions that need attention now
pub const NOTABLE_ACTIONS: [Action; 5] = [
    Action::ResolveDiscussions,
    Action::ResolveConflicts,
    Action::ResolveOrDiscuss,
    Action::Merge,
    Action::Review,
];

/// Passive actions: someone else has the ball
pub const WAIT_ACTIONS: [Action; 4] = [
    Action::WaitFinish,
    Action::WaitOthers,
    Action::WaitResolve,
    Action::WaitReview,
];

impl Action {
    /// Every variant, in declaration order
    pub const ALL: [Self; 10] = [
        Self::ResolveDiscussions,
        Self::ResolveConflicts,
        Self::ResolveOrDiscuss,
        Self::Merge,
        Self::Review,
        Self::WaitReview,
        Self::WaitResolve,
        Self::WaitOthers,
        Self::WaitFinish,
        Self::TellMerge,
    ];

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::ResolveDiscussions => "Resolve Discussions",
            Self::ResolveConflicts => "Resolve Conflicts",
            Self::ResolveOrDiscuss => "Resolve or Discuss",
            Self::Merge => "MERGE",
            Self::Review => "Do Review ASAP",
            Self::WaitReview => "Wait for Review",
            Self::WaitResolve => "Wait for Resolve",
            Self::WaitOthers => "Wait for others",
            Self::WaitFinish => "Wait for Resolve WIP",
            Self::TellMerge => "Tell to Merge",
        }
    }

    /// Whether this action is in [`NOTABLE_ACTIONS`]
    pub fn is_notable(self) -> bool {
        NOTABLE_ACTIONS.contains(&self)
    }

    /// Whether this action is in [`WAIT_ACTIONS`]
    pub fn is_wait(self) -> bool {
        WAIT_ACTIONS.contains(&self)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
