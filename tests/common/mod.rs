//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::MockPlatformService;

use chrono::{DateTime, Utc};
use gitlab_mr::types::{
    Award, Discussion, MergeRequest, MergeRequestSummary, Note, Upvote, User,
};

/// ID of the user the tests run as
pub const ME: u64 = 1;
/// ID of another user
pub const BOB: u64 = 2;
/// ID of a third user
pub const CAROL: u64 = 3;

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub fn user(id: u64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
    }
}

pub fn me() -> User {
    user(ME, "me")
}

pub fn bob() -> User {
    user(BOB, "bob")
}

pub fn carol() -> User {
    user(CAROL, "carol")
}

/// Resolvable, unresolved note
pub fn open_note(author_id: u64) -> Note {
    Note {
        author_id,
        resolvable: true,
        resolved: false,
    }
}

pub fn resolved_note(author_id: u64) -> Note {
    Note {
        author_id,
        resolvable: true,
        resolved: true,
    }
}

/// Plain comment that cannot be resolved
pub fn comment_note(author_id: u64) -> Note {
    Note {
        author_id,
        resolvable: false,
        resolved: false,
    }
}

pub fn discussion(notes: Vec<Note>) -> Discussion {
    Discussion {
        id: format!("d{}", notes.len()),
        notes,
    }
}

/// Discussion that classifies as `new` for [`ME`]
pub fn new_discussion() -> Discussion {
    discussion(vec![open_note(BOB), open_note(ME), open_note(BOB)])
}

/// Discussion that classifies as `wait` for [`ME`]
pub fn wait_discussion() -> Discussion {
    discussion(vec![open_note(BOB), open_note(ME)])
}

pub fn upvote(voter: &User) -> Upvote {
    Upvote {
        voter: voter.clone(),
        voted_at: ts("2024-05-01T09:00:00Z"),
    }
}

pub fn award(name: &str, voter: &User) -> Award {
    Award {
        name: name.to_string(),
        user: voter.clone(),
        created_at: ts("2024-05-01T09:00:00Z"),
    }
}

pub fn make_summary(iid: u64, author: &User) -> MergeRequestSummary {
    MergeRequestSummary {
        iid,
        title: format!("MR {iid}"),
        web_url: format!("https://gitlab.example.com/group/app/-/merge_requests/{iid}"),
        description: String::new(),
        author: author.clone(),
        work_in_progress: false,
        created_at: ts("2024-04-30T08:00:00Z"),
    }
}

/// Ready MR without votes or discussions
pub fn make_mr(iid: u64, author: &User) -> MergeRequest {
    MergeRequest::from_parts(make_summary(iid, author), vec![], vec![])
}
