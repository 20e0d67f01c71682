//! Text formatting for merge request fields

use chrono::{DateTime, Local, TimeDelta, Utc};
use chrono_humanize::HumanTime;
use gitlab_mr::review::VoteTally;

/// Age at which an MR's creation time is highlighted
pub const STALE_AFTER_DAYS: i64 = 3;

/// Describe how long ago `then` was, relative to `now`.
///
/// Times in the future read as "now".
pub fn humanize(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    HumanTime::from((then - now).min(TimeDelta::zero())).to_string()
}

/// Whether an MR created at `created_at` is old enough to flag
pub fn is_stale(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - created_at >= TimeDelta::days(STALE_AFTER_DAYS)
}

/// `dd.mm HH:MM (age)` in local time
pub fn created_at_text(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let local = created_at.with_timezone(&Local);
    format!(
        "{} ({})",
        local.format("%d.%m %H:%M"),
        humanize(created_at, now)
    )
}

/// `N [voter(age), ...]`, or just `0` when nobody voted
pub fn likes_text(votes: &VoteTally, now: DateTime<Utc>) -> String {
    if votes.count == 0 {
        return "0".to_string();
    }

    let voters = votes
        .history
        .iter()
        .map(|vote| format!("{}({})", vote.label, humanize(vote.voted_at, now)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} [{voters}]", votes.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitlab_mr::review::VoteEntry;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn ago(delta: TimeDelta) -> DateTime<Utc> {
        now() - delta
    }

    #[test]
    fn test_humanize_buckets() {
        assert_eq!(humanize(ago(TimeDelta::seconds(3)), now()), "now");
        assert_eq!(humanize(ago(TimeDelta::minutes(20)), now()), "20 minutes ago");
        assert_eq!(humanize(ago(TimeDelta::minutes(60)), now()), "an hour ago");
        assert_eq!(humanize(ago(TimeDelta::hours(5)), now()), "5 hours ago");
        assert_eq!(humanize(ago(TimeDelta::hours(30)), now()), "a day ago");
        assert_eq!(humanize(ago(TimeDelta::days(4)), now()), "4 days ago");
    }

    #[test]
    fn test_humanize_future_is_now() {
        assert_eq!(humanize(now() + TimeDelta::hours(1), now()), "now");
    }

    #[test]
    fn test_stale_after_three_days() {
        assert!(!is_stale(ago(TimeDelta::hours(71)), now()));
        assert!(is_stale(ago(TimeDelta::days(3)), now()));
    }

    #[test]
    fn test_likes_text() {
        assert_eq!(likes_text(&VoteTally::default(), now()), "0");

        let votes = VoteTally {
            count: 2,
            i_liked: true,
            history: vec![
                VoteEntry {
                    label: "You".to_string(),
                    voted_at: ago(TimeDelta::hours(3)),
                },
                VoteEntry {
                    label: "bob".to_string(),
                    voted_at: ago(TimeDelta::hours(30)),
                },
            ],
        };
        assert_eq!(
            likes_text(&votes, now()),
            "2 [You(3 hours ago), bob(a day ago)]"
        );
    }
}
