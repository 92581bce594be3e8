//! Poll Math
//!
//! Vote shares and vote discovery for the poll widget.

use chrono::{DateTime, Utc};

use crate::models::Poll;

pub fn total_votes(poll: &Poll) -> usize {
    poll.options.iter().map(|o| o.votes.len()).sum()
}

/// Rounded vote share; zero total gives 0% for every option
pub fn percentage(poll: &Poll, option_index: usize) -> u32 {
    let total = total_votes(poll);
    if total == 0 {
        return 0;
    }
    let votes = match poll.options.get(option_index) {
        Some(option) => option.votes.len(),
        None => return 0,
    };
    ((votes as f64 / total as f64) * 100.0).round() as u32
}

/// Index of the option the user voted for, by linear scan of each option's
/// voter set. First match wins; see [`has_ambiguous_vote`] for the case
/// where the backend recorded more than one.
pub fn user_vote(poll: &Poll, user_id: &str) -> Option<usize> {
    poll.options
        .iter()
        .position(|option| option.votes.iter().any(|v| v == user_id))
}

/// True when the user id appears in more than one voter set; the widget
/// logs this as a backend inconsistency instead of silently preserving it.
pub fn has_ambiguous_vote(poll: &Poll, user_id: &str) -> bool {
    poll.options
        .iter()
        .filter(|option| option.votes.iter().any(|v| v == user_id))
        .count()
        > 1
}

pub fn is_expired(poll: &Poll, now: DateTime<Utc>) -> bool {
    matches!(poll.expires_at, Some(expiry) if expiry <= now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PollOption;
    use chrono::TimeZone;

    fn make_poll(options: &[(&str, &[&str])]) -> Poll {
        Poll {
            id: "poll1".to_string(),
            question: "Which?".to_string(),
            options: options
                .iter()
                .map(|(text, votes)| PollOption {
                    text: text.to_string(),
                    votes: votes.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
            expires_at: None,
        }
    }

    #[test]
    fn test_zero_total_gives_zero_everywhere() {
        let poll = make_poll(&[("A", &[]), ("B", &[]), ("C", &[])]);
        for i in 0..poll.options.len() {
            assert_eq!(percentage(&poll, i), 0);
        }
    }

    #[test]
    fn test_single_vote_splits_100_0() {
        let poll = make_poll(&[("A", &["u1"]), ("B", &[])]);
        assert_eq!(total_votes(&poll), 1);
        assert_eq!(percentage(&poll, 0), 100);
        assert_eq!(percentage(&poll, 1), 0);
    }

    #[test]
    fn test_percentages_round() {
        let poll = make_poll(&[("A", &["u1", "u2"]), ("B", &["u3"])]);
        assert_eq!(percentage(&poll, 0), 67);
        assert_eq!(percentage(&poll, 1), 33);
    }

    #[test]
    fn test_out_of_range_option_is_zero() {
        let poll = make_poll(&[("A", &["u1"])]);
        assert_eq!(percentage(&poll, 5), 0);
    }

    #[test]
    fn test_user_vote_first_match_wins() {
        let poll = make_poll(&[("A", &["u2"]), ("B", &["u1"]), ("C", &["u1"])]);
        assert_eq!(user_vote(&poll, "u1"), Some(1));
        assert_eq!(user_vote(&poll, "u2"), Some(0));
        assert_eq!(user_vote(&poll, "u9"), None);
    }

    #[test]
    fn test_ambiguous_vote_detection() {
        let poll = make_poll(&[("A", &["u1"]), ("B", &["u1"])]);
        assert!(has_ambiguous_vote(&poll, "u1"));
        let clean = make_poll(&[("A", &["u1"]), ("B", &["u2"])]);
        assert!(!has_ambiguous_vote(&clean, "u1"));
    }

    #[test]
    fn test_expiry() {
        let mut poll = make_poll(&[("A", &[])]);
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert!(!is_expired(&poll, now));
        poll.expires_at = Some(now - chrono::Duration::hours(1));
        assert!(is_expired(&poll, now));
        poll.expires_at = Some(now + chrono::Duration::hours(1));
        assert!(!is_expired(&poll, now));
    }
}
