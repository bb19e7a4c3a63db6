//! Keyword-driven wellness assistant used by the dashboard chat widget.
//!
//! [`respond`] is a pure function of its input. [`ChatSession`] keeps the
//! transcript for one widget activation and is never persisted.

mod chat;
pub mod rules;

pub use chat::{ChatSession, GREETING};

use rules::RULES;

pub const FALLBACK_REPLY: &str =
    "I'm here for you. Could you tell me a bit more about how you're feeling?";

/// Topics whose rules fire for `input`, in rule order.
pub fn matched_topics(input: &str) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| rule.matches(input))
        .map(|rule| rule.topic)
        .collect()
}

/// Advice for every matching rule, space-joined in rule order, or
/// [`FALLBACK_REPLY`] when nothing matches.
pub fn respond(input: &str) -> String {
    let advice: Vec<&str> = RULES
        .iter()
        .filter(|rule| rule.matches(input))
        .map(|rule| rule.advice)
        .collect();

    if advice.is_empty() {
        FALLBACK_REPLY.to_string()
    } else {
        advice.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advice_for(topic: &str) -> &'static str {
        RULES
            .iter()
            .find(|rule| rule.topic == topic)
            .map(|rule| rule.advice)
            .unwrap()
    }

    #[test]
    fn anxious_and_sleepless_fires_both_in_order() {
        let input = "I feel anxious and can't sleep";
        assert_eq!(matched_topics(input), vec!["stress", "sleep"]);
        assert_eq!(
            respond(input),
            format!("{} {}", advice_for("stress"), advice_for("sleep"))
        );
    }

    #[test]
    fn no_match_yields_fallback() {
        assert!(matched_topics("xyz").is_empty());
        assert_eq!(respond("xyz"), FALLBACK_REPLY);
    }

    #[test]
    fn same_input_same_reply() {
        let input = "Work is overwhelming and I skip meals";
        assert_eq!(respond(input), respond(input));
    }

    #[test]
    fn order_follows_rules_not_input() {
        // "angry" appears first in the text but its rule is last.
        let input = "angry, lonely and stressed";
        assert_eq!(matched_topics(input), vec!["stress", "loneliness", "anger"]);
    }

    #[test]
    fn substring_matches_are_kept() {
        // "great" contains "eat".
        assert_eq!(matched_topics("feeling great"), vec!["diet"]);
    }
}
