//! Conversation starters: questions keyed to the pairing, with a
//! score-band question as the guaranteed entry.

use dyad_core::profile::TraitProfile;

use super::{collect_matches, TextRule, LIST_CAP};
use crate::pairings;

const RULES: &[TextRule] = &[
    TextRule {
        when: pairings::decision_opposed,
        text: "Tell each other about a time your own way of deciding got it wrong.",
    },
    TextRule {
        when: pairings::comm_complementary,
        text: "Which conversations do you each wish the other would start?",
    },
    TextRule {
        when: pairings::rel_complementary,
        text: "What does a perfect weekend look like when you each plan it alone?",
    },
    TextRule {
        when: pairings::rel_both_independent,
        text: "What kind of togetherness never feels like a cost to you?",
    },
    TextRule {
        when: pairings::comm_both_assertive,
        text: "What have you each been waiting for the other to finish saying?",
    },
    TextRule {
        when: pairings::values_fully_aligned,
        text: "Where did each of you learn the priorities you share?",
    },
];

fn band_starter(total: u8) -> &'static str {
    match total {
        70.. => "What should the two of you attempt that neither would attempt alone?",
        40.. => "What is one thing the other does that you would like to understand better?",
        _ => "Which first impression of each other turned out to be wrong?",
    }
}

/// Conversation starters for the pair, at most three, never empty.
pub fn conversation_starters(
    user: TraitProfile,
    partner: TraitProfile,
    total: u8,
) -> Vec<String> {
    let mut list = collect_matches(RULES, user, partner, LIST_CAP);
    if list.len() < LIST_CAP {
        list.push(band_starter(total).to_string());
    }
    list
}
