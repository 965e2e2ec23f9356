//! Strength list: the one narrative list with a dynamic quota.

use dyad_core::profile::TraitProfile;
use dyad_core::quiz::Axis;
use dyad_scoring::compatibility::tables::axis_pair_score;

use super::{collect_matches, TextRule};
use crate::pairings;

/// Axis sub-score at or above which the generic per-axis template fires.
const AXIS_STRENGTH_THRESHOLD: u8 = 80;

const RULES: &[TextRule] = &[
    TextRule {
        when: pairings::doubly_complementary,
        text: "Your speaking and closeness styles both interlock, the rare pairing where each of you is strongest exactly where the other leans.",
    },
    TextRule {
        when: pairings::values_fully_aligned,
        text: "You agree on how to decide and how to be close, the two questions couples otherwise renegotiate for years.",
    },
    TextRule {
        when: pairings::comm_complementary,
        text: "One of you opens conversations and the other deepens them, so nothing important goes unsaid or unheard.",
    },
    TextRule {
        when: pairings::decision_opposed,
        text: "Between analysis and instinct you hold both halves of good judgment.",
    },
    TextRule {
        when: pairings::rel_complementary,
        text: "One anchors and one explores, giving the relationship both roots and reach.",
    },
    TextRule {
        when: pairings::comm_both_balanced,
        text: "You can each take either side of a conversation, which makes the hard ones shorter.",
    },
    TextRule {
        when: pairings::decision_both_flexible,
        text: "Neither of you is wedded to a method, so plans bend instead of breaking.",
    },
    TextRule {
        when: pairings::rel_both_adaptive,
        text: "You both tune closeness to what the moment needs rather than to a fixed setting.",
    },
    TextRule {
        when: pairings::rel_both_devoted,
        text: "You both show up in full, and neither ever doubts being the priority.",
    },
];

fn axis_template(axis: Axis) -> &'static str {
    match axis {
        Axis::Communication => {
            "Day to day, your communication styles reinforce each other more than they collide."
        }
        Axis::Decision => "Your decision-making styles pull in compatible directions under pressure.",
        Axis::Relationship => "Your instincts about closeness and distance rarely conflict.",
    }
}

/// Strengths for the pair, `quota` entries at most, never empty.
pub fn strengths(
    user: TraitProfile,
    partner: TraitProfile,
    total: u8,
    quota: usize,
) -> Vec<String> {
    let mut list = collect_matches(RULES, user, partner, quota);

    // Step 2: generic per-axis templates fill whatever quota remains.
    for axis in Axis::ALL {
        if list.len() >= quota {
            break;
        }
        if axis_pair_score(axis, user, partner) >= AXIS_STRENGTH_THRESHOLD {
            list.push(axis_template(axis).to_string());
        }
    }

    // Step 3: numeric summary guarantees the list is never empty.
    if list.is_empty() {
        list.push(format!(
            "At {total} out of 100, this pairing has workable common ground to build from."
        ));
    }
    list
}
