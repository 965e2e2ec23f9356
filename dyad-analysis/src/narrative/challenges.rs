//! Challenge list: capped at three, never empty.

use dyad_core::profile::TraitProfile;
use dyad_core::quiz::Axis;
use dyad_scoring::compatibility::tables::axis_pair_score;

use super::{collect_matches, TextRule, LIST_CAP};
use crate::pairings;

/// Axis sub-score at or below which the generic friction template fires.
const AXIS_FRICTION_THRESHOLD: u8 = 60;

const RULES: &[TextRule] = &[
    TextRule {
        when: pairings::comm_both_assertive,
        text: "You can both talk past the point where one of you should be listening.",
    },
    TextRule {
        when: pairings::comm_both_receptive,
        text: "Important topics can stall while each of you waits for the other to raise them.",
    },
    TextRule {
        when: pairings::decision_opposed,
        text: "Evidence and instinct will sometimes return different verdicts on the same question, with each of you certain.",
    },
    TextRule {
        when: pairings::rel_both_independent,
        text: "With both of you guarding space, closeness can quietly fall to whoever misses it first.",
    },
    TextRule {
        when: pairings::rel_both_devoted,
        text: "All-in from both sides leaves nobody minding the exits when one of you needs air.",
    },
    TextRule {
        when: pairings::decision_same_extreme,
        text: "You share one decision-making blind spot, and nothing in the pairing corrects for it.",
    },
];

fn axis_template(axis: Axis) -> &'static str {
    match axis {
        Axis::Communication => {
            "When you disagree about the disagreement itself, the conversation needs more structure than either of you defaults to."
        }
        Axis::Decision => "Joint decisions will take longer than either of you would take alone.",
        Axis::Relationship => {
            "Your default settings for time together and time apart need explicit syncing."
        }
    }
}

/// Challenges for the pair, at most three, never empty.
pub fn challenges(user: TraitProfile, partner: TraitProfile) -> Vec<String> {
    let mut list = collect_matches(RULES, user, partner, LIST_CAP);

    for axis in Axis::ALL {
        if list.len() >= LIST_CAP {
            break;
        }
        if axis_pair_score(axis, user, partner) <= AXIS_FRICTION_THRESHOLD {
            list.push(axis_template(axis).to_string());
        }
    }

    if list.is_empty() {
        list.push(
            "Nothing structural stands out; the risks here are the ordinary ones of drift and assumption."
                .to_string(),
        );
    }
    list
}
