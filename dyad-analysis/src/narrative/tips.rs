//! Improvement tips: actionable, capped at three, never empty.

use dyad_core::profile::TraitProfile;
use dyad_core::quiz::Axis;
use dyad_scoring::compatibility::tables::axis_pair_score;

use super::{collect_matches, TextRule, LIST_CAP};
use crate::pairings;

const AXIS_FRICTION_THRESHOLD: u8 = 60;

const RULES: &[TextRule] = &[
    TextRule {
        when: pairings::comm_both_assertive,
        text: "Trade the floor deliberately: whoever spoke first last time listens first this time.",
    },
    TextRule {
        when: pairings::comm_both_receptive,
        text: "Put the awkward topic on the calendar; naming a time beats waiting for the mood.",
    },
    TextRule {
        when: pairings::decision_opposed,
        text: "When verdicts differ, swap methods for a round: the analyst argues from feel, the intuitive builds the case.",
    },
    TextRule {
        when: pairings::rel_both_independent,
        text: "Book the together time like a flight: fixed, paid for, non-refundable.",
    },
    TextRule {
        when: pairings::rel_both_devoted,
        text: "Schedule time apart on purpose so it never has to be taken.",
    },
    TextRule {
        when: pairings::decision_both_flexible,
        text: "Two flexible deciders still need one decision log; write down what you actually chose.",
    },
];

fn axis_template(axis: Axis) -> &'static str {
    match axis {
        Axis::Communication => {
            "Agree on a signal either of you can throw when a talk stops being productive."
        }
        Axis::Decision => {
            "For big calls, give each style its own stage: facts first, feel second, decision third."
        }
        Axis::Relationship => {
            "Compare calendars weekly so neither closeness nor distance happens by accident."
        }
    }
}

/// Improvement tips for the pair, at most three, never empty.
pub fn improvement_tips(user: TraitProfile, partner: TraitProfile) -> Vec<String> {
    let mut list = collect_matches(RULES, user, partner, LIST_CAP);

    for axis in Axis::ALL {
        if list.len() >= LIST_CAP {
            break;
        }
        if axis_pair_score(axis, user, partner) <= AXIS_FRICTION_THRESHOLD {
            list.push(axis_template(axis).to_string());
        }
    }

    // The check-in tip is the universal floor.
    if list.is_empty() {
        list.push("Set a regular check-in to talk about how you are both doing.".to_string());
    }
    list
}
