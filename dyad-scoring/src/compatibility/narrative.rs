//! Generated message, detail, and advice text for a type pair.
//!
//! Text generation is rule-based and deterministic. Authored override
//! entries shadow `message_for`/`detail_for` but never the advice.

use dyad_core::profile::{CommunicationStyle, DecisionStyle, RelationshipStyle, TraitProfile};
use dyad_core::quiz::Axis;

use super::tables;

/// Headline for a score band.
pub fn message_for(total: u8) -> &'static str {
    match total {
        95..=100 => "A once-in-a-generation match: your differences slot together almost perfectly.",
        85..=94 => "An exceptional pairing with a rare natural fit.",
        70..=84 => "A strong match: your styles support each other more than they collide.",
        55..=69 => "A solid match with clear strengths and a few edges to sand down.",
        40..=54 => "A workable match that will ask for deliberate effort.",
        _ => "A challenging pairing: what grows here is earned, not given.",
    }
}

/// How the three axes interact for this pair, one clause per axis.
pub fn detail_for(a: TraitProfile, b: TraitProfile) -> String {
    format!(
        "In conversation, {}. Around decisions, {}. In closeness, {}.",
        communication_relation(a.communication, b.communication),
        decision_relation(a.decision, b.decision),
        relationship_relation(a.relationship, b.relationship)
    )
}

fn communication_relation(a: CommunicationStyle, b: CommunicationStyle) -> &'static str {
    use CommunicationStyle::*;
    match (a, b) {
        (Assertive, Receptive) | (Receptive, Assertive) => {
            "your styles complete each other: one opens topics, the other deepens them"
        }
        (Balanced, Balanced) => "you both adjust how you talk to fit the moment",
        (Assertive, Assertive) => "you both reach for the microphone first",
        (Receptive, Receptive) => "you both tend to wait for the other to open",
        (Assertive, Balanced) | (Balanced, Assertive) => {
            "one of you sets the pace while the other flexes around it"
        }
        (Receptive, Balanced) | (Balanced, Receptive) => {
            "one of you listens deeply while the other keeps the exchange moving"
        }
    }
}

fn decision_relation(a: DecisionStyle, b: DecisionStyle) -> &'static str {
    use DecisionStyle::*;
    match (a, b) {
        (Logical, Logical) => "you both anchor choices in evidence",
        (Intuitive, Intuitive) => "you both trust the gut and move",
        (Flexible, Flexible) => "you both keep options open until the path is clear",
        (Logical, Intuitive) | (Intuitive, Logical) => {
            "head and gut pull your decisions in different directions"
        }
        (Flexible, _) | (_, Flexible) => {
            "one of you adapts the method to whatever the other brings"
        }
    }
}

fn relationship_relation(a: RelationshipStyle, b: RelationshipStyle) -> &'static str {
    use RelationshipStyle::*;
    match (a, b) {
        (Independent, Devoted) | (Devoted, Independent) => {
            "one guards the shared nest while the other scouts ahead"
        }
        (Adaptive, Adaptive) => "you both tune closeness to the season you are in",
        (Independent, Independent) => "you each keep an orbit of your own",
        (Devoted, Devoted) => "you both pour yourselves into the shared world",
        (Adaptive, _) | (_, Adaptive) => "one of you bends around the other's need for space",
    }
}

/// Advice for one side of the pair.
///
/// Keyed on the pair's weakest axis (ties resolve in block order) and
/// the addressee's own trait on that axis. When no axis scores below
/// 80 there is nothing to repair and the advice turns to upkeep.
pub fn advice_for(own: TraitProfile, other: TraitProfile) -> String {
    let mut axis = Axis::Communication;
    let mut low = tables::axis_pair_score(axis, own, other);
    for candidate in [Axis::Decision, Axis::Relationship] {
        let score = tables::axis_pair_score(candidate, own, other);
        // Strict comparison keeps the earlier axis on ties.
        if score < low {
            axis = candidate;
            low = score;
        }
    }
    if low >= 80 {
        return upkeep_advice().to_string();
    }
    match axis {
        Axis::Communication => match own.communication {
            CommunicationStyle::Assertive => {
                "Leave pauses your partner can step into; count to three before filling a silence."
            }
            CommunicationStyle::Receptive => {
                "Say the half-formed thought out loud; your partner cannot meet what stays unsaid."
            }
            CommunicationStyle::Balanced => {
                "Name which mode you are in, listening or steering, so your partner can find you."
            }
        },
        Axis::Decision => match own.decision {
            DecisionStyle::Logical => "Show your working early instead of presenting a verdict.",
            DecisionStyle::Intuitive => {
                "Give your no a sentence of explanation, even when the feeling resists words."
            }
            DecisionStyle::Flexible => {
                "Commit to a deadline on the choices that matter most to your partner."
            }
        },
        Axis::Relationship => match own.relationship {
            RelationshipStyle::Independent => {
                "Announce solo time instead of just taking it; absence lands softer with a label."
            }
            RelationshipStyle::Devoted => {
                "Keep one corner of your week that is only yours; it feeds the hours you share."
            }
            RelationshipStyle::Adaptive => {
                "State a preference of your own each day; accommodating is not the same as agreeing."
            }
        },
    }
    .to_string()
}

fn upkeep_advice() -> &'static str {
    "Your styles already mesh; protect the small rituals that got you here."
}
