//! Per-axis pair tables, the weighted blend, and normalization.

use dyad_core::profile::{Polarity, TraitProfile};
use dyad_core::quiz::Axis;

/// Blend weights; decision carries the most.
pub const COMMUNICATION_WEIGHT: f64 = 0.3;
pub const DECISION_WEIGHT: f64 = 0.4;
pub const RELATIONSHIP_WEIGHT: f64 = 0.3;

/// Attainable raw-blend bounds over the 729-pair universe.
///
/// Empirical for the tables below; the property suite re-derives the
/// true min/max across all pairs and asserts they still match.
pub const RAW_MIN: f64 = 46.0;
pub const RAW_SPAN: f64 = 54.0;

/// Complementarity table for the communication and relationship axes:
/// opposite extremes fit best, identical extremes worst.
pub fn complementarity(a: Polarity, b: Polarity) -> u8 {
    match (a, b) {
        (Polarity::High, Polarity::Low) | (Polarity::Low, Polarity::High) => 100,
        (Polarity::Neutral, Polarity::Neutral) => 80,
        (Polarity::Neutral, _) | (_, Polarity::Neutral) => 70,
        (Polarity::High, Polarity::High) | (Polarity::Low, Polarity::Low) => 50,
    }
}

/// Similarity table for the decision axis: agreement on method beats
/// everything, a hybrid bridges, opposite extremes clash.
pub fn similarity(a: Polarity, b: Polarity) -> u8 {
    match (a, b) {
        (Polarity::High, Polarity::High)
        | (Polarity::Low, Polarity::Low)
        | (Polarity::Neutral, Polarity::Neutral) => 100,
        (Polarity::Neutral, _) | (_, Polarity::Neutral) => 80,
        (Polarity::High, Polarity::Low) | (Polarity::Low, Polarity::High) => 40,
    }
}

/// 0..=100 sub-score for one axis of a type pair.
pub fn axis_pair_score(axis: Axis, a: TraitProfile, b: TraitProfile) -> u8 {
    match axis {
        Axis::Communication => {
            complementarity(a.communication.polarity(), b.communication.polarity())
        }
        Axis::Decision => similarity(a.decision.polarity(), b.decision.polarity()),
        Axis::Relationship => {
            complementarity(a.relationship.polarity(), b.relationship.polarity())
        }
    }
}

/// Weighted blend of the three axis sub-scores.
pub fn raw_blend(a: TraitProfile, b: TraitProfile) -> f64 {
    COMMUNICATION_WEIGHT * f64::from(axis_pair_score(Axis::Communication, a, b))
        + DECISION_WEIGHT * f64::from(axis_pair_score(Axis::Decision, a, b))
        + RELATIONSHIP_WEIGHT * f64::from(axis_pair_score(Axis::Relationship, a, b))
}

/// Rescale the raw blend's [46, 100] interval linearly onto [1, 100].
///
/// The final clamp is a safety bound against future table edits that
/// widen the true range.
pub fn normalize(raw: f64) -> u8 {
    let scaled = ((raw - RAW_MIN) / RAW_SPAN) * 99.0 + 1.0;
    scaled.round().clamp(1.0, 100.0) as u8
}

/// Normalized 1..=100 compatibility total for a type pair.
pub fn total_score(a: TraitProfile, b: TraitProfile) -> u8 {
    normalize(raw_blend(a, b))
}
