//! Threshold classification: axis sums to a trait profile, then to a
//! personality type via the catalog.

use tracing::warn;

use dyad_core::catalog::{synthesize_type, TypeCatalog};
use dyad_core::models::{AxisScores, PersonalityType};
use dyad_core::profile::{Polarity, TraitProfile};
use dyad_core::quiz::QuestionSetSize;

/// Classify three raw axis sums into a trait profile.
///
/// Pure and total: any triple of integers maps to some profile. The
/// boundary magnitude scales with the set size (3 for 18 questions,
/// 9 for 54); a sum exactly equal to the threshold stays neutral,
/// leaving it takes a strict inequality.
pub fn classify(scores: AxisScores, size: QuestionSetSize) -> TraitProfile {
    let threshold = size.classify_threshold();
    TraitProfile::from_polarities(
        polarity_for(scores.communication, threshold),
        polarity_for(scores.decision, threshold),
        polarity_for(scores.relationship, threshold),
    )
}

fn polarity_for(score: i32, threshold: i32) -> Polarity {
    if score > threshold {
        Polarity::High
    } else if score < -threshold {
        Polarity::Low
    } else {
        Polarity::Neutral
    }
}

/// Resolve a profile against the catalog, synthesizing an equivalent
/// type when the entry is absent.
///
/// The 27-code universe is closed, so a miss means the injected
/// catalog is incomplete; the synthesized type keeps downstream
/// consumers working and the gap is logged instead of surfaced.
pub fn resolve(profile: TraitProfile, catalog: &TypeCatalog) -> PersonalityType {
    match catalog.get(profile.code()) {
        Some(entry) => entry.clone(),
        None => {
            warn!(code = %profile.code(), "type catalog miss, synthesizing");
            synthesize_type(profile)
        }
    }
}
