//! Narrative list generation: strengths, challenges, improvement tips,
//! conversation starters, and the closing line.
//!
//! Every list comes from the same cascade shape: ordered specific
//! trait-pair rules, then generic per-axis threshold templates, then a
//! fallback that keeps the list from ever being empty. Only the
//! strength count is dynamic; the other lists are capped at three.

pub mod challenges;
pub mod closing;
pub mod starters;
pub mod strengths;
pub mod tips;

use dyad_core::profile::TraitProfile;

use crate::dimensions::PairPredicate;

pub use challenges::challenges;
pub use closing::closing;
pub use starters::conversation_starters;
pub use strengths::strengths;
pub use tips::improvement_tips;

/// Hard cap for challenges, tips, and conversation starters.
pub const LIST_CAP: usize = 3;

/// One prioritized narrative rule.
pub struct TextRule {
    pub when: PairPredicate,
    pub text: &'static str,
}

/// Texts of the first rules that match, at most `cap` of them.
pub fn collect_matches(
    rules: &[TextRule],
    user: TraitProfile,
    partner: TraitProfile,
    cap: usize,
) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.when)(user, partner))
        .take(cap)
        .map(|rule| rule.text.to_string())
        .collect()
}

/// How many strengths to surface for this pair.
///
/// Three independent heuristics each vote for 1..=4 and the most
/// generous vote wins, so any single strong signal is enough to earn
/// the fuller framing.
pub fn strength_quota(average_dimension: f64, total: u8, upper_percentile: u8) -> usize {
    let by_average = match average_dimension {
        a if a >= 85.0 => 4,
        a if a >= 75.0 => 3,
        a if a >= 60.0 => 2,
        _ => 1,
    };
    let by_total = match total {
        85.. => 4,
        70.. => 3,
        55.. => 2,
        _ => 1,
    };
    let by_percentile = match upper_percentile {
        0..=5 => 4,
        6..=20 => 3,
        21..=50 => 2,
        _ => 1,
    };
    by_average.max(by_total).max(by_percentile)
}
