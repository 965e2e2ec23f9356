//! Upper-percentile lookup over the fixed pair-score distribution.

use dyad_core::constants::PAIR_UNIVERSE;
use dyad_core::models::RankTier;

/// Combination counts per 10-point score bucket (1-10, 11-20, …,
/// 91-100), tabulated from the pair tables over all 729 ordered type
/// pairs. The property suite re-derives this from the scorer and
/// asserts equality, so table edits cannot leave it stale.
pub const BUCKET_COUNTS: [u32; 10] = [8, 40, 80, 34, 100, 184, 128, 67, 76, 12];

/// Upper percentile of a compatibility score: the rounded share of
/// ordered pairs scoring strictly higher. Lower is better; 1 means a
/// top-1% pairing. "Strictly higher" is resolved at bucket
/// granularity, summing the buckets above the one holding `score`.
pub fn upper_percentile(score: u8) -> u8 {
    let score = score.clamp(1, 100);
    let bucket = usize::from((score - 1) / 10);
    let higher: u32 = BUCKET_COUNTS[bucket + 1..].iter().sum();
    (f64::from(higher) * 100.0 / PAIR_UNIVERSE as f64).round() as u8
}

/// Tier for a compatibility score, via its upper percentile.
pub fn rank_for_score(score: u8) -> RankTier {
    RankTier::from_upper_percentile(upper_percentile(score))
}
