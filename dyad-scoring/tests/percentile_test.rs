use dyad_core::constants::PAIR_UNIVERSE;
use dyad_core::models::RankTier;
use dyad_core::profile::TraitProfile;
use dyad_scoring::compatibility::tables;
use dyad_scoring::percentile::BUCKET_COUNTS;
use dyad_scoring::{rank_for_score, upper_percentile, CompatibilityScorer};

// The histogram and the normalization bounds are hard-coded empirical
// constants. These tests re-derive both from the live tables across
// the whole 729-pair universe so an edit to either side is caught.

#[test]
fn histogram_matches_the_scorer_distribution() {
    let mut counts = [0u32; 10];
    for a in TraitProfile::all() {
        for b in TraitProfile::all() {
            let total = CompatibilityScorer::total(a, b);
            counts[usize::from((total - 1) / 10)] += 1;
        }
    }
    assert_eq!(counts, BUCKET_COUNTS);
    assert_eq!(counts.iter().sum::<u32>(), PAIR_UNIVERSE as u32);
}

#[test]
fn raw_blend_bounds_match_the_normalization_constants() {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for a in TraitProfile::all() {
        for b in TraitProfile::all() {
            let raw = tables::raw_blend(a, b);
            min = min.min(raw);
            max = max.max(raw);
        }
    }
    // Each weighted term is exact in f64, so exact comparison holds.
    assert_eq!(min, tables::RAW_MIN);
    assert_eq!(max, tables::RAW_MIN + tables::RAW_SPAN);
}

#[test]
fn percentile_is_monotone_over_the_score_range() {
    for lower in 1..=99u8 {
        for higher in lower + 1..=100 {
            assert!(
                upper_percentile(lower) >= upper_percentile(higher),
                "score {lower} beat score {higher}"
            );
        }
    }
}

#[test]
fn tiers_never_improve_as_the_score_drops() {
    for lower in 1..=99u8 {
        // Best-first tier order: a higher score must compare <= in tier.
        assert!(rank_for_score(lower + 1) <= rank_for_score(lower));
    }
}

#[test]
fn every_score_gets_a_tier() {
    for score in 1..=100u8 {
        let tier = rank_for_score(score);
        assert!(RankTier::ALL.contains(&tier));
        assert!(!tier.asset_path().is_empty());
    }
}
