//! Compatibility scoring: two personality types to one normalized
//! 1..=100 score plus its narrative.

pub mod narrative;
pub mod tables;

use tracing::debug;

use dyad_core::catalog::CompatibilityOverrides;
use dyad_core::models::{Compatibility, PersonalityType};
use dyad_core::profile::TraitProfile;

/// Scorer with an optional authored override table.
///
/// Scoring is symmetric: every per-axis table is pair-order symmetric,
/// so `score(a, b).total == score(b, a).total` holds across the whole
/// type universe. Reimplementations of the tables must preserve this.
pub struct CompatibilityScorer {
    overrides: CompatibilityOverrides,
}

impl CompatibilityScorer {
    /// Scorer with no authored content; all narrative is generated.
    pub fn new() -> Self {
        Self {
            overrides: CompatibilityOverrides::empty(),
        }
    }

    /// Scorer consulting an authored override table before generating
    /// message and detail text.
    pub fn with_overrides(overrides: CompatibilityOverrides) -> Self {
        Self { overrides }
    }

    /// Full compatibility between two types.
    pub fn score(&self, user: &PersonalityType, partner: &PersonalityType) -> Compatibility {
        // Step 1: per-axis table lookups, blended and normalized.
        let total = tables::total_score(user.traits, partner.traits);
        debug!(user = %user.code, partner = %partner.code, total, "compatibility computed");

        // Step 2: authored override wins over generated message/detail.
        let (message, detail) = match self.overrides.get(user.code, partner.code) {
            Some(authored) => (authored.message.clone(), authored.detail.clone()),
            None => (
                narrative::message_for(total).to_string(),
                narrative::detail_for(user.traits, partner.traits),
            ),
        };

        // Step 3: advice is always generated, one side at a time.
        Compatibility {
            total,
            message,
            detail,
            advice_user: narrative::advice_for(user.traits, partner.traits),
            advice_partner: narrative::advice_for(partner.traits, user.traits),
        }
    }

    /// Numeric total only, skipping narrative assembly.
    pub fn total(user: TraitProfile, partner: TraitProfile) -> u8 {
        tables::total_score(user, partner)
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}
