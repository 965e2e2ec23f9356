//! Assembly of the full detailed analysis from the rule tables and
//! narrative cascades.

use tracing::debug;

use dyad_core::models::{DetailedAnalysis, DimensionScore};
use dyad_core::profile::TraitProfile;

use crate::dimensions::{self, BaseDimension};
use crate::narrative;
use crate::rescale::rescale;

/// Generator for the six-dimension detailed analysis.
///
/// Stateless; exists as a type so embedders can hold one alongside
/// their scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Full analysis for a pair, given the headline total and upper
    /// percentile already computed for it.
    pub fn generate(
        &self,
        user: TraitProfile,
        partner: TraitProfile,
        total: u8,
        upper_percentile: u8,
    ) -> DetailedAnalysis {
        // Step 1: assess and rescale the six dimensions.
        let values = finish(dimensions::values::TABLE.assess(user, partner), total);
        let emotional_expression =
            finish(dimensions::emotional::TABLE.assess(user, partner), total);
        let communication_style =
            finish(dimensions::communication::TABLE.assess(user, partner), total);
        let stress_response = finish(dimensions::stress::TABLE.assess(user, partner), total);
        let lifestyle_rhythm = finish(dimensions::lifestyle::TABLE.assess(user, partner), total);
        let love_expression = finish(dimensions::love::TABLE.assess(user, partner), total);

        // Step 2: the strength quota reads the rescaled average.
        let sum: u32 = [
            &values,
            &emotional_expression,
            &communication_style,
            &stress_response,
            &lifestyle_rhythm,
            &love_expression,
        ]
        .iter()
        .map(|d| u32::from(d.score))
        .sum();
        let average = f64::from(sum) / 6.0;
        let quota = narrative::strength_quota(average, total, upper_percentile);
        debug!(
            total,
            upper_percentile, quota, "assembling detailed analysis"
        );

        // Step 3: narrative cascades.
        DetailedAnalysis {
            values,
            emotional_expression,
            communication_style,
            stress_response,
            lifestyle_rhythm,
            love_expression,
            strengths: narrative::strengths(user, partner, total, quota),
            challenges: narrative::challenges(user, partner),
            improvement_tips: narrative::improvement_tips(user, partner),
            conversation_starters: narrative::conversation_starters(user, partner, total),
            closing_message: narrative::closing(total),
        }
    }
}

fn finish(dim: BaseDimension, total: u8) -> DimensionScore {
    DimensionScore {
        score: rescale(dim.base, total),
        description: dim.description.to_string(),
        example: dim.example.to_string(),
    }
}
