use serde::{Deserialize, Serialize};

/// One analysis sub-dimension: a 0..=100 score with its narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: u8,
    pub description: String,
    /// A concrete everyday situation illustrating the dynamic.
    pub example: String,
}

/// The six-dimension detailed compatibility analysis.
///
/// Purely derived from two trait profiles plus the headline score and
/// percentile; has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub values: DimensionScore,
    pub emotional_expression: DimensionScore,
    pub communication_style: DimensionScore,
    pub stress_response: DimensionScore,
    pub lifestyle_rhythm: DimensionScore,
    pub love_expression: DimensionScore,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub improvement_tips: Vec<String>,
    pub conversation_starters: Vec<String>,
    pub closing_message: String,
}

impl DetailedAnalysis {
    /// The six sub-scores in declaration order.
    pub fn dimension_scores(&self) -> [u8; 6] {
        [
            self.values.score,
            self.emotional_expression.score,
            self.communication_style.score,
            self.stress_response.score,
            self.lifestyle_rhythm.score,
            self.love_expression.score,
        ]
    }

    /// Mean of the six sub-scores.
    pub fn average_dimension_score(&self) -> f64 {
        let sum: u32 = self.dimension_scores().iter().map(|&s| u32::from(s)).sum();
        f64::from(sum) / 6.0
    }
}
