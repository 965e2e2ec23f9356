//! Shared result models produced by the scoring and analysis engines.

pub mod analysis;
pub mod axis_scores;
pub mod compatibility;
pub mod personality_type;
pub mod rank;

pub use analysis::{DetailedAnalysis, DimensionScore};
pub use axis_scores::AxisScores;
pub use compatibility::Compatibility;
pub use personality_type::PersonalityType;
pub use rank::RankTier;
