use serde::{Deserialize, Serialize};

/// Headline compatibility between two personality types.
///
/// Deterministic given the same two types; recomputed on demand and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    /// Normalized score in 1..=100.
    pub total: u8,
    /// One-sentence headline for the score band.
    pub message: String,
    /// How the three axes interact for this pair.
    pub detail: String,
    /// Advice addressed to the first participant.
    pub advice_user: String,
    /// Advice addressed to the second participant.
    pub advice_partner: String,
}
