use serde::{Deserialize, Serialize};

use crate::profile::{TraitProfile, TypeCode};

/// One of the 27 personality types.
///
/// Instances come either from an authored type catalog or from the
/// compositional generator; the two are interchangeable for every
/// downstream consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityType {
    /// Canonical lookup key, always consistent with `traits`.
    pub code: TypeCode,
    pub name: String,
    /// Small display glyph chosen by the relationship trait.
    pub icon: String,
    pub description: String,
    pub traits: TraitProfile,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}
