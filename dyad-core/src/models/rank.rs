use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse letter grade derived from the upper percentile.
///
/// Lower percentile means a rarer pairing, so `Ss` is the best tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankTier {
    Ss,
    S,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl RankTier {
    /// All nine tiers, best first.
    pub const ALL: [RankTier; 9] = [
        RankTier::Ss,
        RankTier::S,
        RankTier::A,
        RankTier::B,
        RankTier::C,
        RankTier::D,
        RankTier::E,
        RankTier::F,
        RankTier::G,
    ];

    /// Tier for an upper percentile (lower percentile is better).
    ///
    /// Cutoffs are inclusive upper bounds; every percentile 0..=100
    /// lands in exactly one tier.
    pub fn from_upper_percentile(percentile: u8) -> Self {
        match percentile {
            0..=1 => RankTier::Ss,
            2..=10 => RankTier::S,
            11..=20 => RankTier::A,
            21..=35 => RankTier::B,
            36..=50 => RankTier::C,
            51..=65 => RankTier::D,
            66..=75 => RankTier::E,
            76..=85 => RankTier::F,
            _ => RankTier::G,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            RankTier::Ss => "SS",
            RankTier::S => "S",
            RankTier::A => "A",
            RankTier::B => "B",
            RankTier::C => "C",
            RankTier::D => "D",
            RankTier::E => "E",
            RankTier::F => "F",
            RankTier::G => "G",
        }
    }

    /// Display asset for this tier. The path scheme belongs to the UI
    /// layer; only the mapping is fixed here.
    pub fn asset_path(self) -> &'static str {
        match self {
            RankTier::Ss => "assets/rank/rank-ss.png",
            RankTier::S => "assets/rank/rank-s.png",
            RankTier::A => "assets/rank/rank-a.png",
            RankTier::B => "assets/rank/rank-b.png",
            RankTier::C => "assets/rank/rank-c.png",
            RankTier::D => "assets/rank/rank-d.png",
            RankTier::E => "assets/rank/rank-e.png",
            RankTier::F => "assets/rank/rank-f.png",
            RankTier::G => "assets/rank/rank-g.png",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
