use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a trait sits relative to its axis's classification thresholds.
///
/// The compatibility lookup tables are written once over polarities,
/// so all three axes share one table vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    High,
    Low,
    Neutral,
}

/// Communication-axis trait.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    /// High pole: leads conversations, states positions plainly.
    Assertive,
    /// Low pole: listens first, draws the other person out.
    Receptive,
    /// Neutral band between the two poles.
    Balanced,
}

/// Decision-axis trait.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStyle {
    /// High pole: weighs choices against evidence.
    Logical,
    /// Low pole: trusts felt sense over analysis.
    Intuitive,
    /// Neutral band: keeps options open, adapts the method to the call.
    Flexible,
}

/// Relationship-axis trait.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStyle {
    /// High pole: guards personal territory inside closeness.
    Independent,
    /// Low pole: invests deeply in the shared world.
    Devoted,
    /// Neutral band: tunes distance to the partner's rhythm.
    Adaptive,
}

macro_rules! axis_trait {
    ($ty:ident { $high:ident => $high_label:literal,
                 $low:ident => $low_label:literal,
                 $neutral:ident => $neutral_label:literal }) => {
        impl $ty {
            /// All three values, high pole first.
            pub const ALL: [$ty; 3] = [$ty::$high, $ty::$low, $ty::$neutral];

            /// Stable lowercase label used in type codes and catalogs.
            pub fn label(self) -> &'static str {
                match self {
                    $ty::$high => $high_label,
                    $ty::$low => $low_label,
                    $ty::$neutral => $neutral_label,
                }
            }

            /// Position relative to the axis thresholds.
            pub fn polarity(self) -> Polarity {
                match self {
                    $ty::$high => Polarity::High,
                    $ty::$low => Polarity::Low,
                    $ty::$neutral => Polarity::Neutral,
                }
            }

            /// Trait for a given polarity on this axis.
            pub fn from_polarity(polarity: Polarity) -> Self {
                match polarity {
                    Polarity::High => $ty::$high,
                    Polarity::Low => $ty::$low,
                    Polarity::Neutral => $ty::$neutral,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ParseTraitError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $high_label => Ok($ty::$high),
                    $low_label => Ok($ty::$low),
                    $neutral_label => Ok($ty::$neutral),
                    other => Err(ParseTraitError::UnknownLabel {
                        label: other.to_string(),
                    }),
                }
            }
        }
    };
}

axis_trait!(CommunicationStyle {
    Assertive => "assertive",
    Receptive => "receptive",
    Balanced => "balanced"
});

axis_trait!(DecisionStyle {
    Logical => "logical",
    Intuitive => "intuitive",
    Flexible => "flexible"
});

axis_trait!(RelationshipStyle {
    Independent => "independent",
    Devoted => "devoted",
    Adaptive => "adaptive"
});

/// Parse failure for trait labels and type codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTraitError {
    #[error("unknown trait label: {label}")]
    UnknownLabel { label: String },

    #[error("type code must join three trait labels with '-': {code}")]
    MalformedCode { code: String },
}
