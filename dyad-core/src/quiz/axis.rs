use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three personality axes every question is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Communication,
    Decision,
    Relationship,
}

impl Axis {
    /// All axes in canonical question-block order.
    pub const ALL: [Axis; 3] = [Axis::Communication, Axis::Decision, Axis::Relationship];

    /// Stable lowercase name used in catalogs and result parameters.
    pub fn label(self) -> &'static str {
        match self {
            Axis::Communication => "communication",
            Axis::Decision => "decision",
            Axis::Relationship => "relationship",
        }
    }

    /// Position of this axis's question block (0-based).
    pub fn block_index(self) -> usize {
        match self {
            Axis::Communication => 0,
            Axis::Decision => 1,
            Axis::Relationship => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Axis {
    type Err = UnknownAxis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "communication" => Ok(Axis::Communication),
            "decision" => Ok(Axis::Decision),
            "relationship" => Ok(Axis::Relationship),
            other => Err(UnknownAxis(other.to_string())),
        }
    }
}

/// Parse failure for an axis label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown axis label: {0}")]
pub struct UnknownAxis(pub String);
