use serde::{Deserialize, Serialize};

use crate::quiz::Axis;

/// Raw per-axis answer sums, the aggregator's output.
///
/// Range depends on the question-set size: [-12, 12] per axis for the
/// 18-question set, [-36, 36] for the 54-question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisScores {
    pub communication: i32,
    pub decision: i32,
    pub relationship: i32,
}

impl AxisScores {
    pub fn new(communication: i32, decision: i32, relationship: i32) -> Self {
        Self {
            communication,
            decision,
            relationship,
        }
    }

    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::Communication => self.communication,
            Axis::Decision => self.decision,
            Axis::Relationship => self.relationship,
        }
    }

    pub fn add(&mut self, axis: Axis, delta: i32) {
        match axis {
            Axis::Communication => self.communication += delta,
            Axis::Decision => self.decision += delta,
            Axis::Relationship => self.relationship += delta,
        }
    }

    /// Sum across all three axes.
    pub fn total(self) -> i32 {
        self.communication + self.decision + self.relationship
    }
}
