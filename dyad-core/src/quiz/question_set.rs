use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::Axis;
use crate::errors::ScoringError;

/// The two supported question-set sizes.
///
/// Each set is partitioned into three equal axis blocks in the fixed
/// order communication, decision, relationship, with contiguous ids
/// starting at 1. The size also determines the classification
/// threshold: one threshold unit per six questions in a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum QuestionSetSize {
    /// 18 questions, 6 per axis.
    Short,
    /// 54 questions, 18 per axis. The multi-device mode uses this set.
    Full,
}

impl QuestionSetSize {
    /// Total question count (18 or 54).
    pub fn total(self) -> u16 {
        match self {
            QuestionSetSize::Short => 18,
            QuestionSetSize::Full => 54,
        }
    }

    /// Questions per axis block (6 or 18).
    pub fn per_axis(self) -> u16 {
        self.total() / 3
    }

    /// Classification boundary magnitude: an axis sum must exceed this
    /// (strictly) to leave the neutral trait.
    pub fn classify_threshold(self) -> i32 {
        match self {
            QuestionSetSize::Short => 3,
            QuestionSetSize::Full => 9,
        }
    }

    /// Largest attainable magnitude of one axis sum (12 or 36).
    pub fn axis_score_bound(self) -> i32 {
        i32::from(self.per_axis()) * 2
    }

    /// Contiguous question-id range belonging to `axis`.
    pub fn axis_range(self, axis: Axis) -> RangeInclusive<u16> {
        let block = self.per_axis();
        let start = block * axis.block_index() as u16 + 1;
        start..=start + block - 1
    }

    /// Axis owning `question_id`, or `None` when the id lies outside
    /// every block of this set.
    pub fn axis_of(self, question_id: u16) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|axis| self.axis_range(*axis).contains(&question_id))
    }
}

impl fmt::Display for QuestionSetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total())
    }
}

impl From<QuestionSetSize> for u16 {
    fn from(size: QuestionSetSize) -> Self {
        size.total()
    }
}

impl TryFrom<u16> for QuestionSetSize {
    type Error = ScoringError;

    fn try_from(count: u16) -> Result<Self, Self::Error> {
        match count {
            18 => Ok(QuestionSetSize::Short),
            54 => Ok(QuestionSetSize::Full),
            other => Err(ScoringError::UnsupportedQuestionCount { count: other }),
        }
    }
}
