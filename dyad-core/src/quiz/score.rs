use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// One answer's weight on its axis, a five-point Likert value.
///
/// The numeric domain is closed: only {-2, -1, 0, 1, 2} exist, so
/// out-of-domain input is rejected at deserialization and can never
/// reach the aggregation or classification layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum Score {
    StronglyDisagree = -2,
    Disagree = -1,
    Neutral = 0,
    Agree = 1,
    StronglyAgree = 2,
}

impl Score {
    /// All five values in ascending order.
    pub const ALL: [Score; 5] = [
        Score::StronglyDisagree,
        Score::Disagree,
        Score::Neutral,
        Score::Agree,
        Score::StronglyAgree,
    ];

    /// The signed weight this answer contributes to its axis sum.
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl From<Score> for i8 {
    fn from(score: Score) -> Self {
        score as i8
    }
}

impl TryFrom<i8> for Score {
    type Error = ScoringError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(Score::StronglyDisagree),
            -1 => Ok(Score::Disagree),
            0 => Ok(Score::Neutral),
            1 => Ok(Score::Agree),
            2 => Ok(Score::StronglyAgree),
            other => Err(ScoringError::ScoreOutOfRange { value: other }),
        }
    }
}
