//! Axis aggregation: answer list to three raw axis sums.

use dyad_core::errors::ScoringError;
use dyad_core::models::AxisScores;
use dyad_core::quiz::{Answer, QuestionSetSize};

/// Sum every answer's score into the axis owning its question id.
///
/// Ids outside all three blocks contribute nothing, and absent ids
/// contribute 0; completeness is the caller's concern, not this
/// layer's. Every answer in the slice is summed, so a caller that
/// wants last-write-wins semantics must deduplicate first (the
/// session coordinator's upsert already does).
pub fn aggregate(answers: &[Answer], size: QuestionSetSize) -> AxisScores {
    let mut scores = AxisScores::default();
    for answer in answers {
        if let Some(axis) = size.axis_of(answer.question_id) {
            scores.add(axis, answer.score.value());
        }
    }
    scores
}

/// [`aggregate`] for callers holding a raw question count instead of a
/// validated size. Any count other than 18 or 54 is rejected.
pub fn aggregate_for_count(answers: &[Answer], count: u16) -> Result<AxisScores, ScoringError> {
    let size = QuestionSetSize::try_from(count)?;
    Ok(aggregate(answers, size))
}
