use serde::{Deserialize, Serialize};

use super::Score;

/// One participant's answer to one question.
///
/// Answers are immutable values; re-answering a question supersedes the
/// earlier answer rather than appending (last write wins per question id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u16,
    pub score: Score,
}

impl Answer {
    pub fn new(question_id: u16, score: Score) -> Self {
        Self { question_id, score }
    }
}
