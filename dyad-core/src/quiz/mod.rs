//! Quiz primitives: axes, answer scores, and question-set geometry.

pub mod answer;
pub mod axis;
pub mod question_set;
pub mod score;

pub use answer::Answer;
pub use axis::Axis;
pub use question_set::QuestionSetSize;
pub use score::Score;
