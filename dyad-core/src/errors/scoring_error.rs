/// Errors from the numeric scoring boundary.
///
/// Both variants guard input domains; once input has crossed this
/// boundary every scoring function is total and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("unsupported question count: {count} (supported sets are 18 and 54)")]
    UnsupportedQuestionCount { count: u16 },

    #[error("answer score {value} outside the Likert domain -2..=2")]
    ScoreOutOfRange { value: i8 },
}
