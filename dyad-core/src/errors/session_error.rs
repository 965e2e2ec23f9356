/// Session coordinator errors.
///
/// Each variant is a distinct condition the caller routes on: "not
/// found" covers unknown and expired ids alike, "full" redirects the
/// third joiner, and "premature completion" carries the current short
/// count so the caller can show progress instead of retrying blindly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {session_id}")]
    NotFound { session_id: String },

    #[error("session {session_id} already has two participants")]
    Full { session_id: String },

    #[error("completion rejected: {answered} of {required} answers present")]
    PrematureCompletion { answered: usize, required: usize },
}
