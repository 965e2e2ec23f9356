use crate::profile::ParseTraitError;
use crate::quiz::Axis;

/// Errors raised while loading or validating injected catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question count mismatch: expected {expected}, found {found}")]
    QuestionCountMismatch { expected: u16, found: usize },

    #[error("question ids must be contiguous from 1: position {position} holds id {id}")]
    QuestionOutOfOrder { position: usize, id: u16 },

    #[error("question {id} tagged {found} but its block belongs to {expected}")]
    AxisMismatch { id: u16, expected: Axis, found: Axis },

    #[error("question {id} has no answer options")]
    EmptyOptions { id: u16 },

    #[error("type catalog is missing code {code}")]
    MissingType { code: String },

    #[error(transparent)]
    UnknownTrait(#[from] ParseTraitError),
}
