//! Injected catalog data: questions, personality types, and authored
//! compatibility overrides.
//!
//! Catalogs are read-only inputs passed into the engines, never
//! ambient globals, so tests can supply synthetic minimal data.

pub mod overrides;
pub mod questions;
pub mod types;

pub use overrides::{CompatibilityOverrides, OverrideMessage};
pub use questions::{AnswerOption, Question, QuestionCatalog};
pub use types::{synthesize_type, TypeCatalog};
