//! # dyad-core
//!
//! Foundation crate for the dyad compatibility engine.
//! Defines quiz primitives, trait profiles, catalogs, shared models,
//! errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod profile;
pub mod quiz;

// Re-export the most commonly used types at the crate root.
pub use config::DyadConfig;
pub use errors::{CatalogError, ConfigError, ScoringError, SessionError};
pub use models::{AxisScores, Compatibility, DetailedAnalysis, PersonalityType, RankTier};
pub use profile::{
    CommunicationStyle, DecisionStyle, Polarity, RelationshipStyle, TraitProfile, TypeCode,
};
pub use quiz::{Answer, Axis, QuestionSetSize, Score};
