//! # dyad-analysis
//!
//! The detailed analysis generator: six secondary compatibility
//! dimensions scored from trait combinations, rescaled against the
//! headline total, plus rule-cascade narrative (strengths,
//! challenges, improvement tips, conversation starters, closing).
//!
//! Every rule set is an ordered table evaluated most-specific-first
//! with a guaranteed terminal fallback, so lists are never empty and
//! each rule can be tested on its own.

pub mod dimensions;
pub mod engine;
pub mod narrative;
pub mod pairings;
pub mod rescale;

pub use engine::AnalysisEngine;
