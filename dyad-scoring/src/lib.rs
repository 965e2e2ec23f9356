//! # dyad-scoring
//!
//! The deterministic scoring pipeline: answer lists are reduced to
//! axis sums, axis sums are classified into one of 27 personality
//! types, and two types are combined into a normalized 1..=100
//! compatibility score with an upper percentile and a rank tier.
//!
//! Everything here is a pure function of its inputs; the only state
//! in the system lives in `dyad-session`.

pub mod aggregate;
pub mod classify;
pub mod compatibility;
pub mod percentile;

pub use aggregate::{aggregate, aggregate_for_count};
pub use classify::{classify, resolve};
pub use compatibility::CompatibilityScorer;
pub use percentile::{rank_for_score, upper_percentile};
