//! Trait profiles: the closed 3 × 3 × 3 personality universe.
//!
//! Each axis has its own three-valued trait enum rather than free-form
//! strings, so an illegal trait value is a type error, not a silent
//! lookup-table miss.

pub mod traits;
pub mod type_code;

pub use traits::{
    CommunicationStyle, DecisionStyle, ParseTraitError, Polarity, RelationshipStyle,
};
pub use type_code::{TraitProfile, TypeCode};
