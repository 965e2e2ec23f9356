//! 6-dimension compatibility analysis framework.
//!
//! Each dimension holds an ordered rule table: specific trait pairings
//! first, then a terminal rule that always applies. `RuleTable::assess`
//! walks the table top to bottom and returns the first hit, so the
//! fallback is enforced by the type rather than by convention.

pub mod communication;
pub mod emotional;
pub mod lifestyle;
pub mod love;
pub mod stress;
pub mod values;

use dyad_core::profile::TraitProfile;

/// Condition a rule fires on.
pub type PairPredicate = fn(TraitProfile, TraitProfile) -> bool;

/// One prioritized entry in a dimension's rule table.
pub struct DimensionRule {
    pub when: PairPredicate,
    pub base: u8,
    pub description: &'static str,
    pub example: &'static str,
}

/// The rule that fires when nothing more specific does.
pub struct TerminalRule {
    pub base: u8,
    pub description: &'static str,
    pub example: &'static str,
}

/// Ordered cascade for one analysis dimension.
pub struct RuleTable {
    pub specific: &'static [DimensionRule],
    pub terminal: TerminalRule,
}

/// Pre-rescale outcome of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseDimension {
    pub base: u8,
    pub description: &'static str,
    pub example: &'static str,
}

impl RuleTable {
    /// First matching specific rule, or the terminal rule.
    pub fn assess(&self, user: TraitProfile, partner: TraitProfile) -> BaseDimension {
        for rule in self.specific {
            if (rule.when)(user, partner) {
                return BaseDimension {
                    base: rule.base,
                    description: rule.description,
                    example: rule.example,
                };
            }
        }
        BaseDimension {
            base: self.terminal.base,
            description: self.terminal.description,
            example: self.terminal.example,
        }
    }
}
