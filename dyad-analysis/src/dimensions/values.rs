//! Values alignment: how closely the pair's decision and relationship
//! traits line up. Shared judgment plus shared closeness style scores
//! highest; a flexible decider on either side softens any mismatch.

use super::{DimensionRule, RuleTable, TerminalRule};
use crate::pairings;

pub const TABLE: RuleTable = RuleTable {
    specific: &[
        DimensionRule {
            when: pairings::values_fully_aligned,
            base: 95,
            description: "You weigh choices the same way and want the same shape of closeness, so the big calls in life rarely need negotiating.",
            example: "Picking where to live takes one evening: you both rank the same things and land on the same street.",
        },
        DimensionRule {
            when: pairings::decision_identical,
            base: 85,
            description: "You reach decisions by the same route, which keeps your priorities legible to each other even when your closeness styles differ.",
            example: "Planning a major purchase, you build the case the same way and trust the other's conclusion.",
        },
        DimensionRule {
            when: pairings::rel_identical,
            base: 78,
            description: "You want the same texture of togetherness, so daily life aligns even when your reasoning styles diverge.",
            example: "Neither of you has to ask how much weekend time is 'together time'; you already agree.",
        },
        DimensionRule {
            when: pairings::decision_either_flexible,
            base: 72,
            description: "One of you adapts the method to the moment, which absorbs most of the friction between your different priorities.",
            example: "When you disagree on an approach, the flexible one reframes it until both of you can sign off.",
        },
    ],
    terminal: TerminalRule {
        base: 60,
        description: "Your priorities are built on different foundations, so alignment takes explicit conversation rather than instinct.",
        example: "A shared budget works once you write the rules down instead of assuming the other's defaults.",
    },
};
