//! Emotional expression: how feelings surface between the pair's
//! communication styles, with the relationship axis coloring the
//! same-extreme cases.

use super::{DimensionRule, RuleTable, TerminalRule};
use crate::pairings;

pub const TABLE: RuleTable = RuleTable {
    specific: &[
        DimensionRule {
            when: pairings::comm_complementary,
            base: 90,
            description: "One of you voices feelings readily and the other makes room for them, so emotions move between you without piling up.",
            example: "After a hard day one of you talks it out while the other listens it out, and both leave lighter.",
        },
        DimensionRule {
            when: pairings::comm_both_balanced,
            base: 82,
            description: "You both shift naturally between expressing and receiving, so emotional weather passes through without anyone holding the whole sky.",
            example: "A tense evening resolves because whoever is steadier that day takes the listening seat.",
        },
        DimensionRule {
            when: pairings::comm_either_balanced,
            base: 75,
            description: "One of you can meet the other's fixed style halfway, which keeps feelings from getting stuck on a single channel.",
            example: "When one of you goes quiet or goes loud, the other adjusts register instead of matching it.",
        },
        DimensionRule {
            when: pairings::same_comm_extreme_same_rel,
            base: 70,
            description: "You express feelings the same intense way and want closeness in the same shape, so emotional storms are loud but short.",
            example: "An argument flares fast, but you both reach for repair in the same familiar way.",
        },
    ],
    terminal: TerminalRule {
        base: 62,
        description: "You push feelings through the same narrow channel while wanting different kinds of closeness, so emotions need deliberate airing.",
        example: "A weekly walk where feelings get named out loud keeps small resentments from calcifying.",
    },
};
