//! Stress response: driven by the decision axis, since how a person
//! decides under pressure is how they cope under pressure. Opposed
//! deciders cover each other's blind spots; matched extremes share
//! the same blind spot unless their communication styles offset it.

use super::{DimensionRule, RuleTable, TerminalRule};
use crate::pairings;

pub const TABLE: RuleTable = RuleTable {
    specific: &[
        DimensionRule {
            when: pairings::decision_both_flexible,
            base: 88,
            description: "Under pressure you both improvise, trading plans mid-crisis without anyone needing the old plan honored.",
            example: "A cancelled flight turns into a rerouted trip before the gate agent finishes talking.",
        },
        DimensionRule {
            when: pairings::decision_opposed,
            base: 80,
            description: "One of you runs the numbers while the other reads the room, so a crisis gets both kinds of answer.",
            example: "In an emergency one of you triages the facts and the other triages the people.",
        },
        DimensionRule {
            when: pairings::same_decision_extreme_comm_complementary,
            base: 76,
            description: "You cope the same way, but your opposite speaking styles keep the shared coping from becoming an echo chamber.",
            example: "You both spiral toward the same worry, yet the listener of the pair hears it early and names it.",
        },
        DimensionRule {
            when: pairings::decision_same_extreme,
            base: 68,
            description: "You share one coping strategy, strong when it fits the problem and brittle when the problem needs the other kind.",
            example: "Two analysts facing a grief have the spreadsheet ready and nothing for the tears.",
        },
    ],
    terminal: TerminalRule {
        base: 74,
        description: "One steady method and one adaptive one give you a fallback plan and the freedom to abandon it.",
        example: "When the first approach stalls, the flexible one pivots and the steady one makes the pivot stick.",
    },
};
