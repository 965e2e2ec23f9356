//! Lifestyle rhythm: how the pair's relationship traits shape the
//! shared day to day, from two adaptives flowing around each other to
//! two independents running parallel calendars.

use super::{DimensionRule, RuleTable, TerminalRule};
use crate::pairings;

pub const TABLE: RuleTable = RuleTable {
    specific: &[
        DimensionRule {
            when: pairings::rel_both_adaptive,
            base: 86,
            description: "You both tune your rhythm to the other, so routines merge without either of you noticing a seam.",
            example: "Neither of you remembers deciding whose morning routine won; it simply blended.",
        },
        DimensionRule {
            when: pairings::rel_complementary,
            base: 80,
            description: "One of you anchors the shared life and one orbits it, a stable rhythm as long as the orbit stays in view.",
            example: "One keeps the home fires and one brings back the world, and both get what they need.",
        },
        DimensionRule {
            when: pairings::rel_both_devoted,
            base: 76,
            description: "You both build the day around the relationship, rich in ritual but short on solo air.",
            example: "Every evening is a shared evening, which is lovely until one of you needs one that isn't.",
        },
        DimensionRule {
            when: pairings::rel_both_independent,
            base: 70,
            description: "You both protect your own orbit, so the shared rhythm is sparse and has to be scheduled on purpose.",
            example: "Two full calendars work fine once the standing Thursday dinner is immovable.",
        },
    ],
    terminal: TerminalRule {
        base: 78,
        description: "One of you holds a fixed rhythm and the other flexes around it, which settles into an easy default.",
        example: "The adaptive one folds into the other's week and saves the negotiating for what matters.",
    },
};
