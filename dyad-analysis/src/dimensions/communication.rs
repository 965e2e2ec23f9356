//! Communication style: the axis scored most directly from its own
//! pairing. The complementary assertive/receptive pair scores highest;
//! two assertives compete for the floor, two receptives wait each
//! other out.

use super::{DimensionRule, RuleTable, TerminalRule};
use crate::pairings;

pub const TABLE: RuleTable = RuleTable {
    specific: &[
        DimensionRule {
            when: pairings::comm_complementary,
            base: 95,
            description: "One leads the conversation and one carries it, the pairing where the least gets lost between saying and hearing.",
            example: "In a group you naturally split the work: one of you holds the room, the other catches what the room missed.",
        },
        DimensionRule {
            when: pairings::comm_both_balanced,
            base: 85,
            description: "You both read the moment and take whichever conversational seat it needs, so exchanges stay fluid.",
            example: "Interviews, dinners, hard talks: whoever has more to give that moment does the giving.",
        },
        DimensionRule {
            when: pairings::comm_both_receptive,
            base: 65,
            description: "You are both generous listeners, which makes for warmth but can leave important things politely unsaid.",
            example: "You each wait for the other to raise the awkward topic, and sometimes nobody does.",
        },
        DimensionRule {
            when: pairings::comm_both_assertive,
            base: 60,
            description: "You both reach for the floor first, so conversations have real energy and real collisions.",
            example: "Debates are great fun until both of you need the last word on the same night.",
        },
    ],
    terminal: TerminalRule {
        base: 78,
        description: "One fixed style meets one adaptive one, so most exchanges find their level after a short calibration.",
        example: "The balanced one learns when to press and when to yield, and the rhythm settles within minutes.",
    },
};
