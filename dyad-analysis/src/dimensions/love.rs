//! Love expression: how affection is given and received, read mostly
//! off the relationship axis with the communication axis deciding the
//! top pairing.

use super::{DimensionRule, RuleTable, TerminalRule};
use crate::pairings;

pub const TABLE: RuleTable = RuleTable {
    specific: &[
        DimensionRule {
            when: pairings::doubly_complementary,
            base: 95,
            description: "Your closeness styles and speaking styles both interlock, so affection is offered in exactly the form the other receives it.",
            example: "One says the love out loud, the other builds it into the week, and each recognizes the other's dialect.",
        },
        DimensionRule {
            when: pairings::rel_complementary,
            base: 88,
            description: "One gives love as devotion and one as respected space, opposite currencies that happen to convert cleanly.",
            example: "The devoted one plans the anniversary; the independent one makes the ordinary Tuesday feel unowed.",
        },
        DimensionRule {
            when: pairings::rel_both_devoted,
            base: 84,
            description: "You both love in full attendance, generous and legible, with the only risk being that nobody stands watch for burnout.",
            example: "Grand gestures meet grand gestures; the calendar fills with each other.",
        },
        DimensionRule {
            when: pairings::rel_both_adaptive,
            base: 80,
            description: "You both shape affection to what the other needs that day, a quiet style that runs deep once each learns to receive it.",
            example: "Love shows up as the exactly right small thing, twice, from both directions.",
        },
        DimensionRule {
            when: pairings::rel_both_independent,
            base: 62,
            description: "You both express love sparingly and prize self-reliance, so affection must be stated or it will be inferred as absence.",
            example: "A deliberate habit of saying the warm thing out loud keeps two quiet loves from reading as none.",
        },
    ],
    terminal: TerminalRule {
        base: 74,
        description: "One fixed love language meets one adaptive one, workable the moment it is named rather than guessed.",
        example: "Once the adaptive one learns which gestures land, the fixed one finally feels fluently loved.",
    },
};
