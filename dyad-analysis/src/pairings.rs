//! Named pair predicates shared by the dimension and narrative rule
//! tables. Keeping each predicate as one named function keeps the
//! rule tables readable and lets every condition be tested directly.

use dyad_core::profile::{CommunicationStyle, DecisionStyle, RelationshipStyle, TraitProfile};

// ── communication axis ────────────────────────────────────────────────────

pub fn comm_complementary(user: TraitProfile, partner: TraitProfile) -> bool {
    matches!(
        (user.communication, partner.communication),
        (CommunicationStyle::Assertive, CommunicationStyle::Receptive)
            | (CommunicationStyle::Receptive, CommunicationStyle::Assertive)
    )
}

pub fn comm_both_balanced(user: TraitProfile, partner: TraitProfile) -> bool {
    user.communication == CommunicationStyle::Balanced
        && partner.communication == CommunicationStyle::Balanced
}

pub fn comm_both_assertive(user: TraitProfile, partner: TraitProfile) -> bool {
    user.communication == CommunicationStyle::Assertive
        && partner.communication == CommunicationStyle::Assertive
}

pub fn comm_both_receptive(user: TraitProfile, partner: TraitProfile) -> bool {
    user.communication == CommunicationStyle::Receptive
        && partner.communication == CommunicationStyle::Receptive
}

pub fn comm_either_balanced(user: TraitProfile, partner: TraitProfile) -> bool {
    user.communication == CommunicationStyle::Balanced
        || partner.communication == CommunicationStyle::Balanced
}

pub fn comm_same_extreme(user: TraitProfile, partner: TraitProfile) -> bool {
    comm_both_assertive(user, partner) || comm_both_receptive(user, partner)
}

// ── decision axis ─────────────────────────────────────────────────────────

pub fn decision_identical(user: TraitProfile, partner: TraitProfile) -> bool {
    user.decision == partner.decision
}

pub fn decision_both_flexible(user: TraitProfile, partner: TraitProfile) -> bool {
    user.decision == DecisionStyle::Flexible && partner.decision == DecisionStyle::Flexible
}

pub fn decision_either_flexible(user: TraitProfile, partner: TraitProfile) -> bool {
    user.decision == DecisionStyle::Flexible || partner.decision == DecisionStyle::Flexible
}

pub fn decision_opposed(user: TraitProfile, partner: TraitProfile) -> bool {
    matches!(
        (user.decision, partner.decision),
        (DecisionStyle::Logical, DecisionStyle::Intuitive)
            | (DecisionStyle::Intuitive, DecisionStyle::Logical)
    )
}

pub fn decision_same_extreme(user: TraitProfile, partner: TraitProfile) -> bool {
    decision_identical(user, partner) && user.decision != DecisionStyle::Flexible
}

// ── relationship axis ─────────────────────────────────────────────────────

pub fn rel_identical(user: TraitProfile, partner: TraitProfile) -> bool {
    user.relationship == partner.relationship
}

pub fn rel_complementary(user: TraitProfile, partner: TraitProfile) -> bool {
    matches!(
        (user.relationship, partner.relationship),
        (RelationshipStyle::Independent, RelationshipStyle::Devoted)
            | (RelationshipStyle::Devoted, RelationshipStyle::Independent)
    )
}

pub fn rel_both_adaptive(user: TraitProfile, partner: TraitProfile) -> bool {
    user.relationship == RelationshipStyle::Adaptive
        && partner.relationship == RelationshipStyle::Adaptive
}

pub fn rel_both_devoted(user: TraitProfile, partner: TraitProfile) -> bool {
    user.relationship == RelationshipStyle::Devoted
        && partner.relationship == RelationshipStyle::Devoted
}

pub fn rel_both_independent(user: TraitProfile, partner: TraitProfile) -> bool {
    user.relationship == RelationshipStyle::Independent
        && partner.relationship == RelationshipStyle::Independent
}

// ── cross-axis composites ─────────────────────────────────────────────────

pub fn values_fully_aligned(user: TraitProfile, partner: TraitProfile) -> bool {
    decision_identical(user, partner) && rel_identical(user, partner)
}

pub fn same_comm_extreme_same_rel(user: TraitProfile, partner: TraitProfile) -> bool {
    comm_same_extreme(user, partner) && rel_identical(user, partner)
}

pub fn same_decision_extreme_comm_complementary(
    user: TraitProfile,
    partner: TraitProfile,
) -> bool {
    decision_same_extreme(user, partner) && comm_complementary(user, partner)
}

pub fn doubly_complementary(user: TraitProfile, partner: TraitProfile) -> bool {
    rel_complementary(user, partner) && comm_complementary(user, partner)
}
