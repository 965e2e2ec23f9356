//! The canonical result query string.

use dyad_core::quiz::Answer;
use dyad_scoring::{aggregate, classify};

use crate::session::Session;

/// Query-string fragment carrying both participants' outcomes, or
/// `None` until the session is ready.
///
/// Field order is part of the contract: result pages are deep-linked
/// and cached on this string verbatim, so it must never be reordered.
pub fn result_query(session: &Session) -> Option<String> {
    if !session.ready_for_result() {
        return None;
    }

    let side = |answers: &[Answer]| {
        let scores = aggregate(answers, session.size);
        (classify(scores, session.size), scores)
    };
    let (user_profile, user_scores) = side(&session.user.answers);
    let (partner_profile, partner_scores) = side(&session.partner.answers);

    let params = [
        ("userType", user_profile.code().to_string()),
        ("userComm", user_scores.communication.to_string()),
        ("userDec", user_scores.decision.to_string()),
        ("userRel", user_scores.relationship.to_string()),
        ("partnerType", partner_profile.code().to_string()),
        ("partnerComm", partner_scores.communication.to_string()),
        ("partnerDec", partner_scores.decision.to_string()),
        ("partnerRel", partner_scores.relationship.to_string()),
    ];
    Some(
        params
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&"),
    )
}
