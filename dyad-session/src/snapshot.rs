//! Read-only session views returned by the store.

use chrono::{DateTime, Utc};
use serde::Serialize;

use dyad_core::quiz::{Answer, QuestionSetSize};

use crate::result;
use crate::session::{ParticipantSlot, Session};

/// Public view of one participant slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub answers: Vec<Answer>,
    pub completed: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&ParticipantSlot> for SlotView {
    fn from(slot: &ParticipantSlot) -> Self {
        Self {
            answers: slot.answers.clone(),
            completed: slot.completed,
            updated_at: slot.updated_at,
        }
    }
}

/// Cloned, self-contained view of a session.
///
/// `result_query` is recomputed on every snapshot rather than stored,
/// so it can never go stale against the answers it summarizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub size: QuestionSetSize,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub user: SlotView,
    pub partner: SlotView,
    pub ready_for_result: bool,
    pub result_query: Option<String>,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            size: session.size,
            created_at: session.created_at,
            expires_at: session.expires_at,
            user: SlotView::from(&session.user),
            partner: SlotView::from(&session.partner),
            ready_for_result: session.ready_for_result(),
            result_query: result::result_query(session),
        }
    }
}
