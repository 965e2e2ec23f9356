//! Session state: two participant slots under one id with a fixed
//! expiry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use dyad_core::quiz::{Answer, QuestionSetSize, Score};

/// Which of the two slots a participant owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Partner,
}

/// One participant's progress through the question set.
///
/// `updated_at` doubles as the claimed marker: a slot with no
/// timestamp has never been touched and is still up for assignment.
#[derive(Debug, Clone, Default)]
pub struct ParticipantSlot {
    pub answers: Vec<Answer>,
    pub completed: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ParticipantSlot {
    pub fn touched(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Insert or replace the answer for its question id, keeping the
    /// list sorted. Any change reopens the slot.
    pub fn upsert(&mut self, answer: Answer, now: DateTime<Utc>) {
        match self
            .answers
            .binary_search_by_key(&answer.question_id, |a| a.question_id)
        {
            Ok(i) => self.answers[i] = answer,
            Err(i) => self.answers.insert(i, answer),
        }
        self.completed = false;
        self.updated_at = Some(now);
    }
}

/// A change a participant can apply to their slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Upsert { question_id: u16, score: Score },
    SetCompleted(bool),
}

/// One paired quiz run.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub size: QuestionSetSize,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub user: ParticipantSlot,
    pub partner: ParticipantSlot,
}

impl Session {
    pub fn new(
        id: String,
        size: QuestionSetSize,
        created_at: DateTime<Utc>,
        ttl_secs: i64,
    ) -> Self {
        Self {
            id,
            size,
            created_at,
            expires_at: created_at + Duration::seconds(ttl_secs),
            user: ParticipantSlot::default(),
            partner: ParticipantSlot::default(),
        }
    }

    pub fn slot(&self, role: Role) -> &ParticipantSlot {
        match role {
            Role::User => &self.user,
            Role::Partner => &self.partner,
        }
    }

    pub fn slot_mut(&mut self, role: Role) -> &mut ParticipantSlot {
        match role {
            Role::User => &mut self.user,
            Role::Partner => &mut self.partner,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Both slots completed with at least one answer each.
    pub fn ready_for_result(&self) -> bool {
        let done = |slot: &ParticipantSlot| slot.completed && !slot.answers.is_empty();
        done(&self.user) && done(&self.partner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let session = Session::new("s".into(), QuestionSetSize::Short, at(1_000), 60);
        assert!(!session.is_expired(at(1_059)));
        assert!(session.is_expired(at(1_060)));
        assert!(session.is_expired(at(2_000)));
    }

    #[test]
    fn upsert_reopens_a_completed_slot() {
        let mut slot = ParticipantSlot::default();
        slot.upsert(Answer::new(3, Score::Agree), at(10));
        slot.completed = true;
        slot.upsert(Answer::new(3, Score::Disagree), at(20));
        assert!(!slot.completed);
        assert_eq!(slot.answers, vec![Answer::new(3, Score::Disagree)]);
        assert_eq!(slot.updated_at, Some(at(20)));
    }

    #[test]
    fn upsert_keeps_answers_sorted_by_question_id() {
        let mut slot = ParticipantSlot::default();
        for id in [9u16, 2, 5, 2] {
            slot.upsert(Answer::new(id, Score::Neutral), at(1));
        }
        let ids: Vec<u16> = slot.answers.iter().map(|a| a.question_id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn readiness_requires_completion_and_answers() {
        let mut session = Session::new("s".into(), QuestionSetSize::Short, at(0), 60);
        assert!(!session.ready_for_result());
        session.user.completed = true;
        session.partner.completed = true;
        // Completed but empty slots do not count.
        assert!(!session.ready_for_result());
        session.user.upsert(Answer::new(1, Score::Agree), at(1));
        session.partner.upsert(Answer::new(1, Score::Agree), at(1));
        session.user.completed = true;
        session.partner.completed = true;
        assert!(session.ready_for_result());
    }
}
