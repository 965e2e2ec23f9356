//! SessionStore: concurrent session access via DashMap with lazy
//! expiry sweeps.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use dyad_core::config::SessionConfig;
use dyad_core::errors::SessionError;
use dyad_core::quiz::{Answer, QuestionSetSize};

use crate::session::{Mutation, Role, Session};
use crate::snapshot::SessionSnapshot;

/// Thread-safe session store.
///
/// Expiry is lazy: every public operation sweeps expired sessions on
/// entry, so an expired id is indistinguishable from an unknown one
/// and no background timer is needed.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
    config: SessionConfig,
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            config,
        }
    }

    /// Create a session and return its initial snapshot.
    pub fn create(&self, size: QuestionSetSize) -> SessionSnapshot {
        let now = Utc::now();
        self.sweep(now);

        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone(), size, now, self.config.ttl_secs);
        let snapshot = SessionSnapshot::from(&session);
        self.sessions.insert(id.clone(), session);
        info!(session_id = %id, size = %size, "session created");
        snapshot
    }

    /// Current snapshot of a live session.
    pub fn fetch(&self, session_id: &str) -> Result<SessionSnapshot, SessionError> {
        let now = Utc::now();
        self.sweep(now);

        self.sessions
            .get(session_id)
            .map(|session| SessionSnapshot::from(&*session))
            .ok_or_else(|| not_found(session_id))
    }

    /// Claim the next free slot: the first caller becomes the user,
    /// the second the partner, the third is turned away.
    pub fn assign_role(&self, session_id: &str) -> Result<Role, SessionError> {
        let now = Utc::now();
        self.sweep(now);

        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| not_found(session_id))?;

        // Check and claim under the entry guard so two concurrent
        // joiners cannot land in the same slot.
        let role = match (session.user.touched(), session.partner.touched()) {
            (false, _) => Role::User,
            (true, false) => Role::Partner,
            (true, true) => {
                warn!(session_id = %session.id, "role assignment on full session");
                return Err(SessionError::Full {
                    session_id: session.id.clone(),
                });
            }
        };
        session.slot_mut(role).updated_at = Some(now);
        info!(session_id = %session.id, role = ?role, "role assigned");
        Ok(role)
    }

    /// Apply a slot mutation and return the post-mutation snapshot.
    pub fn mutate(
        &self,
        session_id: &str,
        role: Role,
        mutation: Mutation,
    ) -> Result<SessionSnapshot, SessionError> {
        let now = Utc::now();
        self.sweep(now);

        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| not_found(session_id))?;
        apply(&mut session, role, mutation, now)?;
        debug!(session_id = %session.id, role = ?role, "mutation applied");
        Ok(SessionSnapshot::from(&*session))
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn sweep(&self, now: DateTime<Utc>) {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(now));
        let swept = before.saturating_sub(self.sessions.len());
        if swept > 0 {
            debug!(swept, "expired sessions removed");
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn not_found(session_id: &str) -> SessionError {
    SessionError::NotFound {
        session_id: session_id.to_string(),
    }
}

fn apply(
    session: &mut Session,
    role: Role,
    mutation: Mutation,
    now: DateTime<Utc>,
) -> Result<(), SessionError> {
    match mutation {
        Mutation::Upsert { question_id, score } => {
            session
                .slot_mut(role)
                .upsert(Answer::new(question_id, score), now);
            Ok(())
        }
        Mutation::SetCompleted(true) => {
            let required = usize::from(session.size.total());
            let slot = session.slot_mut(role);
            if slot.answers.len() != required {
                return Err(SessionError::PrematureCompletion {
                    answered: slot.answers.len(),
                    required,
                });
            }
            slot.completed = true;
            slot.updated_at = Some(now);
            Ok(())
        }
        Mutation::SetCompleted(false) => {
            let slot = session.slot_mut(role);
            slot.completed = false;
            slot.updated_at = Some(now);
            Ok(())
        }
    }
}
