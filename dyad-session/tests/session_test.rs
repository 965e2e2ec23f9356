use chrono::Duration;

use dyad_core::config::SessionConfig;
use dyad_core::errors::SessionError;
use dyad_core::quiz::{QuestionSetSize, Score};
use dyad_session::{Mutation, Role, SessionStore};

fn store_with_ttl(ttl_secs: i64) -> SessionStore {
    SessionStore::new(SessionConfig { ttl_secs })
}

fn fill_slot(store: &SessionStore, id: &str, role: Role, size: QuestionSetSize, score: Score) {
    for question_id in 1..=size.total() {
        store
            .mutate(id, role, Mutation::Upsert { question_id, score })
            .unwrap();
    }
}

// ── creation and fetch ────────────────────────────────────────────────────

#[test]
fn create_then_fetch_round_trips() {
    let store = SessionStore::default();
    let created = store.create(QuestionSetSize::Short);

    assert_eq!(created.size, QuestionSetSize::Short);
    assert!(created.user.answers.is_empty());
    assert!(created.partner.answers.is_empty());
    assert!(!created.ready_for_result);
    assert_eq!(created.result_query, None);
    // Default TTL is one day from creation.
    assert_eq!(
        created.expires_at - created.created_at,
        Duration::seconds(86_400)
    );

    let fetched = store.fetch(&created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn unknown_ids_are_not_found_everywhere() {
    let store = SessionStore::default();
    assert!(matches!(
        store.fetch("nope"),
        Err(SessionError::NotFound { .. })
    ));
    assert!(matches!(
        store.assign_role("nope"),
        Err(SessionError::NotFound { .. })
    ));
    assert!(matches!(
        store.mutate("nope", Role::User, Mutation::SetCompleted(false)),
        Err(SessionError::NotFound { .. })
    ));
}

// ── role assignment ───────────────────────────────────────────────────────

#[test]
fn roles_assign_first_come_first_served() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Full).id;

    assert_eq!(store.assign_role(&id), Ok(Role::User));
    assert_eq!(store.assign_role(&id), Ok(Role::Partner));
    assert_eq!(
        store.assign_role(&id),
        Err(SessionError::Full {
            session_id: id.clone()
        })
    );
}

#[test]
fn concurrent_joiners_get_distinct_roles() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Full).id;

    let mut roles: Vec<Role> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2).map(|_| scope.spawn(|| store.assign_role(&id))).collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });
    roles.sort_by_key(|role| *role == Role::Partner);

    assert_eq!(roles, vec![Role::User, Role::Partner]);
    assert!(matches!(
        store.assign_role(&id),
        Err(SessionError::Full { .. })
    ));
}

#[test]
fn direct_slot_activity_counts_as_claimed() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Short).id;

    // A partner writing answers without an explicit join claims the slot.
    store
        .mutate(
            &id,
            Role::Partner,
            Mutation::Upsert {
                question_id: 1,
                score: Score::Agree,
            },
        )
        .unwrap();

    assert_eq!(store.assign_role(&id), Ok(Role::User));
    assert!(matches!(
        store.assign_role(&id),
        Err(SessionError::Full { .. })
    ));
}

// ── answer upsert ─────────────────────────────────────────────────────────

#[test]
fn upsert_is_last_write_wins_per_question() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Short).id;

    for score in [Score::Agree, Score::StronglyDisagree] {
        store
            .mutate(
                &id,
                Role::User,
                Mutation::Upsert {
                    question_id: 7,
                    score,
                },
            )
            .unwrap();
    }

    let snapshot = store.fetch(&id).unwrap();
    assert_eq!(snapshot.user.answers.len(), 1, "re-answering must replace");
    assert_eq!(snapshot.user.answers[0].question_id, 7);
    assert_eq!(snapshot.user.answers[0].score, Score::StronglyDisagree);
}

#[test]
fn repeating_an_identical_answer_changes_nothing() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Short).id;
    let upsert = Mutation::Upsert {
        question_id: 4,
        score: Score::Agree,
    };

    let first = store.mutate(&id, Role::User, upsert).unwrap();
    let second = store.mutate(&id, Role::User, upsert).unwrap();
    assert_eq!(first.user.answers, second.user.answers);
    assert_eq!(second.user.answers.len(), 1);
}

#[test]
fn upsert_reopens_a_completed_slot() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Short).id;

    fill_slot(&store, &id, Role::User, QuestionSetSize::Short, Score::Neutral);
    let done = store
        .mutate(&id, Role::User, Mutation::SetCompleted(true))
        .unwrap();
    assert!(done.user.completed);

    let reopened = store
        .mutate(
            &id,
            Role::User,
            Mutation::Upsert {
                question_id: 3,
                score: Score::Agree,
            },
        )
        .unwrap();
    assert!(!reopened.user.completed, "any upsert reopens the slot");
}

// ── completion ────────────────────────────────────────────────────────────

#[test]
fn premature_completion_is_rejected_with_progress() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Full).id;

    // The user finishes all 54 and confirms; the partner stops at 53.
    fill_slot(&store, &id, Role::User, QuestionSetSize::Full, Score::Agree);
    store
        .mutate(&id, Role::User, Mutation::SetCompleted(true))
        .unwrap();
    for question_id in 1..=53u16 {
        store
            .mutate(
                &id,
                Role::Partner,
                Mutation::Upsert {
                    question_id,
                    score: Score::Disagree,
                },
            )
            .unwrap();
    }

    assert_eq!(
        store.mutate(&id, Role::Partner, Mutation::SetCompleted(true)),
        Err(SessionError::PrematureCompletion {
            answered: 53,
            required: 54
        })
    );
    assert!(!store.fetch(&id).unwrap().ready_for_result);

    // The missing answer unblocks completion.
    store
        .mutate(
            &id,
            Role::Partner,
            Mutation::Upsert {
                question_id: 54,
                score: Score::Disagree,
            },
        )
        .unwrap();
    let snapshot = store
        .mutate(&id, Role::Partner, Mutation::SetCompleted(true))
        .unwrap();
    assert!(snapshot.user.completed && snapshot.partner.completed);
    assert!(snapshot.ready_for_result);
}

#[test]
fn withdrawing_completion_never_errors() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Short).id;
    let snapshot = store
        .mutate(&id, Role::User, Mutation::SetCompleted(false))
        .unwrap();
    assert!(!snapshot.user.completed);
}

// ── result readiness ──────────────────────────────────────────────────────

#[test]
fn completing_both_slots_yields_the_result_query() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Short).id;

    fill_slot(
        &store,
        &id,
        Role::User,
        QuestionSetSize::Short,
        Score::StronglyAgree,
    );
    fill_slot(
        &store,
        &id,
        Role::Partner,
        QuestionSetSize::Short,
        Score::StronglyDisagree,
    );
    store
        .mutate(&id, Role::User, Mutation::SetCompleted(true))
        .unwrap();
    let snapshot = store
        .mutate(&id, Role::Partner, Mutation::SetCompleted(true))
        .unwrap();

    assert!(snapshot.ready_for_result);
    assert_eq!(
        snapshot.result_query.as_deref(),
        Some(
            "userType=assertive-logical-independent&userComm=12&userDec=12&userRel=12\
             &partnerType=receptive-intuitive-devoted&partnerComm=-12&partnerDec=-12&partnerRel=-12"
        )
    );
}

#[test]
fn reopening_either_slot_withdraws_the_result() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Short).id;

    for role in [Role::User, Role::Partner] {
        fill_slot(&store, &id, role, QuestionSetSize::Short, Score::Neutral);
        store
            .mutate(&id, role, Mutation::SetCompleted(true))
            .unwrap();
    }
    assert!(store.fetch(&id).unwrap().ready_for_result);

    let snapshot = store
        .mutate(
            &id,
            Role::Partner,
            Mutation::Upsert {
                question_id: 9,
                score: Score::StronglyAgree,
            },
        )
        .unwrap();
    assert!(!snapshot.ready_for_result);
    assert_eq!(snapshot.result_query, None);
}

// ── expiry ────────────────────────────────────────────────────────────────

#[test]
fn negative_ttl_sessions_are_born_expired() {
    let store = store_with_ttl(-1);
    let created = store.create(QuestionSetSize::Short);
    assert!(created.expires_at < created.created_at);

    assert!(matches!(
        store.fetch(&created.id),
        Err(SessionError::NotFound { .. })
    ));
    assert!(store.is_empty(), "the failed fetch must sweep the entry");
}

#[test]
fn any_access_sweeps_expired_sessions() {
    let store = store_with_ttl(-1);
    let first = store.create(QuestionSetSize::Short);
    let second = store.create(QuestionSetSize::Short);

    // Creating the second session swept the first on entry.
    assert_eq!(store.len(), 1);
    assert!(matches!(
        store.mutate(
            &first.id,
            Role::User,
            Mutation::SetCompleted(false)
        ),
        Err(SessionError::NotFound { .. })
    ));
    assert!(matches!(
        store.fetch(&second.id),
        Err(SessionError::NotFound { .. })
    ));
    assert!(store.is_empty());
}

// ── snapshot wire shape ───────────────────────────────────────────────────

#[test]
fn snapshots_serialize_with_stable_field_names() {
    let store = SessionStore::default();
    let id = store.create(QuestionSetSize::Short).id;
    store
        .mutate(
            &id,
            Role::User,
            Mutation::Upsert {
                question_id: 1,
                score: Score::StronglyAgree,
            },
        )
        .unwrap();

    let value = serde_json::to_value(store.fetch(&id).unwrap()).unwrap();
    assert_eq!(value["size"], 18);
    assert_eq!(value["user"]["answers"][0]["question_id"], 1);
    assert_eq!(value["user"]["answers"][0]["score"], 2);
    assert_eq!(value["user"]["completed"], false);
    assert_eq!(value["partner"]["answers"], serde_json::json!([]));
    assert_eq!(value["ready_for_result"], false);
    assert!(value["result_query"].is_null());
}
