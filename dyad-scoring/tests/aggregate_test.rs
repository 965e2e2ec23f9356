use dyad_core::models::AxisScores;
use dyad_core::quiz::{Answer, QuestionSetSize, Score};
use dyad_scoring::aggregate;

// ── helpers ───────────────────────────────────────────────────────────────

fn uniform_answers(total: u16, score: Score) -> Vec<Answer> {
    (1..=total).map(|id| Answer::new(id, score)).collect()
}

// ── block routing ─────────────────────────────────────────────────────────

#[test]
fn all_strongly_agree_on_18_questions_hits_the_axis_ceiling() {
    let answers = uniform_answers(18, Score::StronglyAgree);
    let scores = aggregate(&answers, QuestionSetSize::Short);
    assert_eq!(scores, AxisScores::new(12, 12, 12));
}

#[test]
fn all_neutral_on_54_questions_sums_to_zero() {
    let answers = uniform_answers(54, Score::Neutral);
    let scores = aggregate(&answers, QuestionSetSize::Full);
    assert_eq!(scores, AxisScores::new(0, 0, 0));
}

#[test]
fn the_same_id_routes_by_the_declared_size() {
    // Id 18 closes the communication block of the 54-question set but
    // the relationship block of the 18-question set.
    let answers = [Answer::new(18, Score::StronglyAgree)];
    let short = aggregate(&answers, QuestionSetSize::Short);
    assert_eq!(short, AxisScores::new(0, 0, 2));
    let full = aggregate(&answers, QuestionSetSize::Full);
    assert_eq!(full, AxisScores::new(2, 0, 0));
}

#[test]
fn block_edges_route_to_their_own_axis() {
    let answers = [
        Answer::new(6, Score::Agree),
        Answer::new(7, Score::StronglyAgree),
        Answer::new(12, Score::Disagree),
        Answer::new(13, Score::StronglyDisagree),
    ];
    let scores = aggregate(&answers, QuestionSetSize::Short);
    assert_eq!(scores, AxisScores::new(1, 1, -2));
}

// ── completeness is the caller's concern ──────────────────────────────────

#[test]
fn missing_answers_contribute_zero() {
    let answers = [
        Answer::new(1, Score::StronglyAgree),
        Answer::new(54, Score::StronglyDisagree),
    ];
    let scores = aggregate(&answers, QuestionSetSize::Full);
    assert_eq!(scores, AxisScores::new(2, 0, -2));
}

#[test]
fn duplicate_ids_in_the_input_slice_are_all_summed() {
    // The aggregator takes the slice as given; last-write-wins
    // deduplication happens in the session layer's upsert.
    let answers = [
        Answer::new(3, Score::Agree),
        Answer::new(3, Score::Agree),
        Answer::new(3, Score::StronglyDisagree),
    ];
    let scores = aggregate(&answers, QuestionSetSize::Short);
    assert_eq!(scores.communication, 0);
}
