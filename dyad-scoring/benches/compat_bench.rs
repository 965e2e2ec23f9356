//! Criterion benchmarks for the scoring pipeline.
//!
//! Targets:
//! - full pipeline (54 answers → aggregate → classify → score) < 0.05ms
//! - exhaustive 729-pair sweep < 1ms

use criterion::{criterion_group, criterion_main, Criterion};

use dyad_core::catalog::TypeCatalog;
use dyad_core::profile::TraitProfile;
use dyad_core::quiz::{Answer, QuestionSetSize, Score};
use dyad_scoring::{aggregate, classify, rank_for_score, resolve, CompatibilityScorer};

/// Helper: a full 54-answer sheet cycling through the Likert domain.
fn make_answer_sheet() -> Vec<Answer> {
    (1..=54)
        .map(|id| {
            let score = Score::ALL[usize::from(id) % Score::ALL.len()];
            Answer::new(id, score)
        })
        .collect()
}

fn bench_full_pipeline(c: &mut Criterion) {
    let catalog = TypeCatalog::builtin(QuestionSetSize::Full);
    let scorer = CompatibilityScorer::new();
    let user_answers = make_answer_sheet();
    let partner_answers: Vec<Answer> = user_answers
        .iter()
        .map(|a| Answer::new(55 - a.question_id, a.score))
        .collect();

    c.bench_function("full_pipeline_54_answers", |b| {
        b.iter(|| {
            let size = QuestionSetSize::Full;
            let user = resolve(classify(aggregate(&user_answers, size), size), &catalog);
            let partner = resolve(classify(aggregate(&partner_answers, size), size), &catalog);
            let compat = scorer.score(&user, &partner);
            rank_for_score(compat.total)
        })
    });
}

fn bench_pair_sweep(c: &mut Criterion) {
    c.bench_function("total_score_729_pairs", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for a in TraitProfile::all() {
                for p in TraitProfile::all() {
                    acc += u32::from(CompatibilityScorer::total(a, p));
                }
            }
            acc
        })
    });
}

criterion_group!(benches, bench_full_pipeline, bench_pair_sweep);
criterion_main!(benches);
