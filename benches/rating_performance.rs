//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match_rating::draft::{DraftField, MatchDraft, MatchSubmitter};
use match_rating::rating::{margin_multiplier, update_rating, EloRatingCalculator, RatingCalculator};
use match_rating::types::{CompetitionLevel, MatchOutcome, MatchType, SetScore};
use std::collections::HashMap;

fn bench_pairwise_update(c: &mut Criterion) {
    let sets = [SetScore::new(6, 4), SetScore::new(3, 6), SetScore::super_tiebreak(10, 7)];

    c.bench_function("update_rating_single_pair", |b| {
        b.iter(|| {
            let multiplier = margin_multiplier(black_box(&sets));
            black_box(update_rating(
                black_box(1350.0),
                black_box(1210.0),
                MatchOutcome::WinA,
                CompetitionLevel::League,
                multiplier,
            ))
        })
    });
}

fn bench_doubles_match(c: &mut Criterion) {
    let calculator = EloRatingCalculator::default();
    let team1 = vec![("ana".to_string(), 1300.0), ("bea".to_string(), 1120.0)];
    let team2 = vec![("cruz".to_string(), 1250.0), ("dani".to_string(), 1190.0)];
    let sets = [SetScore::new(7, 5), SetScore::new(6, 7), SetScore::super_tiebreak(10, 8)];

    c.bench_function("calculate_match_doubles", |b| {
        b.iter(|| {
            black_box(calculator.calculate_match(
                &team1,
                &team2,
                MatchOutcome::WinA,
                CompetitionLevel::Tournament,
                &sets,
            ))
        })
    });
}

fn bench_submit_draft(c: &mut Criterion) {
    let submitter = MatchSubmitter::new(EloRatingCalculator::default());
    let ratings: HashMap<String, f64> = [("p1", 1040.0), ("p2", 980.0)]
        .iter()
        .map(|(id, rating)| (id.to_string(), *rating))
        .collect();

    c.bench_function("submit_singles_draft", |b| {
        b.iter(|| {
            let mut draft = MatchDraft::new();
            draft.set_field(DraftField::MatchType(MatchType::Singles));
            draft.set_field(DraftField::Team1(vec!["p1".to_string()]));
            draft.set_field(DraftField::Team2(vec!["p2".to_string()]));
            draft.set_field(DraftField::Sets(vec![SetScore::new(6, 2), SetScore::new(6, 3)]));
            black_box(submitter.submit(&mut draft, &ratings))
        })
    });
}

criterion_group!(
    benches,
    bench_pairwise_update,
    bench_doubles_match,
    bench_submit_draft
);
criterion_main!(benches);
