//! Property tests for the rating engine and draft state

mod fixtures;

use match_rating::draft::{DraftField, MatchDraft};
use match_rating::rating::{expected_score, margin_multiplier, update_rating};
use match_rating::types::{CompetitionLevel, MatchOutcome, MatchType, SetScore};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = f64> {
    -1000.0f64..4000.0
}

fn level() -> impl Strategy<Value = CompetitionLevel> {
    prop::sample::select(CompetitionLevel::ALL.to_vec())
}

fn outcome() -> impl Strategy<Value = MatchOutcome> {
    prop::sample::select(vec![MatchOutcome::WinA, MatchOutcome::Draw, MatchOutcome::WinB])
}

fn set_score() -> impl Strategy<Value = SetScore> {
    (0u32..15, 0u32..15, any::<bool>()).prop_map(|(points_a, points_b, super_tiebreak)| SetScore {
        points_a,
        points_b,
        super_tiebreak,
    })
}

fn set_list() -> impl Strategy<Value = Vec<SetScore>> {
    prop::collection::vec(set_score(), 0..6)
}

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..4)
}

fn draft_field() -> impl Strategy<Value = DraftField> {
    prop_oneof![
        prop::sample::select(vec![MatchType::Singles, MatchType::Doubles])
            .prop_map(DraftField::MatchType),
        level().prop_map(DraftField::MatchLevel),
        names().prop_map(DraftField::Team1),
        names().prop_map(DraftField::Team2),
        set_list().prop_map(DraftField::Sets),
        prop::option::of("[ -~]{0,20}").prop_map(DraftField::Notes),
        prop::option::of("[a-f0-9]{8}").prop_map(DraftField::IdempotencyKey),
    ]
}

proptest! {
    #[test]
    fn expected_scores_sum_to_one(a in rating(), b in rating()) {
        let sum = expected_score(a, b) + expected_score(b, a);
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn expected_score_of_equal_ratings_is_half(r in rating()) {
        prop_assert_eq!(expected_score(r, r), 0.5);
    }

    #[test]
    fn margin_multiplier_is_bounded(sets in set_list()) {
        let multiplier = margin_multiplier(&sets);
        prop_assert!((1.0..=1.4).contains(&multiplier));
    }

    #[test]
    fn margin_multiplier_never_shrinks_when_a_set_is_added(sets in set_list(), extra in set_score()) {
        let before = margin_multiplier(&sets);
        let mut longer = sets.clone();
        longer.push(extra);
        prop_assert!(margin_multiplier(&longer) >= before);
    }

    #[test]
    fn winners_gain_at_least_one_point(
        r in rating(),
        o in rating(),
        level in level(),
        sets in set_list(),
    ) {
        let update = update_rating(r, o, MatchOutcome::WinA, level, margin_multiplier(&sets));
        prop_assert!(update.delta >= 1.0);
        prop_assert_eq!(update.new_rating, r + update.delta);
    }

    #[test]
    fn deltas_are_whole_points(
        r in rating(),
        o in rating(),
        outcome in outcome(),
        level in level(),
        sets in set_list(),
    ) {
        let update = update_rating(r, o, outcome, level, margin_multiplier(&sets));
        prop_assert_eq!(update.delta, update.delta.trunc());
    }

    #[test]
    fn losers_never_gain(r in rating(), o in rating(), level in level(), sets in set_list()) {
        let update = update_rating(r, o, MatchOutcome::WinB, level, margin_multiplier(&sets));
        prop_assert!(update.delta <= 0.0);
    }

    #[test]
    fn set_field_always_applies(field in draft_field()) {
        let mut draft = MatchDraft::new_on(fixtures::match_day());
        draft.set_field(field.clone());

        let applied = match field {
            DraftField::MatchType(v) => draft.match_type == v,
            DraftField::MatchLevel(v) => draft.match_level == v,
            DraftField::Date(v) => draft.date == v,
            DraftField::Team1(v) => draft.team1 == v,
            DraftField::Team2(v) => draft.team2 == v,
            DraftField::Sets(v) => draft.sets == v,
            DraftField::Notes(v) => draft.notes == v,
            DraftField::IdempotencyKey(v) => draft.idempotency_key == v,
        };
        prop_assert!(applied);
    }

    #[test]
    fn reset_restores_defaults_from_any_state(fields in prop::collection::vec(draft_field(), 0..10)) {
        let mut draft = MatchDraft::new_on(fixtures::match_day());
        for field in fields {
            draft.set_field(field);
        }

        draft.reset_on(fixtures::match_day());
        prop_assert_eq!(&draft, &MatchDraft::new_on(fixtures::match_day()));
        draft.reset_on(fixtures::match_day());
        prop_assert_eq!(&draft, &MatchDraft::new_on(fixtures::match_day()));
    }

    #[test]
    fn can_submit_matches_invariants(fields in prop::collection::vec(draft_field(), 0..10)) {
        let mut draft = MatchDraft::new_on(fixtures::match_day());
        for field in fields {
            draft.set_field(field);
        }

        let size = draft.match_type.team_size();
        let expected = draft.team1.len() == size && draft.team2.len() == size && draft.sets.len() >= 2;
        prop_assert_eq!(draft.can_submit(), expected);
        prop_assert_eq!(draft.issues().is_empty(), expected);
    }
}
