//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use match_rating::draft::{DraftField, MatchDraft};
use match_rating::types::{CompetitionLevel, MatchType, PlayerId, SetScore};
use std::collections::HashMap;

pub fn match_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 14).unwrap()
}

pub fn ids(names: &[&str]) -> Vec<PlayerId> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Ratings snapshot as persistence would hand it over
pub fn ladder(entries: &[(&str, f64)]) -> HashMap<PlayerId, f64> {
    entries
        .iter()
        .map(|(id, rating)| (id.to_string(), *rating))
        .collect()
}

/// Doubles draft filled in the way the editing screen would
pub fn doubles_draft(level: CompetitionLevel, sets: Vec<SetScore>) -> MatchDraft {
    let mut draft = MatchDraft::new_on(match_day());
    draft.set_field(DraftField::MatchType(MatchType::Doubles));
    draft.set_field(DraftField::MatchLevel(level));
    draft.set_field(DraftField::Team1(ids(&["ana", "bea"])));
    draft.set_field(DraftField::Team2(ids(&["cruz", "dani"])));
    draft.set_field(DraftField::Sets(sets));
    draft
}
