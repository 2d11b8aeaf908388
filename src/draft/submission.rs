//! Submission workflow: validate a draft, rate it, then reset it

use crate::draft::state::MatchDraft;
use crate::rating::calculator::RatingCalculator;
use crate::types::{CompetitionLevel, MatchId, MatchOutcome, MatchType, PlayerId, RatingChange, SetScore};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// A validated, rated match ready to hand to persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedMatch {
    pub match_id: MatchId,
    pub idempotency_key: String,
    pub date: NaiveDate,
    pub match_type: MatchType,
    pub match_level: CompetitionLevel,
    pub team1: Vec<PlayerId>,
    pub team2: Vec<PlayerId>,
    pub sets: Vec<SetScore>,
    pub notes: Option<String>,
    /// Result from team 1's side, derived from the sets
    pub outcome: MatchOutcome,
    pub multiplier: f64,
    pub changes: Vec<RatingChange>,
}

/// Drives drafts through submission using a rating calculator
#[derive(Debug)]
pub struct MatchSubmitter<C: RatingCalculator> {
    calculator: C,
}

impl<C: RatingCalculator> MatchSubmitter<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Submit the draft against a snapshot of current ratings
    ///
    /// Nothing is rated unless the draft passes validation. Players missing
    /// from `ratings` start at the calculator's initial rating. On success the
    /// draft is reset; on failure it is left untouched.
    pub fn submit(
        &self,
        draft: &mut MatchDraft,
        ratings: &HashMap<PlayerId, f64>,
    ) -> crate::error::Result<SubmittedMatch> {
        draft.validate()?;

        let outcome = MatchOutcome::from_sets(&draft.sets);
        let team1 = self.lookup_team(&draft.team1, ratings);
        let team2 = self.lookup_team(&draft.team2, ratings);

        let result =
            self.calculator
                .calculate_match(&team1, &team2, outcome, draft.match_level, &draft.sets)?;

        let idempotency_key = draft
            .idempotency_key
            .clone()
            .unwrap_or_else(crate::utils::generate_idempotency_key);

        let submitted = SubmittedMatch {
            match_id: crate::utils::generate_match_id(),
            idempotency_key,
            date: draft.date,
            match_type: draft.match_type,
            match_level: draft.match_level,
            team1: std::mem::take(&mut draft.team1),
            team2: std::mem::take(&mut draft.team2),
            sets: std::mem::take(&mut draft.sets),
            notes: draft.notes.take(),
            outcome,
            multiplier: result.multiplier,
            changes: result.changes,
        };

        info!(
            match_id = %submitted.match_id,
            level = %submitted.match_level,
            match_type = %submitted.match_type,
            outcome = ?submitted.outcome,
            "Match submitted"
        );

        draft.reset();
        Ok(submitted)
    }

    /// Abandon the draft
    pub fn cancel(&self, draft: &mut MatchDraft) {
        debug!("Match draft cancelled");
        draft.reset();
    }

    fn lookup_team(
        &self,
        members: &[PlayerId],
        ratings: &HashMap<PlayerId, f64>,
    ) -> Vec<(PlayerId, f64)> {
        members
            .iter()
            .map(|player_id| {
                let rating = ratings.get(player_id).copied().unwrap_or_else(|| {
                    let initial = self.calculator.initial_rating();
                    warn!(player_id = %player_id, initial, "No rating on record, using initial rating");
                    initial
                });
                (player_id.clone(), rating)
            })
            .collect()
    }
}
