//! Rating calculator trait
//!
//! This module defines the interface the submission workflow rates matches
//! through, so the engine can be swapped or mocked.

use crate::types::{CompetitionLevel, MatchOutcome, PlayerId, RatingChange, RatingUpdate, SetScore};
use serde::{Deserialize, Serialize};

/// Result of rating a whole match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCalculationResult {
    /// Rating changes for all players, team 1 first
    pub changes: Vec<RatingChange>,
    /// Margin multiplier derived from the set scores
    pub multiplier: f64,
    /// Pre-match expectation for team 1 (0.0 to 1.0)
    pub expected_score_a: f64,
}

impl RatingCalculationResult {
    /// Change recorded for a given player, if they took part
    pub fn change_for(&self, player_id: &str) -> Option<&RatingChange> {
        self.changes.iter().find(|change| change.player_id == player_id)
    }
}

/// Trait for calculating rating changes after matches
#[cfg_attr(test, mockall::automock)]
pub trait RatingCalculator: Send + Sync {
    /// Rate one participant against an opponent rating
    ///
    /// # Arguments
    /// * `outcome` - Result from the rated participant's side
    /// * `multiplier` - Margin multiplier for the match
    fn rate_pair(
        &self,
        rating: f64,
        opponent_rating: f64,
        outcome: MatchOutcome,
        level: CompetitionLevel,
        multiplier: f64,
    ) -> RatingUpdate;

    /// Calculate rating changes for every participant of a match
    ///
    /// # Arguments
    /// * `team1` / `team2` - (player_id, current_rating) pairs
    /// * `outcome` - Result from team 1's side
    /// * `sets` - Set scores, used for the margin multiplier
    fn calculate_match(
        &self,
        team1: &[(PlayerId, f64)],
        team2: &[(PlayerId, f64)],
        outcome: MatchOutcome,
        level: CompetitionLevel,
        sets: &[SetScore],
    ) -> crate::error::Result<RatingCalculationResult>;

    /// Rating for players with no history
    fn initial_rating(&self) -> f64;

    /// Current configuration as JSON
    fn config(&self) -> serde_json::Value;
}
