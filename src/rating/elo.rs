//! Elo rating engine with level-scaled K-factors and a set-margin multiplier
//!
//! The free functions here are the pure numeric core: no state, no I/O.
//! Non-finite ratings are not guarded against; callers reject them first.

use crate::config::{RatingConfig, RoundingMode};
use crate::error::MatchError;
use crate::rating::calculator::{RatingCalculationResult, RatingCalculator};
use crate::types::{CompetitionLevel, MatchOutcome, PlayerId, RatingChange, RatingUpdate, SetScore};
use tracing::debug;

/// Rating gap at which the stronger side is expected to score ~0.91
pub const ELO_SCALE: f64 = 400.0;

/// Summed set differential worth one extra K
pub const MARGIN_DIVISOR: f64 = 12.0;

/// Upper bound of the margin multiplier
pub const MARGIN_CAP: f64 = 1.4;

/// Smallest delta a winner can receive
pub const WIN_FLOOR: f64 = 1.0;

/// Logistic expectation of `rating` scoring against `opponent_rating`
pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent_rating - rating) / ELO_SCALE))
}

/// Multiplier in `[1.0, 1.4]` growing with the total point differential
pub fn margin_multiplier(sets: &[SetScore]) -> f64 {
    let total: f64 = sets.iter().map(|set| f64::from(set.differential())).sum();
    (1.0 + total / MARGIN_DIVISOR).min(MARGIN_CAP)
}

/// Rate one side of a match, rounding half away from zero
///
/// A win always gains at least one point, even for a heavy favourite.
/// Draws and losses are not floored.
pub fn update_rating(
    rating: f64,
    opponent_rating: f64,
    outcome: MatchOutcome,
    level: CompetitionLevel,
    multiplier: f64,
) -> RatingUpdate {
    update_rating_with(
        rating,
        opponent_rating,
        outcome,
        level,
        multiplier,
        RoundingMode::HalfAwayFromZero,
    )
}

/// [`update_rating`] with an explicit rounding convention
pub fn update_rating_with(
    rating: f64,
    opponent_rating: f64,
    outcome: MatchOutcome,
    level: CompetitionLevel,
    multiplier: f64,
    rounding: RoundingMode,
) -> RatingUpdate {
    let expected = expected_score(rating, opponent_rating);
    let raw = level.k_factor() * multiplier * (outcome.score() - expected);
    let mut delta = rounding.apply(raw);

    if outcome.is_win() && delta < WIN_FLOOR {
        delta = WIN_FLOOR;
    }

    RatingUpdate {
        new_rating: rating + delta,
        delta,
    }
}

fn team_mean(team: &[(PlayerId, f64)]) -> f64 {
    team.iter().map(|(_, rating)| rating).sum::<f64>() / team.len() as f64
}

/// Elo implementation of [`RatingCalculator`]
#[derive(Debug, Clone)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a calculator, rejecting invalid configuration
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn rating_config(&self) -> &RatingConfig {
        &self.config
    }

    fn rate_team(
        &self,
        team: &[(PlayerId, f64)],
        opponent_rating: f64,
        outcome: MatchOutcome,
        level: CompetitionLevel,
        multiplier: f64,
    ) -> Vec<RatingChange> {
        team.iter()
            .map(|(player_id, rating)| {
                let update = self.rate_pair(*rating, opponent_rating, outcome, level, multiplier);
                debug!(
                    player_id = %player_id,
                    old_rating = rating,
                    opponent_rating,
                    delta = update.delta,
                    "Rated player"
                );
                RatingChange {
                    player_id: player_id.clone(),
                    old_rating: *rating,
                    new_rating: update.new_rating,
                    delta: update.delta,
                    opponent_rating,
                }
            })
            .collect()
    }
}

impl Default for EloRatingCalculator {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
        }
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn rate_pair(
        &self,
        rating: f64,
        opponent_rating: f64,
        outcome: MatchOutcome,
        level: CompetitionLevel,
        multiplier: f64,
    ) -> RatingUpdate {
        update_rating_with(
            rating,
            opponent_rating,
            outcome,
            level,
            multiplier,
            self.config.rounding,
        )
    }

    fn calculate_match(
        &self,
        team1: &[(PlayerId, f64)],
        team2: &[(PlayerId, f64)],
        outcome: MatchOutcome,
        level: CompetitionLevel,
        sets: &[SetScore],
    ) -> crate::error::Result<RatingCalculationResult> {
        if team1.is_empty() || team2.is_empty() {
            return Err(MatchError::InvalidMatch {
                reason: "both teams need at least one player to be rated".to_string(),
            }
            .into());
        }

        let multiplier = margin_multiplier(sets);
        let mean1 = team_mean(team1);
        let mean2 = team_mean(team2);

        let mut changes = self.rate_team(team1, mean2, outcome, level, multiplier);
        changes.extend(self.rate_team(team2, mean1, outcome.flipped(), level, multiplier));

        Ok(RatingCalculationResult {
            changes,
            multiplier,
            expected_score_a: expected_score(mean1, mean2),
        })
    }

    fn initial_rating(&self) -> f64 {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "elo",
            "initial_rating": self.config.initial_rating,
            "rounding": self.config.rounding,
            "margin_divisor": MARGIN_DIVISOR,
            "margin_cap": MARGIN_CAP,
            "win_floor": WIN_FLOOR,
        })
    }
}
