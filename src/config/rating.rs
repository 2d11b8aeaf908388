//! Rating system configuration

use crate::error::MatchError;
use serde::{Deserialize, Serialize};

/// How a fractional rating delta is turned into whole points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 8.5 -> 9, -8.5 -> -9
    #[default]
    HalfAwayFromZero,
    /// 8.5 -> 8, 9.5 -> 10
    HalfEven,
}

impl RoundingMode {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfAwayFromZero => value.round(),
            RoundingMode::HalfEven => value.round_ties_even(),
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "half_away_from_zero" => Ok(RoundingMode::HalfAwayFromZero),
            "half_even" => Ok(RoundingMode::HalfEven),
            other => Err(MatchError::ConfigurationError {
                message: format!("unknown rounding mode '{}'", other),
            }),
        }
    }
}

/// Rating calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating assigned to players with no recorded history
    pub initial_rating: f64,
    /// Rounding applied to each delta before the win floor
    pub rounding: RoundingMode,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1000.0,
            rounding: RoundingMode::HalfAwayFromZero,
        }
    }
}

impl RatingConfig {
    /// Settings for replaying ratings that were stored with banker's rounding
    pub fn historical_parity() -> Self {
        Self {
            rounding: RoundingMode::HalfEven,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.initial_rating.is_finite() {
            return Err(MatchError::ConfigurationError {
                message: format!("initial rating must be finite, got {}", self.initial_rating),
            }
            .into());
        }
        Ok(())
    }
}
