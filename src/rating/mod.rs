//! Elo rating engine
//!
//! This module provides the pure rating functions (expected score, margin
//! multiplier, pairwise update) and the calculator trait built on them.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::{RatingCalculationResult, RatingCalculator};
pub use elo::{expected_score, margin_multiplier, update_rating, EloRatingCalculator};
