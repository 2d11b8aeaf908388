//! Match Rating - Elo ladder core for amateur racket sport matches
//!
//! This crate provides the rating engine (expected score, set-margin
//! multiplier, level-scaled updates) and the match-draft state used to
//! compose a result before it is rated.

pub mod config;
pub mod draft;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{MatchError, Result};
pub use types::*;

// Re-export key components
pub use draft::{DraftField, MatchDraft, MatchSubmitter};
pub use rating::{EloRatingCalculator, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
