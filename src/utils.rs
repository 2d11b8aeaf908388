//! Utility functions for match submission

use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// Generate a new unique match ID
pub fn generate_match_id() -> Uuid {
    Uuid::new_v4()
}

/// Generate a key that lets persistence drop duplicate submissions
pub fn generate_idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
