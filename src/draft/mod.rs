//! Match drafts and their submission
//!
//! A [`MatchDraft`] is edited field by field, queried with `can_submit`, and
//! handed to a [`MatchSubmitter`] which rates it and resets it.

pub mod state;
pub mod submission;

// Re-export commonly used types
pub use state::{DraftField, DraftIssue, MatchDraft, TeamSlot, MIN_SETS};
pub use submission::{MatchSubmitter, SubmittedMatch};
