//! Error types for the rating engine and match submission
//!
//! Fallible operations return `anyhow::Result`; the domain-specific cases
//! below can be recovered with `downcast_ref::<MatchError>()`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific match scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error("Incomplete match: {reason}")]
    IncompleteMatch { reason: String },

    #[error("Invalid match: {reason}")]
    InvalidMatch { reason: String },

    #[error("Rating calculation failed: {reason}")]
    RatingCalculationFailed { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
