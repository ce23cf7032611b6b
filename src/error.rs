//! Error taxonomy for the scoring engine.
//!
//! Missing or non-numeric measurements are not errors; they surface as `None`
//! scores. Only conditions the caller has to act on are reported here.

use crate::profiles::Factor;

// ---

/// Scoring engine errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// Requested profile is not present in the profile table
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// A custom profile carries a negative or non-finite weight
    #[error("Invalid weight for profile '{profile}', factor {factor}: {value}")]
    InvalidWeight {
        /// Profile name
        profile: String,
        /// Offending factor
        factor: Factor,
        /// Rejected weight
        value: f64,
    },
}
