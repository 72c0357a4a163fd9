//! Error types for list operations.

use rfm_model::ReferralId;
use thiserror::Error;

/// Errors returned by [`crate::ReferralList`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ListError {
    /// No record in the list carries this identity.
    #[error("Referral {id} not found")]
    NotFound { id: ReferralId },

    /// The list already holds the largest identity; no new one can be assigned.
    #[error("No referral identity left after {last}")]
    IdsExhausted { last: ReferralId },
}

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;
