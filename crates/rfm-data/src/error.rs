//! Error types for seed data loading.

use std::path::PathBuf;

use rfm_model::ReferralId;
use thiserror::Error;

/// Errors that can occur when loading seed data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// Seed file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Referral JSON could not be parsed.
    #[error("Failed to parse referrals: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// Country CSV could not be parsed.
    #[error("Failed to parse countries: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Two seed referrals share an identity.
    #[error("Duplicate referral id {id} in seed data")]
    DuplicateId { id: ReferralId },
}

/// Result type for seed data loading.
pub type Result<T> = std::result::Result<T, DataError>;
