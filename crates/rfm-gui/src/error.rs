//! GUI-specific error types.
//!
//! Startup data problems are reported here and shown as a banner above the
//! table instead of aborting the application.

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// Seed referrals could not be loaded.
    #[error("Failed to load referrals: {reason}")]
    ReferralLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Country reference table could not be loaded.
    #[error("Failed to load countries: {reason}")]
    CountryLoad {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Short title for display.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ReferralLoad { .. } => "Referrals Unavailable",
            Self::CountryLoad { .. } => "Countries Unavailable",
        }
    }
}

impl From<rfm_data::DataError> for GuiError {
    fn from(err: rfm_data::DataError) -> Self {
        Self::ReferralLoad {
            reason: err.to_string(),
        }
    }
}
