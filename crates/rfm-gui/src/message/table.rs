//! Referral table messages.

use rfm_model::ReferralId;

/// Actions available from the referral table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMessage {
    /// "Create New" button pressed
    CreateNew,
    /// Edit icon pressed on a row
    Edit(ReferralId),
    /// Delete icon pressed on a row
    Delete(ReferralId),
}
