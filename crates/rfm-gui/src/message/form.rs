//! Add/edit form messages.

use rfm_model::{Country, ReferralField};

/// Input events from the open add or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// A text input changed
    FieldChanged(ReferralField, String),
    /// A country was picked
    CountrySelected(Country),
    /// The country selection was cleared
    CountryCleared,
}
