//! Referral table rows.

use rfm_model::{Referral, ReferralId};
use serde::Serialize;

use crate::list::ReferralList;

/// Column headers of the referral table, left to right.
pub const TABLE_HEADERS: [&str; 6] = [
    "Given Name",
    "Surname",
    "Email",
    "Phone",
    "Address",
    "Actions",
];

/// One displayed table row.
///
/// The actions column carries no text; it is rendered from `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferralRow {
    pub id: ReferralId,
    pub given_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ReferralRow {
    /// Text cells in column order, excluding the actions column.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.given_name.as_str(),
            self.surname.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
        ]
    }
}

impl From<&Referral> for ReferralRow {
    fn from(referral: &Referral) -> Self {
        Self {
            id: referral.id,
            given_name: referral.given_name.clone(),
            surname: referral.surname.clone(),
            email: referral.email.clone(),
            phone: referral.phone.clone(),
            address: referral.display_address(),
        }
    }
}

/// Rows for every referral, in list order.
pub fn rows(list: &ReferralList) -> Vec<ReferralRow> {
    list.as_slice().iter().map(ReferralRow::from).collect()
}
