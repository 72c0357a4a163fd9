//! Committed referral records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a referral record.
///
/// Unique within a referral list and assigned monotonically on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferralId(pub u32);

impl ReferralId {
    /// The identity given to the first record of an empty list.
    pub const FIRST: Self = Self(1);

    /// The identity that follows this one, or `None` past `u32::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ReferralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A referral contact record.
///
/// Field names on the wire follow the mock-data shape (`givenName`,
/// `surName`, `addressLine`, `postCode`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub id: ReferralId,
    pub given_name: String,
    #[serde(rename = "surName")]
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub address_line: String,
    pub suburb: String,
    pub state: String,
    #[serde(rename = "postCode")]
    pub postcode: String,
    pub country: String,
}

impl Referral {
    /// Address shown in the table's address column.
    ///
    /// Address line, suburb, state, postcode and country joined by single
    /// spaces, in that order. Values are not trimmed.
    pub fn display_address(&self) -> String {
        [
            self.address_line.as_str(),
            self.suburb.as_str(),
            self.state.as_str(),
            self.postcode.as_str(),
            self.country.as_str(),
        ]
        .join(" ")
    }

    /// Given name and surname, as shown in the delete confirmation.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.surname)
    }
}
