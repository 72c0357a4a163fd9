//! Editable referral attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the nine editable attributes of a referral.
///
/// The identity is not a field: it is assigned by the list, never typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReferralField {
    GivenName,
    Surname,
    Email,
    Phone,
    AddressLine,
    Suburb,
    State,
    Postcode,
    Country,
}

impl ReferralField {
    /// All fields, in form order.
    pub const ALL: [Self; 9] = [
        Self::GivenName,
        Self::Surname,
        Self::Email,
        Self::Phone,
        Self::AddressLine,
        Self::Suburb,
        Self::State,
        Self::Postcode,
        Self::Country,
    ];

    /// Fields edited through a free-text input (everything but the country picker).
    pub const TEXT_INPUTS: [Self; 8] = [
        Self::GivenName,
        Self::Surname,
        Self::Email,
        Self::Phone,
        Self::AddressLine,
        Self::Suburb,
        Self::State,
        Self::Postcode,
    ];

    /// Position of this field in [`Self::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// User-visible form label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GivenName => "Given Name",
            Self::Surname => "Surname",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::AddressLine => "Address Line",
            Self::Suburb => "Suburb",
            Self::State => "State",
            Self::Postcode => "Postcode",
            Self::Country => "Country",
        }
    }

    /// Placeholder text for the empty input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::GivenName => "Enter a given name...",
            Self::Surname => "Enter a surname...",
            Self::Email => "Enter an email...",
            Self::Phone => "Enter a phone number...",
            Self::AddressLine => "Enter an address...",
            Self::Suburb => "Enter a suburb...",
            Self::State => "Enter a state...",
            Self::Postcode => "Enter a postcode...",
            Self::Country => "Select a country...",
        }
    }

    /// Field name as used in the seed data keys.
    pub fn key(&self) -> &'static str {
        match self {
            Self::GivenName => "givenName",
            Self::Surname => "surName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::AddressLine => "addressLine",
            Self::Suburb => "suburb",
            Self::State => "state",
            Self::Postcode => "postCode",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for ReferralField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
