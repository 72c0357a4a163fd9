//! Per-field validation failures.
//!
//! A [`FieldErrors`] value holds one optional [`FieldError`] per
//! [`ReferralField`]. A filled slot means the field is currently invalid; an
//! empty slot means it is valid or has not been touched yet.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::ReferralField;

/// A validation failure for a single field.
///
/// Each variant maps to the fixed message shown beneath the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldError {
    /// A mandatory field was left empty.
    Mandatory(ReferralField),
    /// The email does not look like `local@domain`.
    InvalidEmail,
    /// The phone number does not match the accepted layouts.
    InvalidPhone,
    /// The postcode is not 4 to 10 digits.
    InvalidPostcode,
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> ReferralField {
        match self {
            Self::Mandatory(field) => *field,
            Self::InvalidEmail => ReferralField::Email,
            Self::InvalidPhone => ReferralField::Phone,
            Self::InvalidPostcode => ReferralField::Postcode,
        }
    }

    /// User-visible message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Mandatory(ReferralField::GivenName) => "Given Name is mandatory",
            Self::Mandatory(ReferralField::Surname) => "Surname is mandatory",
            Self::Mandatory(ReferralField::Email) => "Email is mandatory",
            Self::Mandatory(ReferralField::Phone) => "Phone is mandatory",
            Self::Mandatory(ReferralField::AddressLine) => "Address Line is mandatory",
            Self::Mandatory(ReferralField::Suburb) => "Suburb is mandatory",
            Self::Mandatory(ReferralField::State) => "State is mandatory",
            Self::Mandatory(ReferralField::Postcode) => "Postcode is mandatory",
            Self::Mandatory(ReferralField::Country) => "Country is mandatory",
            Self::InvalidEmail => "Please enter a valid email",
            Self::InvalidPhone => "Please enter a valid phone number",
            Self::InvalidPostcode => "Please enter a valid postcode",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Error slots for every referral field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    slots: [Option<FieldError>; 9],
}

impl FieldErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Error currently recorded for a field.
    pub fn get(&self, field: ReferralField) -> Option<FieldError> {
        self.slots[field.index()]
    }

    /// Record the outcome of validating `field`: `Some` fills the slot,
    /// `None` clears it.
    pub fn set(&mut self, field: ReferralField, error: Option<FieldError>) {
        self.slots[field.index()] = error;
    }

    /// Clear the slot for one field.
    pub fn clear(&mut self, field: ReferralField) {
        self.slots[field.index()] = None;
    }

    /// Clear every slot.
    pub fn clear_all(&mut self) {
        self.slots = Default::default();
    }

    /// Whether no field is currently invalid.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Recorded errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ReferralField, FieldError)> + '_ {
        ReferralField::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(field, slot)| slot.map(|error| (field, error)))
    }
}
