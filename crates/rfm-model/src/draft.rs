//! In-progress form values.

use serde::{Deserialize, Serialize};

use crate::field::ReferralField;
use crate::referral::{Referral, ReferralId};

/// Uncommitted field values for the add or edit form.
///
/// Holds one string slot per [`ReferralField`]. A draft is independent of the
/// committed list until it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralDraft {
    values: [String; 9],
}

impl ReferralDraft {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a draft from an existing record's attributes.
    pub fn from_referral(referral: &Referral) -> Self {
        let mut draft = Self::new();
        draft.set(ReferralField::GivenName, referral.given_name.clone());
        draft.set(ReferralField::Surname, referral.surname.clone());
        draft.set(ReferralField::Email, referral.email.clone());
        draft.set(ReferralField::Phone, referral.phone.clone());
        draft.set(ReferralField::AddressLine, referral.address_line.clone());
        draft.set(ReferralField::Suburb, referral.suburb.clone());
        draft.set(ReferralField::State, referral.state.clone());
        draft.set(ReferralField::Postcode, referral.postcode.clone());
        draft.set(ReferralField::Country, referral.country.clone());
        draft
    }

    /// Current value of a field.
    pub fn get(&self, field: ReferralField) -> &str {
        &self.values[field.index()]
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: ReferralField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Text-input fields that are still empty.
    pub fn missing_text_inputs(&self) -> Vec<ReferralField> {
        ReferralField::TEXT_INPUTS
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Build a record with the given identity and country.
    ///
    /// The country comes from the form's country selection, which is tracked
    /// apart from the text inputs.
    pub fn to_referral(&self, id: ReferralId, country: impl Into<String>) -> Referral {
        Referral {
            id,
            given_name: self.get(ReferralField::GivenName).to_string(),
            surname: self.get(ReferralField::Surname).to_string(),
            phone: self.get(ReferralField::Phone).to_string(),
            email: self.get(ReferralField::Email).to_string(),
            address_line: self.get(ReferralField::AddressLine).to_string(),
            suburb: self.get(ReferralField::Suburb).to_string(),
            state: self.get(ReferralField::State).to_string(),
            postcode: self.get(ReferralField::Postcode).to_string(),
            country: country.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn referral() -> Referral {
        Referral {
            id: ReferralId(2),
            given_name: "Another".to_string(),
            surname: "Referral".to_string(),
            phone: "0456 345345".to_string(),
            email: "referral@gmail.com".to_string(),
            address_line: "18 Gadigal Avenue".to_string(),
            suburb: "Waterloo".to_string(),
            state: "New South Wales".to_string(),
            postcode: "2017".to_string(),
            country: "Australia".to_string(),
        }
    }

    #[test]
    fn from_referral_copies_every_field() {
        let original = referral();
        let draft = ReferralDraft::from_referral(&original);
        assert_eq!(draft.get(ReferralField::Surname), "Referral");
        assert_eq!(draft.get(ReferralField::Country), "Australia");
        assert!(draft.missing_text_inputs().is_empty());

        let rebuilt = draft.to_referral(original.id, "Australia");
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn new_draft_misses_all_text_inputs() {
        let draft = ReferralDraft::new();
        assert_eq!(draft.missing_text_inputs(), ReferralField::TEXT_INPUTS.to_vec());
    }

    #[test]
    fn to_referral_takes_country_from_selection() {
        let mut draft = ReferralDraft::from_referral(&referral());
        draft.set(ReferralField::Country, "");
        let built = draft.to_referral(ReferralId(9), "New Zealand");
        assert_eq!(built.id, ReferralId(9));
        assert_eq!(built.country, "New Zealand");
    }
}
