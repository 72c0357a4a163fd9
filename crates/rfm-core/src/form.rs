//! Form draft and error state.
//!
//! The add and edit dialogs each own one [`ReferralForm`]. Every field change
//! re-validates that field only; fields the user has not touched carry no
//! error until they change. The country is the exception: it is validated as
//! soon as the selection changes.

use rfm_model::{FieldError, FieldErrors, Referral, ReferralDraft, ReferralField};
use rfm_validate::validate_field;

/// Draft values, per-field errors and the selected country of one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralForm {
    draft: ReferralDraft,
    errors: FieldErrors,
    country: Option<String>,
}

impl ReferralForm {
    /// An empty form with no errors and no country selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form seeded from an existing record, errors cleared.
    pub fn from_referral(referral: &Referral) -> Self {
        let mut form = Self::new();
        form.load(referral);
        form
    }

    pub fn draft(&self) -> &ReferralDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current value of a field.
    pub fn value(&self, field: ReferralField) -> &str {
        self.draft.get(field)
    }

    /// Error currently shown beneath a field.
    pub fn error(&self, field: ReferralField) -> Option<FieldError> {
        self.errors.get(field)
    }

    /// Label of the selected country.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Store a new field value and re-validate that field.
    ///
    /// Selecting `Country` through here behaves like [`Self::select_country`].
    pub fn set_field(&mut self, field: ReferralField, value: impl Into<String>) {
        let value = value.into();
        if field == ReferralField::Country {
            self.select_country(Some(value).filter(|label| !label.is_empty()));
            return;
        }
        self.errors.set(field, validate_field(field, &value));
        self.draft.set(field, value);
    }

    /// Change the country selection and validate it immediately.
    pub fn select_country(&mut self, country: Option<String>) {
        let label = country.as_deref().unwrap_or_default();
        self.errors
            .set(ReferralField::Country, validate_field(ReferralField::Country, label));
        self.draft.set(ReferralField::Country, label);
        self.country = country;
    }

    /// Clear draft, errors and country selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Seed draft and country selection from a record; errors are cleared.
    pub fn load(&mut self, referral: &Referral) {
        self.draft = ReferralDraft::from_referral(referral);
        self.errors.clear_all();
        // Seeded so that confirming an untouched edit keeps the record's country.
        self.country = Some(referral.country.clone()).filter(|label| !label.is_empty());
    }

    /// Whether the add form may be submitted.
    ///
    /// Requires no recorded errors, every text input filled and a country
    /// selected.
    pub fn can_create(&self) -> bool {
        self.errors.is_empty()
            && self.draft.missing_text_inputs().is_empty()
            && self.country.is_some()
    }

    /// Whether the edit form may be submitted.
    ///
    /// Only recorded errors block an edit; untouched empty fields do not.
    pub fn can_save(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReferralForm {
        let mut form = ReferralForm::new();
        form.set_field(ReferralField::GivenName, "Jane");
        form.set_field(ReferralField::Surname, "Roe");
        form.set_field(ReferralField::Email, "jane@example.com");
        form.set_field(ReferralField::Phone, "040 000 0000");
        form.set_field(ReferralField::AddressLine, "1 George St");
        form.set_field(ReferralField::Suburb, "Sydney");
        form.set_field(ReferralField::State, "NSW");
        form.set_field(ReferralField::Postcode, "2000");
        form
    }

    #[test]
    fn untouched_fields_have_no_errors() {
        let mut form = ReferralForm::new();
        form.set_field(ReferralField::Email, "bad");
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(ReferralField::GivenName), None);
    }

    #[test]
    fn correcting_a_field_clears_its_error() {
        let mut form = ReferralForm::new();
        form.set_field(ReferralField::Postcode, "20");
        assert_eq!(
            form.error(ReferralField::Postcode),
            Some(FieldError::InvalidPostcode)
        );
        form.set_field(ReferralField::Postcode, "2017");
        assert_eq!(form.error(ReferralField::Postcode), None);
    }

    #[test]
    fn create_needs_country_selection() {
        let mut form = filled();
        assert!(!form.can_create());
        form.select_country(Some("Australia".to_string()));
        assert!(form.can_create());
    }

    #[test]
    fn clearing_country_records_an_error() {
        let mut form = filled();
        form.select_country(Some("Australia".to_string()));
        form.select_country(None);
        assert_eq!(
            form.error(ReferralField::Country).map(|e| e.message()),
            Some("Country is mandatory")
        );
        assert!(!form.can_create());
        assert!(!form.can_save());
    }

    #[test]
    fn create_needs_every_text_input() {
        let mut form = filled();
        form.select_country(Some("Australia".to_string()));
        let mut missing_state = form.clone();
        missing_state.draft.set(ReferralField::State, "");
        assert!(missing_state.errors().is_empty());
        assert!(!missing_state.can_create());
    }

    #[test]
    fn save_only_looks_at_errors() {
        let form = ReferralForm::new();
        assert!(form.can_save());
        assert!(!form.can_create());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.set_field(ReferralField::Email, "nope");
        form.select_country(Some("Fiji".to_string()));
        form.reset();
        assert_eq!(form, ReferralForm::new());
    }
}
