//! Field validation for referral forms.
//!
//! Every rule is a pure predicate over a single field value. The add and edit
//! forms share the same rules; they differ only in how the results gate
//! submission, which is decided by the caller.
//!
//! # Example
//!
//! ```
//! use rfm_model::{FieldError, ReferralField};
//! use rfm_validate::validate_field;
//!
//! assert_eq!(
//!     validate_field(ReferralField::Email, "not-an-email"),
//!     Some(FieldError::InvalidEmail)
//! );
//! assert_eq!(validate_field(ReferralField::Postcode, "2017"), None);
//! ```

mod patterns;

use rfm_model::{FieldError, FieldErrors, ReferralDraft, ReferralField};

pub use patterns::{is_valid_email, is_valid_phone, is_valid_postcode};

/// Validate one field value.
///
/// Returns `None` when the value is acceptable, otherwise the error whose
/// message is shown beneath the field.
pub fn validate_field(field: ReferralField, value: &str) -> Option<FieldError> {
    match field {
        ReferralField::GivenName
        | ReferralField::Surname
        | ReferralField::AddressLine
        | ReferralField::Suburb
        | ReferralField::State
        | ReferralField::Country => {
            is_blank(value).then_some(FieldError::Mandatory(field))
        }
        ReferralField::Email => (!is_valid_email(value)).then_some(FieldError::InvalidEmail),
        ReferralField::Phone => (!is_valid_phone(value)).then_some(FieldError::InvalidPhone),
        ReferralField::Postcode => {
            (!is_valid_postcode(value)).then_some(FieldError::InvalidPostcode)
        }
    }
}

/// Validate every field of a draft at once.
///
/// The interactive forms validate one field per change instead; this is for
/// checking complete records such as seed data.
pub fn validate_draft(draft: &ReferralDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in ReferralField::ALL {
        errors.set(field, validate_field(field, draft.get(field)));
    }
    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
