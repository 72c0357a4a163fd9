//! Referral data model types.
//!
//! This crate provides the type-safe representation of everything the
//! referral manager edits or displays:
//!
//! - [`referral`]: committed records and their identity
//! - [`field`]: the nine editable record attributes
//! - [`draft`]: in-progress form values for the add and edit forms
//! - [`errors`]: per-field validation failures
//! - [`country`]: the read-only country reference table entries

pub mod country;
pub mod draft;
pub mod errors;
pub mod field;
pub mod referral;

pub use country::Country;
pub use draft::ReferralDraft;
pub use errors::{FieldError, FieldErrors};
pub use field::ReferralField;
pub use referral::{Referral, ReferralId};
