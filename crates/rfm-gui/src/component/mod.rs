//! Reusable view components.

pub mod form_field;
pub mod modal;
pub mod referral_table;

pub use form_field::{country_field, form_field};
pub use modal::{confirm_modal, modal};
pub use referral_table::referral_table;
