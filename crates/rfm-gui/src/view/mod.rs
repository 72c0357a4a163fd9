//! View module for Referral Manager.
//!
//! Views are pure functions that render UI based on application state.
//!
//! - `referrals.rs` - Main page (title, create button, referral table)
//! - `dialog.rs` - Add/edit form and delete confirmation dialogs

pub mod dialog;
pub mod referrals;

pub use dialog::{view_delete_dialog, view_form_dialog};
pub use referrals::view_referrals;
