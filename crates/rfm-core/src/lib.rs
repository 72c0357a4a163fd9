//! Referral list state management.
//!
//! All state here is owned by a single UI context and mutated synchronously
//! from event handlers:
//!
//! - [`list`]: the ordered record sequence and its add/edit/delete operations
//! - [`form`]: one form's draft, error slots and country selection
//! - [`dialog`]: which dialog is open and which record it targets
//! - [`book`]: the list and the dialog together, as driven by the UI
//! - [`table`]: rows as displayed in the referral table

pub mod book;
pub mod dialog;
pub mod error;
pub mod form;
pub mod list;
pub mod table;

pub use book::{Commit, ReferralBook};
pub use dialog::{Dialog, DialogKind};
pub use error::{ListError, Result};
pub use form::ReferralForm;
pub use list::ReferralList;
pub use table::{ReferralRow, TABLE_HEADERS, rows};
