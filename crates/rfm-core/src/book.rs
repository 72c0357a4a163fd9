//! The referral list together with its dialogs.
//!
//! [`ReferralBook`] is what the UI drives: row actions open dialogs, form
//! inputs route to the open dialog's form, and confirming a dialog commits the
//! change to the list and closes it.

use rfm_model::{Referral, ReferralField, ReferralId};

use crate::dialog::Dialog;
use crate::form::ReferralForm;
use crate::list::ReferralList;

/// Outcome of confirming the open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// A new referral was appended.
    Added(ReferralId),
    /// A referral was replaced in place.
    Edited(ReferralId),
    /// A referral was removed.
    Deleted(ReferralId),
    /// The targeted referral no longer exists; the dialog closed without changes.
    Missing(ReferralId),
    /// The form's submit gate is closed; the dialog stays open.
    Blocked,
    /// No identity is left for a new referral; the add dialog stays open.
    Refused,
    /// No dialog was open.
    Nothing,
}

/// Referral list plus the dialog currently shown over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralBook {
    list: ReferralList,
    dialog: Dialog,
}

impl ReferralBook {
    pub fn new(referrals: Vec<Referral>) -> Self {
        Self {
            list: ReferralList::new(referrals),
            dialog: Dialog::Closed,
        }
    }

    pub fn list(&self) -> &ReferralList {
        &self.list
    }

    pub fn referrals(&self) -> &[Referral] {
        self.list.as_slice()
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Open the add dialog with an empty form.
    pub fn open_add(&mut self) {
        self.dialog = Dialog::Adding {
            form: ReferralForm::new(),
        };
    }

    /// Open the edit dialog for a record, its form seeded from the record.
    ///
    /// Returns `false` and leaves the dialog unchanged when no record has
    /// this identity.
    pub fn open_edit(&mut self, id: ReferralId) -> bool {
        let Some(referral) = self.list.get(id) else {
            return false;
        };
        self.dialog = Dialog::Editing {
            id,
            form: ReferralForm::from_referral(referral),
        };
        true
    }

    /// Open the delete confirmation for a record.
    ///
    /// Returns `false` and leaves the dialog unchanged when no record has
    /// this identity.
    pub fn open_delete(&mut self, id: ReferralId) -> bool {
        let Some(referral) = self.list.get(id) else {
            return false;
        };
        self.dialog = Dialog::ConfirmingDelete {
            id,
            name: referral.display_name(),
        };
        true
    }

    /// Route a field change to the open form. No-op without one.
    pub fn set_field(&mut self, field: ReferralField, value: impl Into<String>) {
        if let Some(form) = self.dialog.form_mut() {
            form.set_field(field, value);
        }
    }

    /// Route a country selection to the open form. No-op without one.
    pub fn select_country(&mut self, country: Option<String>) {
        if let Some(form) = self.dialog.form_mut() {
            form.select_country(country);
        }
    }

    /// Commit the open dialog and close it.
    ///
    /// A form whose submit gate is closed is left open untouched.
    pub fn confirm(&mut self) -> Commit {
        if !self.dialog.is_open() {
            return Commit::Nothing;
        }
        if !self.dialog.can_confirm() {
            return Commit::Blocked;
        }

        let commit = match std::mem::take(&mut self.dialog) {
            Dialog::Closed => Commit::Nothing,
            Dialog::Adding { form } => {
                let country = form.country().unwrap_or_default();
                match self.list.add(form.draft(), country) {
                    Ok(id) => Commit::Added(id),
                    Err(err) => {
                        tracing::warn!("Referral not created: {}", err);
                        self.dialog = Dialog::Adding { form };
                        Commit::Refused
                    }
                }
            }
            Dialog::Editing { id, form } => {
                let country = form.country().unwrap_or_default();
                match self.list.edit(id, form.draft(), country) {
                    Ok(()) => Commit::Edited(id),
                    Err(_) => Commit::Missing(id),
                }
            }
            Dialog::ConfirmingDelete { id, .. } => match self.list.delete(id) {
                Ok(_) => Commit::Deleted(id),
                Err(_) => Commit::Missing(id),
            },
        };

        if let Commit::Missing(id) = commit {
            tracing::warn!("Referral {} disappeared before the dialog was confirmed", id);
        }
        commit
    }

    /// Close the open dialog without committing.
    pub fn cancel(&mut self) {
        self.dialog = Dialog::Closed;
    }
}

#[cfg(test)]
mod tests {
    use rfm_model::ReferralDraft;

    use super::*;

    fn book() -> ReferralBook {
        let mut draft = ReferralDraft::new();
        draft.set(ReferralField::GivenName, "Ann");
        draft.set(ReferralField::Surname, "Lee");
        ReferralBook::new(vec![draft.to_referral(ReferralId(5), "Fiji")])
    }

    #[test]
    fn opening_a_dialog_replaces_the_previous_one() {
        let mut book = book();
        book.open_add();
        assert!(book.open_delete(ReferralId(5)));
        assert_eq!(book.dialog().focus(), Some(ReferralId(5)));
        assert!(book.dialog().form().is_none());
    }

    #[test]
    fn unknown_ids_do_not_open_dialogs() {
        let mut book = book();
        assert!(!book.open_edit(ReferralId(1)));
        assert!(!book.open_delete(ReferralId(1)));
        assert!(!book.dialog().is_open());
    }

    #[test]
    fn confirm_without_dialog_does_nothing() {
        let mut book = book();
        assert_eq!(book.confirm(), Commit::Nothing);
    }

    #[test]
    fn blocked_add_keeps_the_dialog_open() {
        let mut book = book();
        book.open_add();
        book.set_field(ReferralField::GivenName, "Bo");
        assert_eq!(book.confirm(), Commit::Blocked);
        assert!(book.dialog().is_open());
        assert_eq!(book.list().len(), 1);
    }

    #[test]
    fn edit_of_a_vanished_record_closes_silently() {
        let mut book = book();
        assert!(book.open_edit(ReferralId(5)));
        // Simulate the record disappearing while the dialog is open.
        book.list.delete(ReferralId(5)).unwrap();
        assert_eq!(book.confirm(), Commit::Missing(ReferralId(5)));
        assert!(!book.dialog().is_open());
        assert!(book.list().is_empty());
    }

    #[test]
    fn field_changes_without_a_form_are_ignored() {
        let mut book = book();
        book.set_field(ReferralField::Email, "x");
        book.select_country(None);
        assert_eq!(book, self::book());
    }
}
