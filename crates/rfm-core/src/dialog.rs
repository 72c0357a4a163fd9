//! Dialog and focus state.
//!
//! At most one dialog is open at a time, and the open dialog carries the
//! record it targets and its own form. Opening a dialog replaces whatever was
//! open before.

use rfm_model::ReferralId;

use crate::form::ReferralForm;

/// The dialog currently presented over the referral table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    /// No dialog open.
    #[default]
    Closed,
    /// Creating a new referral.
    Adding { form: ReferralForm },
    /// Editing the referral with this identity.
    Editing { id: ReferralId, form: ReferralForm },
    /// Asking whether to delete the referral with this identity.
    ConfirmingDelete {
        id: ReferralId,
        /// Display name of the focused record, captured when the dialog opened.
        name: String,
    },
}

/// Dialog variant without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Add,
    Edit,
    Delete,
}

impl DialogKind {
    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Add => "Add a Referral",
            Self::Edit => "Edit Referral",
            Self::Delete => "Delete Referral",
        }
    }

    /// Label of the committing button.
    pub fn confirm_label(&self) -> &'static str {
        match self {
            Self::Add => "Create",
            Self::Edit => "Confirm",
            Self::Delete => "Delete",
        }
    }
}

impl Dialog {
    /// Which dialog is open, if any.
    pub fn kind(&self) -> Option<DialogKind> {
        match self {
            Self::Closed => None,
            Self::Adding { .. } => Some(DialogKind::Add),
            Self::Editing { .. } => Some(DialogKind::Edit),
            Self::ConfirmingDelete { .. } => Some(DialogKind::Delete),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The record targeted by an edit or delete dialog.
    pub fn focus(&self) -> Option<ReferralId> {
        match self {
            Self::Editing { id, .. } | Self::ConfirmingDelete { id, .. } => Some(*id),
            Self::Closed | Self::Adding { .. } => None,
        }
    }

    /// Form of the open add or edit dialog.
    pub fn form(&self) -> Option<&ReferralForm> {
        match self {
            Self::Adding { form } | Self::Editing { form, .. } => Some(form),
            Self::Closed | Self::ConfirmingDelete { .. } => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut ReferralForm> {
        match self {
            Self::Adding { form } | Self::Editing { form, .. } => Some(form),
            Self::Closed | Self::ConfirmingDelete { .. } => None,
        }
    }

    /// Whether the committing button is enabled.
    ///
    /// Add and edit use different gates; deletion is always allowed.
    pub fn can_confirm(&self) -> bool {
        match self {
            Self::Closed => false,
            Self::Adding { form } => form.can_create(),
            Self::Editing { form, .. } => form.can_save(),
            Self::ConfirmingDelete { .. } => true,
        }
    }

    /// Delete confirmation prompt.
    pub fn prompt(&self) -> Option<String> {
        match self {
            Self::ConfirmingDelete { name, .. } => Some(format!("Are you sure to delete {name}?")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_dialog_has_no_focus_or_form() {
        let dialog = Dialog::default();
        assert!(!dialog.is_open());
        assert_eq!(dialog.kind(), None);
        assert_eq!(dialog.focus(), None);
        assert!(dialog.form().is_none());
        assert!(!dialog.can_confirm());
    }

    #[test]
    fn delete_prompt_names_the_record() {
        let dialog = Dialog::ConfirmingDelete {
            id: ReferralId(1),
            name: "John Doe".to_string(),
        };
        assert_eq!(dialog.kind(), Some(DialogKind::Delete));
        assert_eq!(dialog.focus(), Some(ReferralId(1)));
        assert_eq!(dialog.prompt().as_deref(), Some("Are you sure to delete John Doe?"));
        assert!(dialog.can_confirm());
    }

    #[test]
    fn titles_and_buttons() {
        assert_eq!(DialogKind::Add.title(), "Add a Referral");
        assert_eq!(DialogKind::Add.confirm_label(), "Create");
        assert_eq!(DialogKind::Edit.confirm_label(), "Confirm");
        assert_eq!(DialogKind::Delete.title(), "Delete Referral");
    }
}
