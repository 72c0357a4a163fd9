//! Dialog messages.

/// Buttons shared by the add, edit and delete dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMessage {
    /// Create / Confirm / Delete pressed
    Confirm,
    /// Cancel or close pressed
    Cancel,
}
