//! Message module for Referral Manager.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod dialog;
pub mod form;
pub mod table;

use iced::keyboard;

pub use dialog::DialogMessage;
pub use form::FormMessage;
pub use table::TableMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Referral table messages (row actions, create button)
    Table(TableMessage),

    /// Add/edit form input messages
    Form(FormMessage),

    /// Dialog confirm/cancel messages
    Dialog(DialogMessage),

    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation - used for ignored events
    Noop,
}
