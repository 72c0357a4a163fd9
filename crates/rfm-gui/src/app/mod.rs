//! Main application module for Referral Manager.
//!
//! Implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **Handlers own the changes** - `update()` only dispatches

use iced::keyboard;
use iced::{Element, Subscription, Task, Theme};

use crate::handler::{DialogHandler, FormHandler, MessageHandler, TableHandler};
use crate::message::{DialogMessage, Message};
use crate::state::{AppState, Settings};
use crate::theme::referral_theme;
use crate::view::view_referrals;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// Holds the application state and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance from loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::with_settings(settings),
        }
    }

    /// Create an application around existing state.
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Table(msg) => TableHandler.handle(&mut self.state, msg),
            Message::Form(msg) => FormHandler.handle(&mut self.state, msg),
            Message::Dialog(msg) => DialogHandler.handle(&mut self.state, msg),
            Message::KeyPressed(key, modifiers) => self.handle_key_press(&key, modifiers),
            Message::Noop => Task::none(),
        }
    }

    /// Render the main window.
    pub fn view(&self) -> Element<'_, Message> {
        view_referrals(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        "Referral Manager".to_string()
    }

    pub fn theme(&self) -> Theme {
        referral_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }

    /// Escape dismisses the open dialog, Enter confirms it.
    fn handle_key_press(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if !self.state.book.dialog().is_open() {
            return Task::none();
        }

        match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                DialogHandler.handle(&mut self.state, DialogMessage::Cancel)
            }
            keyboard::Key::Named(keyboard::key::Named::Enter) if modifiers.is_empty() => {
                DialogHandler.handle(&mut self.state, DialogMessage::Confirm)
            }
            _ => Task::none(),
        }
    }
}
