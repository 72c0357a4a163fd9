//! Add/edit form message handler.

use iced::Task;

use crate::message::{FormMessage, Message};
use crate::state::AppState;

use super::MessageHandler;

/// Routes form input to the open dialog's form.
pub struct FormHandler;

impl MessageHandler<FormMessage> for FormHandler {
    fn handle(&self, state: &mut AppState, msg: FormMessage) -> Task<Message> {
        match msg {
            FormMessage::FieldChanged(field, value) => {
                state.book.set_field(field, value);
            }
            FormMessage::CountrySelected(country) => {
                tracing::debug!("Country selected: {}", country.label);
                state.book.select_country(Some(country.label));
            }
            FormMessage::CountryCleared => {
                state.book.select_country(None);
            }
        }
        Task::none()
    }
}
