//! Referral table message handler.

use iced::Task;

use crate::message::{Message, TableMessage};
use crate::state::AppState;

use super::MessageHandler;

/// Opens the add, edit and delete dialogs from the table.
pub struct TableHandler;

impl MessageHandler<TableMessage> for TableHandler {
    fn handle(&self, state: &mut AppState, msg: TableMessage) -> Task<Message> {
        match msg {
            TableMessage::CreateNew => {
                state.book.open_add();
                tracing::info!("Opened add dialog");
            }
            TableMessage::Edit(id) => {
                if state.book.open_edit(id) {
                    tracing::info!("Editing referral {}", id);
                } else {
                    tracing::warn!("Edit requested for unknown referral {}", id);
                }
            }
            TableMessage::Delete(id) => {
                if state.book.open_delete(id) {
                    tracing::info!("Confirming deletion of referral {}", id);
                } else {
                    tracing::warn!("Delete requested for unknown referral {}", id);
                }
            }
        }
        Task::none()
    }
}
