//! Dialog message handler.

use iced::Task;
use rfm_core::Commit;

use crate::message::{DialogMessage, Message};
use crate::state::AppState;

use super::MessageHandler;

/// Commits or dismisses the open dialog.
pub struct DialogHandler;

impl MessageHandler<DialogMessage> for DialogHandler {
    fn handle(&self, state: &mut AppState, msg: DialogMessage) -> Task<Message> {
        match msg {
            DialogMessage::Confirm => match state.book.confirm() {
                Commit::Added(id) => tracing::info!("Created referral {}", id),
                Commit::Edited(id) => tracing::info!("Updated referral {}", id),
                Commit::Deleted(id) => tracing::info!("Deleted referral {}", id),
                // The book already logged these; the dialog closes or stays as it left it.
                Commit::Missing(_) | Commit::Refused => {}
                Commit::Blocked => tracing::debug!("Confirm ignored: form has errors"),
                Commit::Nothing => {}
            },
            DialogMessage::Cancel => {
                if state.book.dialog().is_open() {
                    state.book.cancel();
                    tracing::debug!("Dialog cancelled");
                }
            }
        }
        Task::none()
    }
}
