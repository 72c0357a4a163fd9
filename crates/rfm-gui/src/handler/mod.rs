//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and owns
//! the state changes for that feature. `App::update()` only dispatches:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Table(msg) => TableHandler.handle(&mut self.state, msg),
//!         Message::Form(msg) => FormHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod dialog;
mod form;
mod table;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use dialog::DialogHandler;
pub use form::FormHandler;
pub use table::TableHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// # Returns
    ///
    /// A `Task<Message>` for any follow-up work, or `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
