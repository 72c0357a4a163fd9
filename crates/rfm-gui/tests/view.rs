//! The page builds in every dialog state.

use rfm_gui::app::App;
use rfm_gui::message::{Message, TableMessage};
use rfm_gui::state::AppState;
use rfm_model::ReferralId;

fn app() -> App {
    let referrals = rfm_data::seed_referrals().expect("seed parses");
    let countries = rfm_data::countries().expect("countries parse");
    App::with_state(AppState::with_data(referrals, countries))
}

#[test]
fn view_builds_for_each_dialog() {
    let messages = [
        None,
        Some(Message::Table(TableMessage::CreateNew)),
        Some(Message::Table(TableMessage::Edit(ReferralId(1)))),
        Some(Message::Table(TableMessage::Delete(ReferralId(2)))),
    ];

    for message in messages {
        let mut app = app();
        if let Some(message) = message {
            let _ = app.update(message);
        }
        let _ = app.view();
    }
}

#[test]
fn view_builds_with_empty_list() {
    let app = App::with_state(AppState::with_data(Vec::new(), Vec::new()));
    let _ = app.view();
    assert_eq!(app.title(), "Referral Manager");
}
