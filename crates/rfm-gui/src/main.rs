//! Referral Manager - Desktop GUI Application
//!
//! A desktop application for creating, editing and deleting referral contact
//! records held in memory.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;
use rfm_gui::app::App;
use rfm_gui::state::Settings;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Loads settings, initializes logging and starts the Iced application.
pub fn main() -> iced::Result {
    let settings = Settings::load();

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Referral Manager");

    let window_size = Size::new(settings.window.width, settings.window.height);

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: window_size,
            min_size: Some(Size::new(800.0, 480.0)),
            ..Default::default()
        })
        .run()
}
