//! Application state.
//!
//! All state lives in [`AppState`] and is only mutated from message handlers.

mod settings;

pub use settings::{DataSettings, LoggingSettings, Settings, WindowSettings};

use rfm_core::ReferralBook;
use rfm_model::{Country, Referral};

use crate::error::GuiError;

/// Root application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Referral list and the open dialog.
    pub book: ReferralBook,

    /// Country reference table for the country picker.
    pub countries: Vec<Country>,

    /// Settings read at startup.
    pub settings: Settings,

    /// Startup data problem shown above the table.
    pub load_error: Option<GuiError>,
}

impl AppState {
    /// Build state from settings, loading seed referrals and countries.
    ///
    /// Load failures are logged and kept in `load_error`; the application
    /// still starts with whatever could be loaded.
    pub fn with_settings(settings: Settings) -> Self {
        let mut load_error = None;

        let referrals = load_referrals(&settings).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            load_error = Some(e);
            Vec::new()
        });

        let countries = rfm_data::countries().unwrap_or_else(|e| {
            let e = GuiError::CountryLoad {
                reason: e.to_string(),
            };
            tracing::error!("{}", e);
            if load_error.is_none() {
                load_error = Some(e);
            }
            Vec::new()
        });

        tracing::info!(
            "Loaded {} referrals and {} countries",
            referrals.len(),
            countries.len()
        );

        Self {
            book: ReferralBook::new(referrals),
            countries,
            settings,
            load_error,
        }
    }

    /// Build state from already-loaded data.
    pub fn with_data(referrals: Vec<Referral>, countries: Vec<Country>) -> Self {
        Self {
            book: ReferralBook::new(referrals),
            countries,
            settings: Settings::default(),
            load_error: None,
        }
    }

    /// Country entry matching the open form's selection.
    pub fn selected_country(&self) -> Option<&Country> {
        let label = self.book.dialog().form()?.country()?;
        rfm_data::find_country(&self.countries, label)
    }
}

/// Load the initial referral list: the configured file, or the embedded seed.
fn load_referrals(settings: &Settings) -> Result<Vec<Referral>, GuiError> {
    let referrals = match &settings.data.seed_path {
        Some(path) => rfm_data::load_referrals_from(path)?,
        None => rfm_data::seed_referrals()?,
    };
    Ok(referrals)
}
