//! Theme module for Referral Manager.
//!
//! - Color constants (`colors`)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`styles`)

pub mod colors;
pub mod spacing;
pub mod styles;

pub use colors::{
    BACKDROP, ERROR, GRAY_100, GRAY_200, GRAY_300, GRAY_500, GRAY_600, GRAY_900, PRIMARY,
    PRIMARY_HOVER, PRIMARY_PRESSED, SHADOW_STRONG, WHITE,
};
pub use spacing::{
    BORDER_RADIUS_LG, BORDER_RADIUS_SM, MODAL_BODY_MAX_HEIGHT, MODAL_WIDTH_MD, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y,
};
pub use styles::{
    button_ghost, button_primary, button_secondary, text_input_default, text_input_error,
};

use iced::Theme;

/// Application theme.
pub fn referral_theme() -> Theme {
    Theme::Light
}
