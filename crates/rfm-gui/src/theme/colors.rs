//! Color constants.

use iced::Color;

pub const WHITE: Color = Color::WHITE;

pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.97);
pub const GRAY_200: Color = Color::from_rgb(0.90, 0.91, 0.92);
pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.50);
pub const GRAY_600: Color = Color::from_rgb(0.29, 0.33, 0.39);
pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);

/// Primary action color (buttons, focused inputs).
pub const PRIMARY: Color = Color::from_rgb(0.25, 0.32, 0.71);
pub const PRIMARY_HOVER: Color = Color::from_rgb(0.19, 0.25, 0.62);
pub const PRIMARY_PRESSED: Color = Color::from_rgb(0.16, 0.21, 0.58);

/// Inline validation messages and invalid input borders.
pub const ERROR: Color = Color::from_rgb(0.86, 0.15, 0.15);

/// Modal backdrop.
pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);

pub const SHADOW_STRONG: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);
