//! Widget style functions.
//!
//! ```rust,ignore
//! button(text("Create")).style(button_primary)
//! ```

use iced::widget::{button, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::{
    ERROR, GRAY_100, GRAY_200, GRAY_300, GRAY_500, GRAY_900, PRIMARY, PRIMARY_HOVER,
    PRIMARY_PRESSED, SHADOW_STRONG, WHITE,
};
use super::spacing::BORDER_RADIUS_SM;

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn rounded(width: f32, color: Color) -> Border {
    Border {
        radius: BORDER_RADIUS_SM.into(),
        width,
        color,
    }
}

/// Primary button style - main actions (Create, Confirm, Delete).
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color, shadow) = match status {
        button::Status::Active => (
            PRIMARY,
            WHITE,
            Shadow {
                color: SHADOW_STRONG,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
        ),
        button::Status::Hovered => (
            PRIMARY_HOVER,
            WHITE,
            Shadow {
                color: SHADOW_STRONG,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
        ),
        button::Status::Pressed => (PRIMARY_PRESSED, WHITE, Shadow::default()),
        button::Status::Disabled => (GRAY_200, GRAY_500, Shadow::default()),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: rounded(0.0, Color::TRANSPARENT),
        shadow,
        ..Default::default()
    }
}

/// Secondary button style - outlined alternative actions (Cancel).
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, text_color) = match status {
        button::Status::Active => (WHITE, PRIMARY, PRIMARY),
        button::Status::Hovered => (GRAY_100, PRIMARY_HOVER, PRIMARY_HOVER),
        button::Status::Pressed => (GRAY_200, PRIMARY_PRESSED, PRIMARY_PRESSED),
        button::Status::Disabled => (GRAY_100, GRAY_300, GRAY_500),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: rounded(1.0, border_color),
        ..Default::default()
    }
}

/// Ghost button style - icon buttons without chrome.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(GRAY_100.into()),
        button::Status::Pressed => Some(GRAY_200.into()),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: GRAY_500,
        border: rounded(0.0, Color::TRANSPARENT),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

fn text_input_with_border(status: text_input::Status, idle_border: Color) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => rounded(2.0, PRIMARY),
        text_input::Status::Hovered => rounded(1.0, GRAY_500),
        text_input::Status::Active | text_input::Status::Disabled => rounded(1.0, idle_border),
    };

    text_input::Style {
        background: WHITE.into(),
        border,
        icon: GRAY_500,
        placeholder: GRAY_300,
        value: GRAY_900,
        selection: GRAY_200,
    }
}

/// Default text input style.
pub fn text_input_default(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    text_input_with_border(status, GRAY_300)
}

/// Text input style for a field with a validation error.
pub fn text_input_error(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    match status {
        text_input::Status::Focused { .. } => text_input_with_border(status, ERROR),
        _ => text_input_with_border(text_input::Status::Active, ERROR),
    }
}
