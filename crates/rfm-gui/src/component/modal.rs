//! Modal dialog overlay component.
//!
//! Provides modal dialogs with backdrop, title, content, and action buttons.

use iced::widget::{
    button, center, column, container, opaque, row, scrollable, space, stack, text,
};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{
    BACKDROP, BORDER_RADIUS_LG, GRAY_200, GRAY_500, GRAY_900, MODAL_BODY_MAX_HEIGHT,
    MODAL_WIDTH_MD, SHADOW_STRONG, SPACING_LG, SPACING_MD, SPACING_SM, WHITE, button_ghost,
    button_primary, button_secondary,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The dialog is centered over the base content behind a dimmed backdrop.
/// Clicking the backdrop does nothing; the close icon sends `on_close`.
/// Content taller than [`MODAL_BODY_MAX_HEIGHT`] scrolls inside the dialog.
///
/// # Arguments
///
/// * `base` - The background content (the referral page)
/// * `title` - Dialog title text
/// * `content` - Dialog body content
/// * `on_close` - Message to send when the close icon is clicked
/// * `actions` - Footer buttons, right-aligned in the given order
///
/// # Example
///
/// ```rust,ignore
/// let view = modal(
///     page,
///     "Delete Referral",
///     text("Are you sure to delete John Doe?").into(),
///     Message::Dialog(DialogMessage::Cancel),
///     vec![delete_button, cancel_button],
/// );
/// ```
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    // Dimmed layer that swallows clicks on the page
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        });

    // Title bar
    let header = row![
        text(title).size(18).color(GRAY_900),
        space::horizontal(),
        button(lucide::x().size(20).color(GRAY_500))
            .on_press(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    // Footer
    let footer = actions
        .into_iter()
        .fold(row![space::horizontal()].spacing(SPACING_SM), |footer, action| {
            footer.push(action)
        });

    let body = scrollable(container(content).padding([SPACING_MD, 0.0]))
        .height(Length::Shrink);

    let dialog = container(
        column![
            header,
            container(body).max_height(MODAL_BODY_MAX_HEIGHT),
            footer,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(dialog_style);

    // base, then backdrop, then dialog on top
    stack![base, opaque(backdrop), center(dialog)].into()
}

fn dialog_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow {
            color: SHADOW_STRONG,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Creates a confirmation modal with a message and confirm/cancel buttons.
///
/// The confirm button is disabled when `on_confirm` is `None`.
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    confirm_label: &'a str,
    on_confirm: Option<M>,
    on_cancel: M,
) -> Element<'a, M> {
    let confirm_btn: Element<'a, M> = button(text(confirm_label))
        .on_press_maybe(on_confirm)
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    let cancel_btn: Element<'a, M> = button(text("Cancel"))
        .on_press(on_cancel.clone())
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    modal(base, title, content, on_cancel, vec![confirm_btn, cancel_btn])
}
