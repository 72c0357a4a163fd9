//! Form field components.
//!
//! Input fields with labels, validation, and error display.

use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{
    ERROR, GRAY_500, GRAY_600, SPACING_XS, button_ghost, text_input_default, text_input_error,
};

// =============================================================================
// FORM FIELD
// =============================================================================

/// Creates a form field with label and optional error message.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `value` - Current field value
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for value changes
/// * `error` - Optional error message shown beneath the input
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<&'a str>,
) -> Element<'a, M> {
    let label_text = text(format!("{label} *")).size(13).color(GRAY_600);

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10.0)
        .width(Length::Fill)
        .style(if error.is_some() {
            text_input_error
        } else {
            text_input_default
        });

    let mut content = column![label_text, input].spacing(SPACING_XS);

    if let Some(err) = error {
        content = content.push(text(err).size(12).color(ERROR));
    }

    container(content).width(Length::Fill).into()
}

// =============================================================================
// COUNTRY FIELD
// =============================================================================

/// Creates a country picker with a clear button and optional error message.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `options` - Selectable entries
/// * `selected` - Current selection
/// * `placeholder` - Text shown while nothing is selected
/// * `on_select` - Message factory for a new selection
/// * `on_clear` - Message for clearing the selection
/// * `error` - Optional error message shown beneath the picker
pub fn country_field<'a, T, M>(
    label: &'a str,
    options: &'a [T],
    selected: Option<&'a T>,
    placeholder: &'a str,
    on_select: impl Fn(T) -> M + 'a,
    on_clear: M,
    error: Option<&'a str>,
) -> Element<'a, M>
where
    T: ToString + PartialEq + Clone + 'a,
    M: Clone + 'a,
{
    let label_text = text(format!("{label} *")).size(13).color(GRAY_600);

    let picker = pick_list(options, selected, on_select)
        .placeholder(placeholder)
        .padding(10.0)
        .width(Length::Fill);

    let clear = button(lucide::x().size(14).color(GRAY_500))
        .on_press_maybe(selected.map(|_| on_clear))
        .padding([6.0, 8.0])
        .style(button_ghost);

    let mut content = column![
        label_text,
        row![picker, clear].spacing(SPACING_XS).align_y(Alignment::Center),
    ]
    .spacing(SPACING_XS);

    if let Some(err) = error {
        content = content.push(text(err).size(12).color(ERROR));
    }

    container(content).width(Length::Fill).into()
}
