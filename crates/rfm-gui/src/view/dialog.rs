//! Add/edit and delete dialogs.
//!
//! Both render over the referral page through [`confirm_modal`].

use iced::widget::{column, row, text};
use iced::{Element, Length};
use rfm_core::ReferralForm;
use rfm_model::ReferralField;

use crate::component::{confirm_modal, country_field, form_field};
use crate::message::{DialogMessage, FormMessage, Message};
use crate::state::AppState;
use crate::theme::{GRAY_900, SPACING_MD};

/// Text inputs laid out two per row.
const FORM_ROWS: [[ReferralField; 2]; 4] = [
    [ReferralField::GivenName, ReferralField::Surname],
    [ReferralField::Email, ReferralField::Phone],
    [ReferralField::AddressLine, ReferralField::Suburb],
    [ReferralField::State, ReferralField::Postcode],
];

/// Render the add or edit form dialog over `base`.
pub fn view_form_dialog<'a>(
    state: &'a AppState,
    base: Element<'a, Message>,
) -> Element<'a, Message> {
    let dialog = state.book.dialog();
    let (Some(kind), Some(form)) = (dialog.kind(), dialog.form()) else {
        return base;
    };

    let on_confirm = dialog
        .can_confirm()
        .then_some(Message::Dialog(DialogMessage::Confirm));

    confirm_modal(
        base,
        kind.title(),
        view_form(state, form),
        kind.confirm_label(),
        on_confirm,
        Message::Dialog(DialogMessage::Cancel),
    )
}

/// Render the delete confirmation dialog over `base`.
pub fn view_delete_dialog<'a>(
    state: &'a AppState,
    base: Element<'a, Message>,
) -> Element<'a, Message> {
    let dialog = state.book.dialog();
    let (Some(kind), Some(prompt)) = (dialog.kind(), dialog.prompt()) else {
        return base;
    };

    confirm_modal(
        base,
        kind.title(),
        text(prompt).size(14).color(GRAY_900).into(),
        kind.confirm_label(),
        Some(Message::Dialog(DialogMessage::Confirm)),
        Message::Dialog(DialogMessage::Cancel),
    )
}

fn view_form<'a>(state: &'a AppState, form: &'a ReferralForm) -> Element<'a, Message> {
    let mut content = column![].spacing(SPACING_MD).width(Length::Fill);

    for pair in FORM_ROWS {
        let mut fields = row![].spacing(SPACING_MD);
        for field in pair {
            fields = fields.push(text_field(form, field));
        }
        content = content.push(fields);
    }

    content = content.push(country_field(
        ReferralField::Country.label(),
        &state.countries,
        state.selected_country(),
        ReferralField::Country.placeholder(),
        |country| Message::Form(FormMessage::CountrySelected(country)),
        Message::Form(FormMessage::CountryCleared),
        form.error(ReferralField::Country).map(|e| e.message()),
    ));

    content.into()
}

fn text_field(form: &ReferralForm, field: ReferralField) -> Element<'_, Message> {
    form_field(
        field.label(),
        form.value(field),
        field.placeholder(),
        move |value| Message::Form(FormMessage::FieldChanged(field, value)),
        form.error(field).map(|e| e.message()),
    )
}
