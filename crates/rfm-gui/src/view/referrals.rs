//! Referral list page.

use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;
use rfm_core::{DialogKind, rows};

use crate::component::referral_table;
use crate::message::{Message, TableMessage};
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_SM, ERROR, GRAY_200, GRAY_500, GRAY_900, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, WHITE, button_primary,
};

use super::dialog::{view_delete_dialog, view_form_dialog};

/// Render the referral page, with the open dialog layered on top.
pub fn view_referrals(state: &AppState) -> Element<'_, Message> {
    let page = view_page(state);

    match state.book.dialog().kind() {
        None => page,
        Some(DialogKind::Add | DialogKind::Edit) => view_form_dialog(state, page),
        Some(DialogKind::Delete) => view_delete_dialog(state, page),
    }
}

fn view_page(state: &AppState) -> Element<'_, Message> {
    let header = row![
        text("Referrals").size(24).color(GRAY_900),
        space::horizontal(),
        button(
            row![lucide::plus().size(16), text("Create New")]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
        )
        .on_press(Message::Table(TableMessage::CreateNew))
        .padding([10.0, 20.0])
        .style(button_primary),
    ]
    .align_y(Alignment::Center);

    let mut content = column![header].spacing(SPACING_LG);

    if let Some(err) = &state.load_error {
        content = content.push(view_load_error(err.title(), err.to_string()));
    }

    let table_rows = rows(state.book.list());
    let body: Element<'_, Message> = if table_rows.is_empty() {
        container(text("No referrals yet").size(14).color(GRAY_500))
            .center_x(Length::Fill)
            .padding(SPACING_XL)
            .into()
    } else {
        referral_table(
            &table_rows,
            |id| Message::Table(TableMessage::Edit(id)),
            |id| Message::Table(TableMessage::Delete(id)),
        )
    };

    content = content.push(
        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(WHITE.into()),
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    width: 1.0,
                    color: GRAY_200,
                },
                ..Default::default()
            }),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_XL)
        .into()
}

fn view_load_error<'a>(title: &'a str, detail: String) -> Element<'a, Message> {
    container(
        row![
            lucide::circle_alert().size(16).color(ERROR),
            column![
                text(title).size(14).color(ERROR),
                text(detail).size(12).color(GRAY_500),
            ]
            .spacing(2.0),
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(|_theme| container::Style {
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: ERROR,
        },
        ..Default::default()
    })
    .into()
}
