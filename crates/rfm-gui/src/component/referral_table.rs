//! Referral table component.
//!
//! Header row, one row per referral, and edit/delete icon buttons in the
//! actions column.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use rfm_core::{ReferralRow, TABLE_HEADERS};
use rfm_model::ReferralId;

use crate::theme::{
    GRAY_100, GRAY_500, GRAY_600, GRAY_900, SPACING_XS, TABLE_CELL_PADDING_X,
    TABLE_CELL_PADDING_Y, WHITE, button_ghost,
};

/// Width portions of the six columns, left to right.
const COLUMN_PORTIONS: [u16; 6] = [2, 2, 3, 2, 5, 1];

/// Creates the referral table.
///
/// # Arguments
///
/// * `rows` - Rows to display, in list order
/// * `on_edit` - Message factory for a row's edit button
/// * `on_delete` - Message factory for a row's delete button
pub fn referral_table<'a, M: Clone + 'a>(
    rows: &[ReferralRow],
    on_edit: impl Fn(ReferralId) -> M,
    on_delete: impl Fn(ReferralId) -> M,
) -> Element<'a, M> {
    let header = {
        let mut header = row![].spacing(0);
        for (title, portion) in TABLE_HEADERS.into_iter().zip(COLUMN_PORTIONS) {
            header = header.push(
                container(text(title).size(12).color(GRAY_600))
                    .width(Length::FillPortion(portion))
                    .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
            );
        }
        container(header).style(|_theme| container::Style {
            background: Some(GRAY_100.into()),
            ..Default::default()
        })
    };

    let mut body = column![].spacing(0);
    for (row_idx, referral) in rows.iter().enumerate() {
        let is_even = row_idx % 2 == 0;
        let mut data_row = row![].spacing(0).align_y(Alignment::Center);

        for (cell, portion) in referral.cells().into_iter().zip(COLUMN_PORTIONS) {
            data_row = data_row.push(
                container(text(cell.to_string()).size(13).color(GRAY_900))
                    .width(Length::FillPortion(portion))
                    .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
            );
        }

        let actions = row![
            button(lucide::pencil().size(16).color(GRAY_500))
                .on_press(on_edit(referral.id))
                .padding([4.0, 6.0])
                .style(button_ghost),
            button(lucide::trash().size(16).color(GRAY_500))
                .on_press(on_delete(referral.id))
                .padding([4.0, 6.0])
                .style(button_ghost),
        ]
        .spacing(SPACING_XS);
        data_row = data_row.push(
            container(actions)
                .width(Length::FillPortion(COLUMN_PORTIONS[5]))
                .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
        );

        body = body.push(container(data_row).style(move |_theme| container::Style {
            background: Some(if is_even { WHITE } else { GRAY_100 }.into()),
            ..Default::default()
        }));
    }

    column![header, scrollable(body).height(Length::Fill)]
        .width(Length::Fill)
        .into()
}
