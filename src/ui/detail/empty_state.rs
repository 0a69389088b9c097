// SPDX-License-Identifier: MPL-2.0
//! Placeholder and error states for the detail overlay.

use super::component::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// "No shot data available": the primary fetch resolved to nothing.
pub fn not_found(i18n: &I18n) -> Element<'_, Message> {
    centered(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("detail-not-found"))
                    .size(typography::TITLE_SM)
                    .color(palette::GRAY_400),
            ),
    )
}

/// The primary fetch failed; shows the error and offers a retry.
pub fn error<'a>(i18n: &'a I18n, err: &'a Error) -> Element<'a, Message> {
    let retry = button(Text::new(i18n.tr("retry")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::RetryPressed);

    centered(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("detail-error"))
                    .size(typography::TITLE_SM)
                    .color(palette::ERROR_500),
            )
            .push(
                Text::new(err.to_string())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(retry),
    )
}

fn centered<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
