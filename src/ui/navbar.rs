// SPDX-License-Identifier: MPL-2.0
//! Thin top bar above the feed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, tooltip, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    RefreshPressed,
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("window-title"))
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_500)
        .width(Length::Fill);

    let refresh = tooltip::Tooltip::new(
        button(icons::sized(icons::refresh(), sizing::ICON_SM))
            .padding(spacing::XXS)
            .style(styles::button::bare)
            .on_press(Message::RefreshPressed),
        Text::new(i18n.tr("feed-refresh")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .padding(spacing::XXS);

    Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(title)
            .push(refresh),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .into()
}
