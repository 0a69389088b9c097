// SPDX-License-Identifier: MPL-2.0
//! Tile for one shot, used by the feed grid and the "more by author" grid.

use crate::domain::Shot;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders a pressable tile for `shot`, emitting `on_press` when clicked.
pub fn view<'a, Message: Clone + 'a>(shot: &'a Shot, on_press: Message) -> Element<'a, Message> {
    let artwork = Container::new(
        Text::new(shot.title.as_str())
            .size(typography::BODY_LG)
            .color(palette::GRAY_700),
    )
    .width(Length::Fixed(sizing::SHOT_TILE_WIDTH))
    .height(Length::Fixed(sizing::SHOT_TILE_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::tile_surface);

    let byline = Text::new(shot.author.name.as_str())
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(artwork)
        .push(byline);

    button(content)
        .padding(0)
        .style(styles::button::tile)
        .on_press(on_press)
        .into()
}
