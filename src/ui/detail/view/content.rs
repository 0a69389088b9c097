// SPDX-License-Identifier: MPL-2.0
//! Main body of the detail view: artwork placeholder and description text.

use crate::domain::Shot;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::detail::component::Message;
use crate::ui::styles;
use iced::widget::{Column, Container, Space, Text};
use iced::{Element, Length};

pub fn view(shot: &Shot) -> Element<'_, Message> {
    // The backend serves artwork through its own CDN views; the desktop
    // client renders a neutral surface in its place.
    let artwork = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SKELETON_BLOCK_HEIGHT))
        .style(styles::container::tile_surface);

    let mut column = Column::new().spacing(spacing::LG).push(artwork);

    if !shot.body.is_empty() {
        column = column.push(
            Text::new(shot.body.as_str())
                .size(typography::BODY_LG)
                .color(palette::GRAY_700),
        );
    }

    column.into()
}
