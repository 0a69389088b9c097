// SPDX-License-Identifier: MPL-2.0
//! Byline under the shot title: small avatar, author name, posting date.

use crate::domain::Shot;
use crate::ui::components::avatar;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::detail::component::Message;
use iced::widget::{image, Column, Row, Text};
use iced::{alignment, Element};

pub fn view<'a>(shot: &'a Shot, avatar_handle: Option<&image::Handle>) -> Element<'a, Message> {
    let posted = shot.created_at.format("%b %e, %Y").to_string();

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(avatar::view(
            &shot.author,
            avatar_handle,
            sizing::AVATAR_SM,
        ))
        .push(
            Column::new()
                .push(
                    Text::new(shot.author.name.as_str())
                        .size(typography::BODY)
                        .color(palette::GRAY_900),
                )
                .push(
                    Text::new(posted)
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                ),
        )
        .into()
}
