// SPDX-License-Identifier: MPL-2.0
//! Circular author avatar.
//!
//! Renders the fetched avatar image when bytes have arrived, otherwise a
//! colored circle with the author's initial for authors without an uploaded
//! picture.

use crate::domain::Author;
use crate::ui::design_tokens::{palette, radius};
use iced::widget::{container, image, Container, Image, Text};
use iced::{alignment, Background, Border, Element, Length};

/// Renders the avatar at `diameter` logical pixels.
pub fn view<'a, Message: 'a>(
    author: &Author,
    handle: Option<&image::Handle>,
    diameter: f32,
) -> Element<'a, Message> {
    match handle {
        Some(handle) => {
            let picture = Image::new(handle.clone())
                .width(Length::Fixed(diameter))
                .height(Length::Fixed(diameter));

            // Round the image branch too, so it matches the initial circle.
            Container::new(picture)
                .width(Length::Fixed(diameter))
                .height(Length::Fixed(diameter))
                .clip(true)
                .style(|_theme| container::Style {
                    border: Border {
                        radius: radius::FULL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .into()
        }
        None => fallback(author.initial(), diameter),
    }
}

fn fallback<'a, Message: 'a>(initial: String, diameter: f32) -> Element<'a, Message> {
    let letter = Text::new(initial)
        .size(diameter * 0.5)
        .color(palette::WHITE);

    Container::new(letter)
        .width(Length::Fixed(diameter))
        .height(Length::Fixed(diameter))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme| container::Style {
            background: Some(Background::Color(palette::AVATAR_FALLBACK)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
