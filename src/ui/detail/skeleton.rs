// SPDX-License-Identifier: MPL-2.0
//! Loading skeleton shown while the primary shot fetch is in flight.

use super::component::Message;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{Column, Container, Space};
use iced::{alignment, Element, Length};

fn block<'a>(width: Length, height: f32) -> Element<'a, Message> {
    Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(width)
        .height(Length::Fixed(height))
        .style(styles::container::skeleton_block)
        .into()
}

/// Gray placeholder layout mirroring the populated view: title bar, byline,
/// artwork block, and a few body lines.
pub fn view<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(block(
            Length::Fixed(sizing::SKELETON_TITLE_WIDTH),
            spacing::LG,
        ))
        .push(block(
            Length::Fixed(sizing::SKELETON_TITLE_WIDTH * 0.6),
            sizing::SKELETON_LINE_HEIGHT,
        ))
        .push(block(Length::Fill, sizing::SKELETON_BLOCK_HEIGHT))
        .push(block(Length::Fill, sizing::SKELETON_LINE_HEIGHT))
        .push(block(Length::Fill, sizing::SKELETON_LINE_HEIGHT))
        .push(block(
            Length::Fixed(sizing::SKELETON_TITLE_WIDTH),
            sizing::SKELETON_LINE_HEIGHT,
        ));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XXL, spacing::XXL])
        .align_x(alignment::Horizontal::Center)
        .into()
}
