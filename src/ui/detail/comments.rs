// SPDX-License-Identifier: MPL-2.0
//! Comments side panel.

use super::component::Message;
use crate::domain::{Comment, CommentPage};
use crate::i18n::fluent::I18n;
use crate::ui::detail::queries::Fetch;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// Renders the side panel for the current comments query state.
pub fn panel<'a>(
    i18n: &'a I18n,
    comments: &'a Fetch<CommentPage>,
    count: usize,
) -> Element<'a, Message> {
    let close = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::circular)
        .on_press(Message::CloseCommentPanel);

    let mut args = FluentArgs::new();
    args.set("count", count as i64);
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("comments-title"))
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(
            Text::new(i18n.tr_with("comments-count", &args))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(close);

    let body: Element<'_, Message> = match comments {
        Fetch::Idle | Fetch::Loading => muted_line(i18n.tr("feed-loading")),
        Fetch::NotFound => muted_line(i18n.tr("comments-empty")),
        Fetch::Failed(_) => Text::new(i18n.tr("comments-error"))
            .size(typography::BODY)
            .color(palette::ERROR_500)
            .into(),
        Fetch::Loaded(page) if page.is_empty() => muted_line(i18n.tr("comments-empty")),
        Fetch::Loaded(page) => {
            let mut list = Column::new().spacing(spacing::MD);
            for comment in &page.items {
                list = list.push(card(comment));
            }
            Scrollable::new(list).height(Length::Fill).into()
        }
    };

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(body),
    )
    .width(Length::Fixed(sizing::COMMENT_PANEL_WIDTH))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

fn muted_line<'a>(text: String) -> Element<'a, Message> {
    Text::new(text)
        .size(typography::BODY)
        .color(palette::GRAY_400)
        .into()
}

fn card(comment: &Comment) -> Element<'_, Message> {
    let posted = comment.created_at.format("%b %e, %Y").to_string();

    Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(comment.author_name.as_str())
                        .size(typography::BODY)
                        .color(palette::GRAY_900),
                )
                .push(
                    Text::new(posted)
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                ),
        )
        .push(
            Text::new(comment.body.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_700),
        )
        .into()
}
