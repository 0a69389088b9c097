// SPDX-License-Identifier: MPL-2.0
//! Populated detail view composition.
//!
//! Lays out the shot itself, the author section, the "more by author" grid,
//! the floating action buttons, and, when the panel store says so, the
//! comments side panel in place of the action buttons.

mod content;
mod heading;

use crate::domain::{CommentPage, Shot};
use crate::ui::components::{avatar, shot_tile};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::detail::comments;
use crate::ui::detail::component::{Message, ViewEnv};
use crate::ui::detail::queries::Fetch;
use crate::ui::icons;
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, image, tooltip, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Width of the centered reading column.
const CONTENT_MAX_WIDTH: f32 = 960.0;

/// Shots per row in the "more by author" grid.
const GRID_COLUMNS: usize = 4;

pub struct Context<'a> {
    pub shot: &'a Shot,
    pub related: &'a [Shot],
    pub comments: &'a Fetch<CommentPage>,
    pub comment_count: usize,
    pub avatar_handle: Option<&'a image::Handle>,
    pub share_open: bool,
    pub info_open: bool,
    pub env: ViewEnv<'a>,
}

pub fn populated(ctx: Context<'_>) -> Element<'_, Message> {
    let i18n = ctx.env.i18n;

    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(
            Text::new(ctx.shot.title.as_str())
                .size(typography::TITLE_LG)
                .color(palette::GRAY_900),
        )
        .push(heading::view(ctx.shot, ctx.avatar_handle))
        .push(content::view(ctx.shot))
        .push(author_section(ctx.shot, ctx.avatar_handle, ctx.env))
        .push(more_by_section(ctx.shot, ctx.related, ctx.env));

    if ctx.info_open {
        let mut args = FluentArgs::new();
        args.set(
            "date",
            ctx.shot.created_at.format("%B %e, %Y").to_string(),
        );
        column = column.push(
            Text::new(i18n.tr_with("detail-posted-on", &args))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let reading_column = Container::new(column)
        .max_width(CONTENT_MAX_WIDTH)
        .padding([spacing::XXL, spacing::XL]);

    let scrollable = Scrollable::new(
        Container::new(reading_column)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let base: Element<'_, Message> = if ctx.env.comment_panel_open {
        Row::new()
            .push(scrollable)
            .push(comments::panel(i18n, ctx.comments, ctx.comment_count))
            .into()
    } else {
        scrollable.into()
    };

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(close_button(ctx.env));

    // The floating actions make way for the side panel.
    if !ctx.env.comment_panel_open {
        stack = stack.push(action_buttons(ctx.comment_count));
        if ctx.share_open {
            stack = stack.push(share_popover(ctx.shot, ctx.env));
        }
    }

    stack.into()
}

fn close_button<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    // The sheet is always white; the default icon style would vanish on it
    // under the dark theme.
    let glyph = icons::tinted(icons::sized(icons::cross(), sizing::ICON_MD), palette::GRAY_700);
    let close = tooltip::Tooltip::new(
        button(glyph)
            .padding(spacing::XXS)
            .style(styles::button::bare)
            .on_press(Message::CloseRequested),
        Text::new(env.i18n.tr("detail-close")).size(typography::CAPTION),
        tooltip::Position::Left,
    )
    .gap(spacing::XXS)
    .padding(spacing::XXS);

    Container::new(close)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::SM)
        .into()
}

fn author_section<'a>(
    shot: &'a Shot,
    avatar_handle: Option<&image::Handle>,
    env: ViewEnv<'a>,
) -> Element<'a, Message> {
    let rule = || {
        Container::new(Space::new().width(Length::Fill).height(Length::Fixed(2.0)))
            .width(Length::Fill)
            .style(styles::container::divider)
    };

    let divider_row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(rule())
        .push(avatar::view(&shot.author, avatar_handle, sizing::AVATAR_LG))
        .push(rule());

    let contact = button(Text::new(env.i18n.tr("detail-get-in-touch")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::pill);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(divider_row)
        .push(
            Text::new(shot.author.name.as_str())
                .size(typography::TITLE_MD)
                .color(palette::GRAY_900),
        )
        .push(
            Text::new(env.i18n.tr("detail-author-tagline"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(contact)
        .into()
}

fn more_by_section<'a>(
    shot: &'a Shot,
    related: &'a [Shot],
    env: ViewEnv<'a>,
) -> Element<'a, Message> {
    let mut args = FluentArgs::new();
    args.set("name", shot.author.name.as_str());

    let view_profile = button(
        Text::new(env.i18n.tr("detail-view-profile"))
            .size(typography::BODY)
            .color(palette::PRIMARY_500),
    )
    .padding(0)
    .style(styles::button::bare)
    .on_press(Message::ViewProfilePressed);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(env.i18n.tr_with("detail-more-by", &args))
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(view_profile);

    let mut grid = Column::new().spacing(spacing::MD);
    for chunk in related.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for related_shot in chunk {
            row = row.push(shot_tile::view(
                related_shot,
                Message::ShotPressed(related_shot.id.clone()),
            ));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(grid)
        .into()
}

fn action_buttons<'a>(comment_count: usize) -> Element<'a, Message> {
    let circular = |icon: iced::widget::Svg<'static>| {
        button(icons::sized(icon, sizing::ICON_MD))
            .padding(spacing::XS)
            .style(styles::button::circular)
    };

    let badge = Container::new(
        Text::new(comment_count.to_string())
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .width(Length::Fixed(sizing::BADGE))
    .height(Length::Fixed(sizing::BADGE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::badge);

    let comment_action = Stack::new()
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .push(
            Container::new(circular(icons::message_circle()).on_press(Message::OpenCommentPanel))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Left)
                .align_y(alignment::Vertical::Bottom),
        )
        .push(
            Container::new(badge)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    let actions = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(comment_action)
        .push(circular(icons::upload()).on_press(Message::ToggleShare))
        .push(circular(icons::info()).on_press(Message::ToggleInfo));

    Container::new(actions)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD)
        .into()
}

fn share_popover<'a>(shot: &'a Shot, env: ViewEnv<'a>) -> Element<'a, Message> {
    let url = format!("{}shot/{}", env.share_base_url, shot.id);

    let popover = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(env.i18n.tr("detail-share-link"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(Text::new(url).size(typography::BODY)),
    )
    .width(Length::Fixed(sizing::SHARE_POPOVER_WIDTH))
    .padding(spacing::MD)
    .style(styles::container::popover);

    Container::new(popover)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding([spacing::MD, sizing::ICON_XL + spacing::XL])
        .into()
}
