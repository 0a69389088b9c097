// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: feed underneath, detail overlay stacked on top while a
//! shot is selected.

use super::Message;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::stores::{CommentPanelStore, SelectionStore};
use crate::ui::design_tokens::spacing;
use crate::ui::{detail, feed, navbar, styles};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub selection: &'a SelectionStore,
    pub comment_panel: &'a CommentPanelStore,
    pub feed: &'a feed::State,
    pub detail: &'a detail::State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let base = Column::new()
        .push(navbar::view(ctx.i18n).map(Message::Navbar))
        .push(ctx.feed.view(ctx.i18n).map(Message::Feed));

    if !ctx.selection.is_open() {
        return base.into();
    }

    let env = detail::ViewEnv {
        i18n: ctx.i18n,
        comment_panel_open: ctx.comment_panel.is_open(),
        share_base_url: ctx.config.share_base_url(),
    };

    // The sheet leaves a sliver of backdrop visible at the top, like a modal
    // pulled up from the bottom edge.
    let sheet = Container::new(ctx.detail.view(env).map(Message::Detail))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::overlay_sheet);

    let backdrop = Container::new(sheet)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::LG, 0.0])
        .style(styles::container::backdrop);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(backdrop)
        .into()
}
