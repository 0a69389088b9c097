// SPDX-License-Identifier: MPL-2.0
//! Message dispatch: routes component messages and applies their effects to
//! the shared stores.

use super::Message;
use crate::api;
use crate::domain::ShotId;
use crate::stores::{CommentPanelStore, SelectionStore};
use crate::ui::{detail, feed, navbar};
use iced::Task;
use std::sync::Arc;

/// Mutable borrows of everything a message handler may touch.
pub struct UpdateContext<'a> {
    pub client: &'a Arc<api::Client>,
    pub selection: &'a mut SelectionStore,
    pub comment_panel: &'a mut CommentPanelStore,
    pub feed: &'a mut feed::State,
    pub detail: &'a mut detail::State,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Feed(msg) => handle_feed(ctx, msg),
        Message::Detail(msg) => handle_detail(ctx, msg),
        Message::Navbar(msg) => handle_navbar(ctx, msg),
        Message::EscapePressed => handle_escape(ctx),
    }
}

fn handle_feed(ctx: &mut UpdateContext<'_>, message: feed::Message) -> Task<Message> {
    let (effect, task) = ctx.feed.handle_message(message, ctx.client);
    let task = task.map(Message::Feed);
    match effect {
        feed::Effect::None => task,
        feed::Effect::OpenShot(id) => Task::batch([task, open_shot(ctx, id)]),
    }
}

fn handle_detail(ctx: &mut UpdateContext<'_>, message: detail::Message) -> Task<Message> {
    let (effect, task) = ctx.detail.handle_message(message, ctx.client);
    let task = task.map(Message::Detail);
    match effect {
        detail::Effect::None => task,
        detail::Effect::Close => Task::batch([task, close_overlay(ctx)]),
        detail::Effect::OpenShot(id) => Task::batch([task, open_shot(ctx, id)]),
        detail::Effect::CommentPanelOpened => {
            ctx.comment_panel.open();
            task
        }
        detail::Effect::CommentPanelClosed => {
            ctx.comment_panel.close();
            task
        }
        detail::Effect::OpenProfile(_) => {
            // Profile pages belong to the companion website; the desktop
            // client has nowhere to route them yet.
            task
        }
    }
}

fn handle_navbar(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::RefreshPressed => ctx.feed.load(ctx.client).map(Message::Feed),
    }
}

/// Escape closes the innermost layer first: comment panel, then overlay.
fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.comment_panel.is_open() {
        ctx.comment_panel.close();
        Task::none()
    } else if ctx.selection.is_open() {
        close_overlay(ctx)
    } else {
        Task::none()
    }
}

/// Points the overlay at `id` and starts its fetch cascade.
pub fn open_shot(ctx: &mut UpdateContext<'_>, id: ShotId) -> Task<Message> {
    ctx.selection.open(id.clone());
    ctx.comment_panel.close();
    let (_, task) = ctx
        .detail
        .handle_message(detail::Message::SelectionChanged(Some(id)), ctx.client);
    task.map(Message::Detail)
}

fn close_overlay(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.selection.close();
    ctx.comment_panel.close();
    let (_, task) = ctx
        .detail
        .handle_message(detail::Message::SelectionChanged(None), ctx.client);
    task.map(Message::Detail)
}
