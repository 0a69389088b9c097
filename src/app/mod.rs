// SPDX-License-Identifier: MPL-2.0
//! Root Iced application state bridging the feed, the detail overlay, the
//! shared stores, localization, and persisted preferences.

pub mod message;
pub mod subscription;
pub mod update;
pub mod view;

pub use message::{Flags, Message};

use crate::api;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::stores::{CommentPanelStore, SelectionStore};
use crate::ui::theming::ThemeMode;
use crate::ui::{detail, feed};
use iced::{window, Element, Subscription, Task, Theme};
use std::sync::Arc;

const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
const MIN_WINDOW_WIDTH: f32 = 800.0;
const MIN_WINDOW_HEIGHT: f32 = 600.0;

pub struct App {
    pub i18n: I18n,
    config: Config,
    client: Arc<api::Client>,
    selection: SelectionStore,
    comment_panel: CommentPanelStore,
    feed: feed::State,
    detail: detail::State,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state, starts the feed fetch, and opens the
    /// overlay right away when a deep-linked shot id was passed.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Falling back to default configuration: {err}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = flags
            .api_base_url
            .as_deref()
            .unwrap_or_else(|| config.api_base_url());
        let client = Arc::new(
            api::Client::new(base_url).expect("Failed to construct the HTTP client"),
        );

        let mut app = App {
            i18n,
            config,
            client,
            selection: SelectionStore::new(),
            comment_panel: CommentPanelStore::new(),
            feed: feed::State::new(),
            detail: detail::State::new(),
        };

        let feed_task = app.feed.load(&app.client).map(Message::Feed);
        let task = match flags.initial_shot {
            Some(id) => {
                let mut ctx = app.update_context();
                let open = update::open_shot(&mut ctx, id);
                Task::batch([feed_task, open])
            }
            None => feed_task,
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            client: &self.client,
            selection: &mut self.selection,
            comment_panel: &mut self.comment_panel,
            feed: &mut self.feed,
            detail: &mut self.detail,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.detail.queries().shot() {
            Some(shot) if self.selection.is_open() => {
                format!("{} - {app_name}", shot.title)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        let mode = self.config.theme_mode.unwrap_or(ThemeMode::System);
        if mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            selection: &self.selection,
            comment_panel: &self.comment_panel,
            feed: &self.feed,
            detail: &self.detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShotId;

    fn test_app() -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_owned()), &config);
        App {
            i18n,
            config,
            client: Arc::new(api::Client::new("http://localhost:9/api/").expect("client")),
            selection: SelectionStore::new(),
            comment_panel: CommentPanelStore::new(),
            feed: feed::State::new(),
            detail: detail::State::new(),
        }
    }

    #[test]
    fn title_defaults_to_the_app_name() {
        let app = test_app();
        assert_eq!(app.title(), "IcedFolio");
    }

    #[test]
    fn pressing_a_feed_tile_opens_the_overlay() {
        let mut app = test_app();
        let _task = app.update(Message::Feed(feed::Message::ShotPressed(ShotId::from(
            "s1",
        ))));
        assert!(app.selection.is_open());
        assert_eq!(app.selection.selected_id(), Some(&ShotId::from("s1")));
        assert!(app.detail.queries().primary().is_loading());
    }

    #[test]
    fn escape_closes_the_comment_panel_before_the_overlay() {
        let mut app = test_app();
        let _ = app.update(Message::Feed(feed::Message::ShotPressed(ShotId::from(
            "s1",
        ))));
        app.comment_panel.open();

        let _ = app.update(Message::EscapePressed);
        assert!(app.selection.is_open());
        assert!(!app.comment_panel.is_open());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.selection.is_open());
    }

    #[test]
    fn escape_with_nothing_open_is_a_no_op() {
        let mut app = test_app();
        let _ = app.update(Message::EscapePressed);
        assert!(!app.selection.is_open());
    }
}
