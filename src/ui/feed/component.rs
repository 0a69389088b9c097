// SPDX-License-Identifier: MPL-2.0
//! Feed component encapsulating state and update logic.

use crate::api;
use crate::domain::{Shot, ShotId};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::shot_tile;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::detail::queries::Fetch;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length, Task};
use std::sync::Arc;

/// How many shots one feed page requests.
const FEED_LIMIT: usize = 24;

/// Shots per grid row.
const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the recent-shots fetch.
    Loaded(Result<Vec<Shot>, Error>),
    RefreshPressed,
    ShotPressed(ShotId),
}

/// Side effects the application performs after handling a feed message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Open the detail overlay on this shot.
    OpenShot(ShotId),
}

#[derive(Default)]
pub struct State {
    shots: Fetch<Vec<Shot>>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shots(&self) -> &Fetch<Vec<Shot>> {
        &self.shots
    }

    /// Kicks off the recent-shots fetch; used at boot and on refresh.
    pub fn load(&mut self, client: &Arc<api::Client>) -> Task<Message> {
        self.shots = Fetch::Loading;
        let client = client.clone();
        Task::perform(
            async move { client.recent_shots(FEED_LIMIT).await },
            Message::Loaded,
        )
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        client: &Arc<api::Client>,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::Loaded(result) => {
                self.shots = match result {
                    Ok(shots) => Fetch::Loaded(shots),
                    Err(err) => {
                        eprintln!("Failed to load the feed: {err}");
                        Fetch::Failed(err)
                    }
                };
                (Effect::None, Task::none())
            }
            Message::RefreshPressed => (Effect::None, self.load(client)),
            Message::ShotPressed(id) => (Effect::OpenShot(id), Task::none()),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let body: Element<'_, Message> = match &self.shots {
            Fetch::Idle | Fetch::Loading => centered_note(i18n.tr("feed-loading")),
            Fetch::NotFound => centered_note(i18n.tr("feed-empty")),
            Fetch::Failed(_) => error_state(i18n),
            Fetch::Loaded(shots) if shots.is_empty() => centered_note(i18n.tr("feed-empty")),
            Fetch::Loaded(shots) => grid(i18n, shots),
        };

        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn centered_note<'a>(text: String) -> Element<'a, Message> {
    Container::new(
        Text::new(text)
            .size(typography::TITLE_SM)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn error_state(i18n: &I18n) -> Element<'_, Message> {
    let retry = button(Text::new(i18n.tr("retry")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::RefreshPressed);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("feed-error"))
                    .size(typography::TITLE_SM)
                    .color(palette::ERROR_500),
            )
            .push(retry),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn grid<'a>(i18n: &'a I18n, shots: &'a [Shot]) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).push(
        Text::new(i18n.tr("feed-title"))
            .size(typography::TITLE_MD)
            .color(palette::GRAY_900),
    );

    for chunk in shots.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for shot in chunk {
            row = row.push(shot_tile::view(shot, Message::ShotPressed(shot.id.clone())));
        }
        column = column.push(row);
    }

    Scrollable::new(
        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, AuthorId};
    use chrono::Utc;

    fn test_client() -> Arc<api::Client> {
        Arc::new(api::Client::new("http://localhost:9/api/").expect("client"))
    }

    fn sample_shot(id: &str) -> Shot {
        Shot {
            id: ShotId::from(id),
            title: format!("shot {id}"),
            body: String::new(),
            created_at: Utc::now(),
            author: Author {
                id: AuthorId::from("a1"),
                name: "mira".to_owned(),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn load_marks_feed_as_loading() {
        let mut state = State::new();
        let _task = state.load(&test_client());
        assert!(state.shots().is_loading());
    }

    #[test]
    fn loaded_result_is_applied() {
        let mut state = State::new();
        let _ = state.load(&test_client());
        let (effect, _) = state.handle_message(
            Message::Loaded(Ok(vec![sample_shot("s1")])),
            &test_client(),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(state.shots().loaded().map(Vec::len), Some(1));
    }

    #[test]
    fn failure_is_kept_for_the_error_view() {
        let mut state = State::new();
        let (_, _) = state.handle_message(
            Message::Loaded(Err(Error::Http("boom".into()))),
            &test_client(),
        );
        assert!(matches!(state.shots(), Fetch::Failed(_)));
    }

    #[test]
    fn tile_press_emits_open_shot() {
        let mut state = State::new();
        let (effect, _) =
            state.handle_message(Message::ShotPressed(ShotId::from("s3")), &test_client());
        assert_eq!(effect, Effect::OpenShot(ShotId::from("s3")));
    }
}
