// SPDX-License-Identifier: MPL-2.0
//! Detail overlay component encapsulating state and update logic.

use crate::api;
use crate::domain::{AuthorId, CommentPage, Shot, ShotId};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::detail::queries::{FollowUp, Queries};
use crate::ui::detail::{empty_state, skeleton, view};
use iced::widget::image;
use iced::{Element, Task};
use std::sync::Arc;

/// Messages emitted by the detail overlay widgets and its fetch tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// The shared selection changed (overlay opened, switched shot, closed).
    SelectionChanged(Option<ShotId>),
    ShotFetched {
        key: ShotId,
        result: Result<Option<Shot>, Error>,
    },
    RelatedFetched {
        key: (AuthorId, ShotId),
        result: Result<Vec<Shot>, Error>,
    },
    CommentsFetched {
        key: ShotId,
        result: Result<Option<CommentPage>, Error>,
    },
    AvatarFetched {
        key: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Retry the primary fetch after a failure.
    RetryPressed,
    CloseRequested,
    ToggleShare,
    ToggleInfo,
    OpenCommentPanel,
    CloseCommentPanel,
    /// A tile in the "more by author" grid was pressed.
    ShotPressed(ShotId),
    ViewProfilePressed,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Close the overlay; the app clears the selection store.
    Close,
    /// Open another shot in the overlay.
    OpenShot(ShotId),
    CommentPanelOpened,
    CommentPanelClosed,
    /// The "View profile" link was pressed. Profile navigation lives outside
    /// this overlay.
    OpenProfile(AuthorId),
}

/// Environment the app provides when rendering the overlay. Two borrows and
/// a flag, so it is `Copy` and travels by value through the view functions.
#[derive(Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub comment_panel_open: bool,
    /// Base for the shareable link, shown verbatim with `shot/<id>` appended.
    pub share_base_url: &'a str,
}

/// Detail overlay state: the query ledger plus purely local toggles.
#[derive(Default)]
pub struct State {
    queries: Queries,
    avatar_handle: Option<image::Handle>,
    share_open: bool,
    info_open: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> &Queries {
        &self.queries
    }

    pub fn share_open(&self) -> bool {
        self.share_open
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        client: &Arc<api::Client>,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::SelectionChanged(id) => {
                self.share_open = false;
                self.info_open = false;
                self.avatar_handle = None;
                match self.queries.select(id) {
                    Some(key) => (Effect::None, fetch_shot(client.clone(), key)),
                    None => (Effect::None, Task::none()),
                }
            }
            Message::ShotFetched { key, result } => {
                if let Err(err) = &result {
                    eprintln!("Failed to fetch shot {key}: {err}");
                }
                let follow_ups = self.queries.primary_resolved(key, result);
                (Effect::None, spawn_follow_ups(client, follow_ups))
            }
            Message::RelatedFetched { key, result } => {
                if let Err(err) = &result {
                    eprintln!("Failed to fetch related shots for {}: {err}", key.0);
                }
                self.queries.related_resolved(key, result);
                (Effect::None, Task::none())
            }
            Message::CommentsFetched { key, result } => {
                if let Err(err) = &result {
                    eprintln!("Failed to fetch comments for {key}: {err}");
                }
                self.queries.comments_resolved(key, result);
                (Effect::None, Task::none())
            }
            Message::AvatarFetched { key, result } => {
                if self.queries.avatar_resolved(key, result) {
                    self.avatar_handle = self
                        .queries
                        .avatar_bytes()
                        .map(|bytes| image::Handle::from_bytes(bytes.to_vec()));
                }
                (Effect::None, Task::none())
            }
            Message::RetryPressed => match self.queries.retry() {
                Some(key) => (Effect::None, fetch_shot(client.clone(), key)),
                None => (Effect::None, Task::none()),
            },
            Message::CloseRequested => (Effect::Close, Task::none()),
            Message::ToggleShare => {
                self.share_open = !self.share_open;
                (Effect::None, Task::none())
            }
            Message::ToggleInfo => {
                self.info_open = !self.info_open;
                (Effect::None, Task::none())
            }
            Message::OpenCommentPanel => (Effect::CommentPanelOpened, Task::none()),
            Message::CloseCommentPanel => (Effect::CommentPanelClosed, Task::none()),
            Message::ShotPressed(id) => (Effect::OpenShot(id), Task::none()),
            Message::ViewProfilePressed => match self.queries.shot() {
                Some(shot) => (Effect::OpenProfile(shot.author.id.clone()), Task::none()),
                None => (Effect::None, Task::none()),
            },
        }
    }

    /// Renders the overlay content for the current query state.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        use crate::ui::detail::queries::Fetch;

        match self.queries.primary() {
            Fetch::Idle | Fetch::Loading => skeleton::view(),
            Fetch::NotFound => empty_state::not_found(env.i18n),
            Fetch::Failed(err) => empty_state::error(env.i18n, err),
            Fetch::Loaded(shot) => view::populated(view::Context {
                shot,
                related: self.queries.related_shots(),
                comments: self.queries.comments(),
                comment_count: self.queries.comment_count(),
                avatar_handle: self.avatar_handle.as_ref(),
                share_open: self.share_open,
                info_open: self.info_open,
                env,
            }),
        }
    }
}

fn fetch_shot(client: Arc<api::Client>, key: ShotId) -> Task<Message> {
    let msg_key = key.clone();
    Task::perform(
        async move { client.shot_by_id(&key).await },
        move |result| Message::ShotFetched {
            key: msg_key.clone(),
            result,
        },
    )
}

fn fetch_related(client: Arc<api::Client>, author: AuthorId, exclude: ShotId) -> Task<Message> {
    let msg_key = (author.clone(), exclude.clone());
    Task::perform(
        async move { client.more_shots_by_author(&author, &exclude).await },
        move |result| Message::RelatedFetched {
            key: msg_key.clone(),
            result,
        },
    )
}

fn fetch_comments(client: Arc<api::Client>, key: ShotId) -> Task<Message> {
    let msg_key = key.clone();
    Task::perform(
        async move { client.comments_by_shot(&key).await },
        move |result| Message::CommentsFetched {
            key: msg_key.clone(),
            result,
        },
    )
}

fn fetch_avatar(client: Arc<api::Client>, url: String) -> Task<Message> {
    let msg_key = url.clone();
    Task::perform(
        async move { client.avatar_bytes(&url).await },
        move |result| Message::AvatarFetched {
            key: msg_key.clone(),
            result,
        },
    )
}

/// Maps unlocked follow-ups into concurrent fetch tasks. Related, comments,
/// and avatar run independently once eligible; no ordering between them.
fn spawn_follow_ups(client: &Arc<api::Client>, follow_ups: Vec<FollowUp>) -> Task<Message> {
    let tasks = follow_ups.into_iter().map(|follow_up| match follow_up {
        FollowUp::Related { author, exclude } => fetch_related(client.clone(), author, exclude),
        FollowUp::Comments(id) => fetch_comments(client.clone(), id),
        FollowUp::Avatar(url) => fetch_avatar(client.clone(), url),
    });
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Author;
    use chrono::Utc;

    fn test_client() -> Arc<api::Client> {
        Arc::new(api::Client::new("http://localhost:9/api/").expect("client"))
    }

    fn sample_shot(id: &str) -> Shot {
        Shot {
            id: ShotId::from(id),
            title: "Neon skyline".to_owned(),
            body: "A study in gradients.".to_owned(),
            created_at: Utc::now(),
            author: Author {
                id: AuthorId::from("a1"),
                name: "mira".to_owned(),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn close_request_emits_close_effect() {
        let mut state = State::new();
        let (effect, _task) = state.handle_message(Message::CloseRequested, &test_client());
        assert_eq!(effect, Effect::Close);
    }

    #[test]
    fn comment_panel_messages_do_not_touch_query_state() {
        let client = test_client();
        let mut state = State::new();
        let _ = state.handle_message(
            Message::SelectionChanged(Some(ShotId::from("s1"))),
            &client,
        );
        let _ = state.handle_message(
            Message::ShotFetched {
                key: ShotId::from("s1"),
                result: Ok(Some(sample_shot("s1"))),
            },
            &client,
        );
        assert!(state.queries().shot().is_some());

        let (effect, _) = state.handle_message(Message::OpenCommentPanel, &client);
        assert_eq!(effect, Effect::CommentPanelOpened);
        assert!(state.queries().shot().is_some(), "fetched data untouched");

        let (effect, _) = state.handle_message(Message::CloseCommentPanel, &client);
        assert_eq!(effect, Effect::CommentPanelClosed);
        assert!(state.queries().shot().is_some());
    }

    #[test]
    fn tile_press_emits_open_shot_effect() {
        let mut state = State::new();
        let (effect, _) =
            state.handle_message(Message::ShotPressed(ShotId::from("s7")), &test_client());
        assert_eq!(effect, Effect::OpenShot(ShotId::from("s7")));
    }

    #[test]
    fn toggles_reset_when_selection_changes() {
        let client = test_client();
        let mut state = State::new();
        let _ = state.handle_message(Message::ToggleShare, &client);
        let _ = state.handle_message(Message::ToggleInfo, &client);
        assert!(state.share_open());
        assert!(state.info_open());

        let _ = state.handle_message(
            Message::SelectionChanged(Some(ShotId::from("s1"))),
            &client,
        );
        assert!(!state.share_open());
        assert!(!state.info_open());
    }

    #[test]
    fn view_profile_without_shot_is_a_no_op() {
        let mut state = State::new();
        let (effect, _) = state.handle_message(Message::ViewProfilePressed, &test_client());
        assert_eq!(effect, Effect::None);
    }

    // The view borrows the query ledger for the element's lifetime while the
    // environment is passed by value; this builds the element for every
    // primary state to keep that arrangement honest.
    #[test]
    fn view_builds_an_element_for_every_primary_state() {
        let client = test_client();
        let i18n = I18n::default();
        let env = || ViewEnv {
            i18n: &i18n,
            comment_panel_open: false,
            share_base_url: "http://localhost:3000/",
        };

        let mut state = State::new();
        let _ = state.view(env()); // idle: skeleton

        let _ = state.handle_message(
            Message::SelectionChanged(Some(ShotId::from("s1"))),
            &client,
        );
        let _ = state.view(env()); // loading: skeleton

        let _ = state.handle_message(
            Message::ShotFetched {
                key: ShotId::from("s1"),
                result: Ok(Some(sample_shot("s1"))),
            },
            &client,
        );
        let _ = state.view(env()); // populated

        let _ = state.handle_message(Message::ToggleShare, &client);
        let _ = state.view(env()); // populated + share popover
        let _ = state.view(ViewEnv {
            i18n: &i18n,
            comment_panel_open: true,
            share_base_url: "http://localhost:3000/",
        }); // populated + comments panel

        let _ = state.handle_message(
            Message::SelectionChanged(Some(ShotId::from("s2"))),
            &client,
        );
        let _ = state.handle_message(
            Message::ShotFetched {
                key: ShotId::from("s2"),
                result: Ok(None),
            },
            &client,
        );
        let _ = state.view(env()); // not found

        let _ = state.handle_message(
            Message::SelectionChanged(Some(ShotId::from("s3"))),
            &client,
        );
        let _ = state.handle_message(
            Message::ShotFetched {
                key: ShotId::from("s3"),
                result: Err(Error::Http("boom".into())),
            },
            &client,
        );
        let _ = state.view(env()); // failed, with retry
    }
}
