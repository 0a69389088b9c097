// SPDX-License-Identifier: MPL-2.0
//! Top-level message type and launch flags.

use crate::domain::ShotId;
use crate::ui::{detail, feed, navbar};

/// Options collected by the launcher before the UI starts.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override (`--lang`), e.g. `fr` or `en-US`.
    pub lang: Option<String>,
    /// API base URL override (`--api`).
    pub api_base_url: Option<String>,
    /// Shot to open on startup, for deep links.
    pub initial_shot: Option<ShotId>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Feed(feed::Message),
    Detail(detail::Message),
    Navbar(navbar::Message),
    EscapePressed,
}
