// SPDX-License-Identifier: MPL-2.0
//! Comment models. The detail view only surfaces the count on its badge; the
//! side panel renders the full list.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single comment left on a shot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// One page of comments for a shot, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CommentPage {
    #[serde(rename = "comments", default)]
    pub items: Vec<Comment>,
}

impl CommentPage {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
