// SPDX-License-Identifier: MPL-2.0
//! Shot and author models.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Opaque identifier for a shot, as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ShotId(pub String);

impl ShotId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShotId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Opaque identifier for an author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub String);

impl AuthorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AuthorId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// The creator of a shot, embedded in every shot payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    /// Absolute URL of the avatar image, when the author uploaded one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Author {
    /// First letter of the author name, uppercased, for the avatar fallback.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_owned())
    }
}

/// A single portfolio work item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shot {
    pub id: ShotId,
    pub title: String,
    /// Long-form body text shown in the detail view.
    #[serde(default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "user")]
    pub author: Author,
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) const SHOT_JSON: &str = r#"{
        "id": "shot-1",
        "title": "Neon skyline",
        "body": "A study in gradients.",
        "created_at": "2024-03-01T12:00:00Z",
        "user": {
            "id": "author-9",
            "name": "mira",
            "avatar_url": "https://cdn.example/avatars/mira.png"
        }
    }"#;

    #[test]
    fn shot_decodes_from_backend_json() {
        let shot: Shot = serde_json::from_str(SHOT_JSON).expect("decode shot");
        assert_eq!(shot.id, ShotId::from("shot-1"));
        assert_eq!(shot.title, "Neon skyline");
        assert_eq!(shot.author.id, AuthorId::from("author-9"));
        assert_eq!(
            shot.author.avatar_url.as_deref(),
            Some("https://cdn.example/avatars/mira.png")
        );
    }

    #[test]
    fn missing_avatar_and_body_default_to_empty() {
        let json = r#"{
            "id": "shot-2",
            "title": "Untitled",
            "created_at": "2024-03-02T08:30:00Z",
            "user": { "id": "author-9", "name": "mira" }
        }"#;
        let shot: Shot = serde_json::from_str(json).expect("decode shot");
        assert!(shot.body.is_empty());
        assert!(shot.author.avatar_url.is_none());
    }

    #[test]
    fn author_initial_is_uppercased() {
        let author = Author {
            id: AuthorId::from("a"),
            name: "mira".to_owned(),
            avatar_url: None,
        };
        assert_eq!(author.initial(), "M");
    }

    #[test]
    fn author_initial_falls_back_for_empty_name() {
        let author = Author {
            id: AuthorId::from("a"),
            name: String::new(),
            avatar_url: None,
        };
        assert_eq!(author.initial(), "?");
    }
}
