// SPDX-License-Identifier: MPL-2.0
//! Dependent-query ledger for the detail overlay.
//!
//! The overlay runs up to four fetches: the primary shot first, and only
//! after it resolves to an actual shot, the author's other shots, the
//! comment page, and the author's avatar. This module is the pure state
//! machine behind that cascade: it decides which fetches to issue, discards
//! responses whose key no longer matches the current selection, and never
//! lets a dependent fetch run with a stale or absent key.
//!
//! No Iced types appear here; the component maps [`FollowUp`]s into `Task`s.

use crate::domain::{AuthorId, CommentPage, Shot, ShotId};
use crate::error::Error;

/// Lifecycle of a single fetch. Views branch on all five arms; there is no
/// silent failure path.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fetch<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// The backend resolved the request but has no such resource.
    NotFound,
    Failed(Error),
}

impl<T> Fetch<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// A dependent fetch unlocked by a resolved primary shot.
#[derive(Debug, Clone, PartialEq)]
pub enum FollowUp {
    /// More shots by the author, excluding the open shot.
    Related { author: AuthorId, exclude: ShotId },
    /// The comment page for the open shot.
    Comments(ShotId),
    /// The author's avatar image.
    Avatar(String),
}

/// All query state for one overlay session.
///
/// Each dependent query remembers the key it was issued for; a result is
/// applied only when its key still matches. Selection changes mid-flight
/// therefore orphan the old responses instead of racing the new ones.
#[derive(Debug, Default)]
pub struct Queries {
    selection: Option<ShotId>,
    primary: Fetch<Shot>,
    related: Fetch<Vec<Shot>>,
    related_key: Option<(AuthorId, ShotId)>,
    comments: Fetch<CommentPage>,
    comments_key: Option<ShotId>,
    avatar: Fetch<Vec<u8>>,
    avatar_key: Option<String>,
}

impl Queries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a selection change. Returns the key to fetch when a new
    /// primary fetch is needed; `None` when nothing should run (no selection,
    /// or the same shot is already loading or loaded).
    pub fn select(&mut self, id: Option<ShotId>) -> Option<ShotId> {
        match id {
            None => {
                *self = Self::default();
                None
            }
            Some(id) => {
                if self.selection.as_ref() == Some(&id)
                    && matches!(self.primary, Fetch::Loading | Fetch::Loaded(_))
                {
                    return None;
                }
                self.begin(id.clone());
                Some(id)
            }
        }
    }

    /// Re-issues the primary fetch for the current selection, after a failure.
    pub fn retry(&mut self) -> Option<ShotId> {
        let id = self.selection.clone()?;
        self.begin(id.clone());
        Some(id)
    }

    fn begin(&mut self, id: ShotId) {
        self.selection = Some(id);
        self.primary = Fetch::Loading;
        self.related = Fetch::Idle;
        self.related_key = None;
        self.comments = Fetch::Idle;
        self.comments_key = None;
        self.avatar = Fetch::Idle;
        self.avatar_key = None;
    }

    /// Applies the primary result and returns the dependent fetches it
    /// unlocks. Results keyed to a superseded selection are discarded whole;
    /// a not-found or failed primary unlocks nothing.
    pub fn primary_resolved(
        &mut self,
        key: ShotId,
        outcome: Result<Option<Shot>, Error>,
    ) -> Vec<FollowUp> {
        if self.selection.as_ref() != Some(&key) {
            return Vec::new();
        }

        let shot = match outcome {
            Err(err) => {
                self.primary = Fetch::Failed(err);
                return Vec::new();
            }
            Ok(None) => {
                self.primary = Fetch::NotFound;
                return Vec::new();
            }
            Ok(Some(shot)) => shot,
        };

        let mut follow_ups = Vec::new();

        let related_key = (shot.author.id.clone(), shot.id.clone());
        if self.related_key.as_ref() != Some(&related_key) {
            self.related = Fetch::Loading;
            self.related_key = Some(related_key.clone());
            follow_ups.push(FollowUp::Related {
                author: related_key.0,
                exclude: related_key.1,
            });
        }

        if self.comments_key.as_ref() != Some(&shot.id) {
            self.comments = Fetch::Loading;
            self.comments_key = Some(shot.id.clone());
            follow_ups.push(FollowUp::Comments(shot.id.clone()));
        }

        if let Some(url) = &shot.author.avatar_url {
            if self.avatar_key.as_deref() != Some(url.as_str()) {
                self.avatar = Fetch::Loading;
                self.avatar_key = Some(url.clone());
                follow_ups.push(FollowUp::Avatar(url.clone()));
            }
        }

        self.primary = Fetch::Loaded(shot);
        follow_ups
    }

    /// Applies a related-shots result; stale keys are dropped.
    pub fn related_resolved(
        &mut self,
        key: (AuthorId, ShotId),
        result: Result<Vec<Shot>, Error>,
    ) {
        if self.related_key.as_ref() != Some(&key) {
            return;
        }
        self.related = match result {
            Ok(shots) => Fetch::Loaded(shots),
            Err(err) => Fetch::Failed(err),
        };
    }

    /// Applies a comments result; stale keys are dropped.
    pub fn comments_resolved(
        &mut self,
        key: ShotId,
        result: Result<Option<CommentPage>, Error>,
    ) {
        if self.comments_key.as_ref() != Some(&key) {
            return;
        }
        self.comments = match result {
            Ok(Some(page)) => Fetch::Loaded(page),
            Ok(None) => Fetch::NotFound,
            Err(err) => Fetch::Failed(err),
        };
    }

    /// Applies an avatar result. Returns whether the bytes were accepted so
    /// the component knows to rebuild its image handle.
    pub fn avatar_resolved(&mut self, key: String, result: Result<Vec<u8>, Error>) -> bool {
        if self.avatar_key.as_deref() != Some(key.as_str()) {
            return false;
        }
        match result {
            Ok(bytes) => {
                self.avatar = Fetch::Loaded(bytes);
                true
            }
            Err(err) => {
                self.avatar = Fetch::Failed(err);
                false
            }
        }
    }

    pub fn selection(&self) -> Option<&ShotId> {
        self.selection.as_ref()
    }

    pub fn primary(&self) -> &Fetch<Shot> {
        &self.primary
    }

    pub fn shot(&self) -> Option<&Shot> {
        self.primary.loaded()
    }

    /// Related shots when loaded, otherwise an empty slice. The grid simply
    /// stays empty while the fetch is in flight or failed.
    pub fn related_shots(&self) -> &[Shot] {
        self.related.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn comments(&self) -> &Fetch<CommentPage> {
        &self.comments
    }

    /// Count shown on the comments badge: the length of the loaded page, or
    /// zero while unresolved or absent.
    pub fn comment_count(&self) -> usize {
        self.comments.loaded().map(CommentPage::len).unwrap_or(0)
    }

    pub fn avatar_bytes(&self) -> Option<&[u8]> {
        self.avatar.loaded().map(Vec::as_slice)
    }
}
