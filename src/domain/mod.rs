// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the API client and the UI.
//!
//! Every type here is an immutable snapshot of what the backend returned for
//! one fetch; nothing in the UI mutates them.

mod comment;
mod shot;

pub use comment::{Comment, CommentPage};
pub use shot::{Author, AuthorId, Shot, ShotId};
