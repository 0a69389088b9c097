// SPDX-License-Identifier: MPL-2.0
//! Shot detail overlay.
//!
//! The overlay reacts to the shared selection: when a shot id is selected it
//! fetches the shot, then cascades into the author's other shots, the comment
//! page, and the avatar. It renders a loading skeleton, the populated detail
//! view, or a placeholder/error state.

pub mod component;
mod comments;
mod empty_state;
pub mod queries;
mod skeleton;
mod view;

pub use component::{Effect, Message, State, ViewEnv};
pub use queries::{Fetch, FollowUp, Queries};
