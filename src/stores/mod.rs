// SPDX-License-Identifier: MPL-2.0
//! Shared view-state stores owned by the application root.
//!
//! These replace what a web client would keep in global mutable stores: each
//! is a plain struct with an explicit read/update interface, owned by `App`
//! and handed to views by reference.

mod comment_panel;
mod selection;

pub use comment_panel::CommentPanelStore;
pub use selection::SelectionStore;
