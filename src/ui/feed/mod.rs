// SPDX-License-Identifier: MPL-2.0
//! Feed screen listing recent shots. Pressing a tile opens the detail
//! overlay through the shared selection store.

pub mod component;

pub use component::{Effect, Message, State};
