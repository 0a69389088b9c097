// SPDX-License-Identifier: MPL-2.0
//! Small presentational components shared by the feed and the detail overlay.

pub mod avatar;
pub mod shot_tile;
