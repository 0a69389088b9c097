// SPDX-License-Identifier: MPL-2.0
//! IcedFolio: a desktop portfolio browser.
//!
//! A feed of recent shots with a Dribbble-style detail overlay. The overlay
//! runs a cascade of dependent fetches (shot, then related shots, comments,
//! and the author avatar) tracked by a pure query ledger so that stale
//! responses never overwrite a newer selection.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod stores;
pub mod ui;
