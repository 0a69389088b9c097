// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the portfolio backend.
//!
//! All reads are idempotent GETs. A 404 on a single-resource endpoint is a
//! domain-level "not found", not an error; everything else surfaces as
//! [`crate::error::Error`].

mod cache;
mod client;

pub use cache::{create_shot_cache, SharedShotCache, SHOT_CACHE_CAPACITY};
pub use client::Client;
