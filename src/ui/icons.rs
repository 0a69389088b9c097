// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`;
//! handles are cached using `OnceLock` so each icon is parsed once. Icons use
//! generic visual names describing the icon's appearance, not the action
//! context (e.g., `cross` not `close_overlay`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(cross, "x.svg", "Close cross.");
define_icon!(message_circle, "message-circle.svg", "Comment bubble.");
define_icon!(upload, "upload.svg", "Share / upload arrow.");
define_icon!(info, "info.svg", "Information circle.");
define_icon!(refresh, "refresh.svg", "Refresh arrows.");

/// Resizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color regardless of theme.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| iced::widget::svg::Style { color: Some(color) })
}
