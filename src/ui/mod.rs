// SPDX-License-Identifier: MPL-2.0
//! UI modules: components, screens, styles, and design tokens.

pub mod components;
pub mod design_tokens;
pub mod detail;
pub mod feed;
pub mod icons;
pub mod navbar;
pub mod styles;
pub mod theming;
