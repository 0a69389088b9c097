// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_folio::ui::styles::{button, container};
    use iced_folio::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::pill(&theme, iced::widget::button::Status::Hovered);
        let _ = button::circular(&theme, iced::widget::button::Status::Active);
        let _ = button::bare(&theme, iced::widget::button::Status::Active);
        let _ = button::tile(&theme, iced::widget::button::Status::Hovered);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Light;

        let _ = container::panel(&theme);
        let _ = container::overlay_sheet(&theme);
        let _ = container::backdrop(&theme);
        let _ = container::popover(&theme);
        let _ = container::badge(&theme);
        let _ = container::skeleton_block(&theme);
        let _ = container::divider(&theme);
        let _ = container::tile_surface(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::COMMENT_PANEL_WIDTH;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }
}
