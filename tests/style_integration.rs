// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_snackbar::snackbar::ResourceId;
    use iced_snackbar::ui::design_tokens::{palette, sizing, snackbar, spacing};
    use iced_snackbar::ui::resources;
    use iced_snackbar::ui::styles::button;
    use iced_snackbar::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::anchor(&theme, iced::widget::button::Status::Hovered);
    }

    #[test]
    fn snackbar_tokens_are_readable() {
        assert_ne!(snackbar::SURFACE, snackbar::TEXT);
        assert_eq!(snackbar::TEXT, palette::WHITE);
        assert!(sizing::SNACKBAR_MAX_WIDTH > sizing::DEMO_BUTTON_WIDTH);
        assert!(spacing::XS < spacing::MD);
    }

    #[test]
    fn every_named_background_resolves() {
        for id in [resources::BG_BRAND, resources::BG_ERROR, resources::BG_SUCCESS] {
            assert!(resources::background(&ResourceId::new(id)).is_some(), "{id}");
        }
        assert!(resources::background(&ResourceId::new("unknown")).is_none());
    }

    #[test]
    fn theme_modes_map_to_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }
}
