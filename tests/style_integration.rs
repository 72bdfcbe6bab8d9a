// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use quickshow::ui::design_tokens::{opacity, palette, sizing, spacing};
    use quickshow::ui::styles::{button, container};
    use quickshow::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, Status::Active);
        let _ = button::tab(true)(&theme, Status::Hovered);
        let _ = button::nav_link(false)(&theme, Status::Active);
        let _ = button::icon(&theme, Status::Pressed);
        let _ = button::dot(true)(&theme, Status::Active);
        let _ = button::menu_item(&theme, Status::Hovered);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Dark;

        let _ = container::navbar(&theme);
        let _ = container::pill(&theme);
        let _ = container::dropdown(&theme);
        let _ = container::card(&theme);
        let _ = container::badge(&theme);
        let _ = container::image_placeholder(&theme);
        let _ = container::hero_scrim(&theme);
        let _ = container::blur_circle(&theme);
    }

    #[test]
    fn design_tokens_are_ordered() {
        assert!(spacing::XS < spacing::MD && spacing::MD < spacing::XL);
        assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_STRONG);
        assert!(sizing::COMPACT_BREAKPOINT > sizing::SEARCH_INPUT_WIDTH);
        assert_ne!(palette::PRIMARY, palette::PRIMARY_DULL);
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }
}
