// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the application's design tokens in one place.

## Organization

- **Palette**: Base colors (brand red, neutral grays, semantic colors)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes and layout breakpoints
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use quickshow::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.067, 0.078);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);

    // Brand colors (red scale)
    pub const PRIMARY: Color = Color::from_rgb(0.973, 0.271, 0.396);
    pub const PRIMARY_DULL: Color = Color::from_rgb(0.839, 0.153, 0.290);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_NAVBAR: f32 = 0.25;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_DROPDOWN: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    /// Horizontal page gutter on wide windows.
    pub const PAGE_GUTTER: f32 = 64.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 80.0;

    // Navbar
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const LOGO_WIDTH: f32 = 128.0;
    pub const SEARCH_INPUT_WIDTH: f32 = 256.0;

    /// Windows narrower than this use the compact (hamburger) navbar.
    pub const COMPACT_BREAKPOINT: f32 = 768.0;

    // Movie cards
    pub const CARD_WIDTH: f32 = 264.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 208.0;

    // Hero
    pub const HERO_LOGO_HEIGHT: f32 = 88.0;
    pub const HERO_TEXT_MAX_WIDTH: f32 = 448.0;
    pub const HERO_DOT: f32 = 10.0;

    // Notifications
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Diameter of the decorative glow behind the listing pages.
    pub const BLUR_CIRCLE: f32 = 232.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero slide title
    pub const DISPLAY: f32 = 56.0;

    /// Page headings (Latest Releases, Search Results)
    pub const TITLE_LG: f32 = 30.0;

    /// Empty state headings
    pub const TITLE_MD: f32 = 24.0;

    /// Result count line
    pub const TITLE_SM: f32 = 18.0;

    /// Card titles and navbar links
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::COMPACT_BREAKPOINT > sizing::CARD_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};
