// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small inline SVG documents drawn with a white stroke. Handles are
//! created once on first access and cached using `OnceLock`; callers recolor
//! them through [`tinted`] when white is not wanted.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let toggle = button(icons::sized(icons::menu(), sizing::ICON_MD));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `x` not `close_menu`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function backed by a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation
// =============================================================================

define_icon!(
    menu,
    r#"<line x1="4" y1="6" x2="20" y2="6"/><line x1="4" y1="12" x2="20" y2="12"/><line x1="4" y1="18" x2="20" y2="18"/>"#,
    "Menu icon: three horizontal bars."
);
define_icon!(
    x,
    r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
    "X icon: two crossed strokes."
);
define_icon!(
    search,
    r#"<circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#,
    "Search icon: magnifying glass."
);
define_icon!(
    search_x,
    r#"<circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/><line x1="13.5" y1="8.5" x2="8.5" y2="13.5"/><line x1="8.5" y1="8.5" x2="13.5" y2="13.5"/>"#,
    "Search icon with a cross inside the lens."
);
define_icon!(
    arrow_right,
    r#"<line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/>"#,
    "Arrow pointing right."
);
define_icon!(
    chevron_left,
    r#"<polyline points="15 18 9 12 15 6"/>"#,
    "Chevron pointing left."
);
define_icon!(
    chevron_right,
    r#"<polyline points="9 18 15 12 9 6"/>"#,
    "Chevron pointing right."
);

// =============================================================================
// Movie Metadata
// =============================================================================

define_icon!(
    calendar,
    r#"<rect x="3" y="4" width="18" height="18" rx="2"/><line x1="16" y1="2" x2="16" y2="6"/><line x1="8" y1="2" x2="8" y2="6"/><line x1="3" y1="10" x2="21" y2="10"/>"#,
    "Calendar icon: page with binding rings."
);
define_icon!(
    clock,
    r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
    "Clock icon: dial with two hands."
);
define_icon!(
    star,
    r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
    "Star icon: five-pointed outline."
);
define_icon!(
    film,
    r#"<rect x="2" y="2" width="20" height="20" rx="2.18"/><line x1="7" y1="2" x2="7" y2="22"/><line x1="17" y1="2" x2="17" y2="22"/><line x1="2" y1="12" x2="22" y2="12"/>"#,
    "Film strip icon."
);

// =============================================================================
// Notifications
// =============================================================================

define_icon!(
    warning,
    r#"<path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#,
    "Warning icon: triangle with exclamation mark."
);
define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/>"#,
    "Info icon: circled i."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with a fixed square size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
