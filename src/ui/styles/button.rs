// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand pill (Explore Movies, Browse Latest Releases, Search).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_DULL,
        button::Status::Active => palette::PRIMARY,
        button::Status::Disabled => palette::GRAY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Tab toggle on the releases page: brand fill when selected, gray otherwise.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if selected {
            (palette::PRIMARY, palette::WHITE)
        } else if matches!(status, button::Status::Hovered | button::Status::Pressed) {
            (palette::GRAY_700, palette::GRAY_300)
        } else {
            (palette::GRAY_800, palette::GRAY_300)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless navbar link; brand colored on hover and when `active`.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY,
            _ if active => palette::PRIMARY,
            _ => theme.palette().text,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round translucent icon button (menu toggle, search toggle, carousel arrows).
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_SUBTLE * 2.0,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: theme.palette().text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Carousel position dot.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::PRIMARY
        } else if matches!(status, button::Status::Hovered) {
            palette::GRAY_300
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Full-width item of the compact navigation menu.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: crate::ui::design_tokens::palette::PRIMARY,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
