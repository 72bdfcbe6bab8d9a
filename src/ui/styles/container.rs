// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent bar behind the navbar.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_NAVBAR,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Pill surrounding the inline links and the search input.
pub fn pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::FULL.into(),
            width: 1.0,
            color: Color {
                a: 0.2,
                ..palette::WHITE
            },
        },
        ..Default::default()
    }
}

/// Dropdown panel under the compact navbar (menu and search).
pub fn dropdown(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_DROPDOWN,
            ..palette::BLACK
        })),
        border: Border {
            width: 1.0,
            color: palette::GRAY_700,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Movie card surface.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small rounded badge (In Theaters, Coming Soon, Available).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Stand-in for artwork that could not be loaded.
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark scrim over hero backgrounds so text stays readable.
pub fn hero_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Soft brand glow drawn in page corners.
pub fn blur_circle(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette::PRIMARY
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
