// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let icon = icons::tinted(
            icons::sized(Self::severity_icon(severity), sizing::ICON_MD),
            accent_color,
        );

        let dismiss_button = button(icons::sized(icons::x(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Stacks visible toasts in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }

    fn severity_icon(severity: Severity) -> Svg<'static> {
        match severity {
            Severity::Info => icons::info(),
            Severity::Warning | Severity::Error => icons::warning(),
        }
    }
}

fn toast_container_style(_theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            color: accent_color,
            width: 1.5,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::WARNING_500);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager, &i18n);

        manager.push(Notification::warning("notification-config-load-error"));
        let _ = Toast::view_overlay(&manager, &i18n);
    }
}
