// SPDX-License-Identifier: MPL-2.0
//! Centered message shown when a page has no movies to display.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Font, Length, Padding};

/// Content of an empty state. Texts are already translated.
pub struct EmptyState<Message> {
    icon: Option<Svg<'static>>,
    title: String,
    message: String,
    /// Label of the call to action and the message it sends.
    action: Option<(String, Message)>,
}

impl<Message: Clone> EmptyState<Message> {
    pub fn new(title: String, message: String) -> Self {
        Self {
            icon: None,
            title,
            message,
            action: None,
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: Svg<'static>) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn action(mut self, label: String, message: Message) -> Self {
        self.action = Some((label, message));
        self
    }

    pub fn view<'a>(self) -> Element<'a, Message>
    where
        Message: 'static,
    {
        let mut column = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .max_width(sizing::HERO_TEXT_MAX_WIDTH);

        if let Some(icon) = self.icon {
            column = column.push(
                Container::new(icons::tinted(
                    icons::sized(icon, sizing::ICON_XXL),
                    palette::GRAY_600,
                ))
                .padding(Padding {
                    bottom: spacing::MD,
                    ..Padding::ZERO
                }),
            );
        }

        column = column
            .push(Text::new(self.title).size(typography::TITLE_MD).font(Font {
                weight: iced::font::Weight::Semibold,
                ..Font::DEFAULT
            }))
            .push(
                Text::new(self.message)
                    .color(palette::GRAY_400)
                    .align_x(Horizontal::Center),
            );

        if let Some((label, message)) = self.action {
            column = column.push(
                Container::new(
                    button(Text::new(label).size(typography::BODY))
                        .on_press(message)
                        .padding([spacing::SM, spacing::XL])
                        .style(styles::button::primary),
                )
                .padding(Padding {
                    top: spacing::LG,
                    ..Padding::ZERO
                }),
            );
        }

        Container::new(column)
            .padding([spacing::XXL * 1.5, 0.0])
            .center_x(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Browse,
    }

    #[test]
    fn renders_with_and_without_action() {
        let _ = EmptyState::<Message>::new("No movies found".into(), "Nothing".into()).view();

        let state = EmptyState::new("No movies found".into(), "Nothing".into())
            .icon(icons::search_x())
            .action("Browse".into(), Message::Browse);
        assert_eq!(state.action.as_ref().map(|(_, m)| m), Some(&Message::Browse));
        let _ = state.view();
    }
}
