// SPDX-License-Identifier: MPL-2.0
//! Full-page loading indicator shown while a listing request is in flight.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::time::{Duration, Instant};

/// Tracks when the current load started so the spinner angle can be derived
/// from elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    started_at: Option<Instant>,
}

impl State {
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or_default()
    }
}

pub fn view<'a, Message: 'a>(i18n: &I18n, state: &State, now: Instant) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(AnimatedSpinner::at(palette::PRIMARY, state.elapsed(now)).into_element())
        .push(
            Text::new(i18n.tr("loading"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    // Lives inside the page scrollable, so no Fill height here.
    Container::new(content)
        .padding([spacing::XXL * 2.0, 0.0])
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_stop_toggle_loading() {
        let mut state = State::default();
        assert!(!state.is_loading());
        let now = Instant::now();
        state.start(now);
        assert!(state.is_loading());
        assert_eq!(
            state.elapsed(now + Duration::from_millis(250)),
            Duration::from_millis(250)
        );
        state.stop();
        assert!(!state.is_loading());
        assert_eq!(state.elapsed(now), Duration::ZERO);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let mut state = State::default();
        state.start(Instant::now());
        let _: Element<'_, ()> = view(&i18n, &state, Instant::now());
    }
}
