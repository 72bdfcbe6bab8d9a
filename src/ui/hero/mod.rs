// SPDX-License-Identifier: MPL-2.0
//! Hero carousel shown on the home screen.
//!
//! The carousel cycles through [`slides::SLIDES`] on a timer. Timing and
//! transition math live in [`transition`]; this module owns the artwork and
//! renders whatever [`transition::Frame`] the carousel reports.

pub mod slides;
pub mod transition;

use crate::app::config::HeroTransition;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, responsive, svg, Column, Container, Row, Scrollable, Space, Stack, Text,
};
use iced::{alignment::Vertical, Color, ContentFit, Element, Font, Length};
use slides::{Artwork, Slide};
use std::time::{Duration, Instant};
use transition::{Carousel, Frame};

/// Resolution used to split the track between two visible slides.
const PORTION_SCALE: f32 = 1000.0;

#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    Next,
    Previous,
    GoTo(usize),
    Explore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The call-to-action button was pressed.
    Explore,
}

pub struct State {
    slides: &'static [Slide],
    artwork: Vec<Artwork>,
    carousel: Carousel,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("slides", &self.slides.len())
            .field("carousel", &self.carousel)
            .finish()
    }
}

impl State {
    #[must_use]
    pub fn new(
        slides: &'static [Slide],
        style: HeroTransition,
        interval: Duration,
        transition: Duration,
    ) -> Self {
        Self {
            slides,
            artwork: slides.iter().map(Artwork::load).collect(),
            carousel: Carousel::new(slides.len(), style, interval, transition, Instant::now()),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.carousel.is_animating()
    }

    /// Restarts the auto-advance interval, e.g. when the home screen is shown
    /// again after the timer was torn down.
    pub fn resume(&mut self, now: Instant) {
        self.carousel.go_to(self.carousel.index(), now);
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Tick(now) => {
            state.carousel.tick(now);
            Event::None
        }
        Message::Next => {
            state.carousel.next(Instant::now());
            Event::None
        }
        Message::Previous => {
            state.carousel.previous(Instant::now());
            Event::None
        }
        Message::GoTo(index) => {
            state.carousel.go_to(index, Instant::now());
            Event::None
        }
        Message::Explore => Event::Explore,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext { i18n, state, now } = ctx;
    if state.slides.is_empty() {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    }

    let stage: Element<'a, Message> = match state.carousel.frame(now) {
        Frame::Still { index } => slide_view(i18n, state, index, 1.0),
        Frame::Fade {
            outgoing,
            incoming,
            progress,
        } => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(slide_view(i18n, state, outgoing, 1.0 - progress))
            .push(slide_view(i18n, state, incoming, progress))
            .into(),
        Frame::Slide { offset } => responsive(move |size| {
            slide_track(i18n, state, offset, size.width)
        })
        .into(),
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(stage)
        .push(controls(state))
        .into()
}

/// Splits the visible width between the two track positions around `offset`.
/// Each panel holds a full-width slide inside a scroll-less viewport so the
/// outgoing slide keeps its right edge and the incoming one its left edge.
fn slide_track<'a>(
    i18n: &'a I18n,
    state: &'a State,
    offset: f32,
    width: f32,
) -> Element<'a, Message> {
    let len = state.slides.len();
    let base = offset.floor();
    let frac = offset - base;
    let left = (base as usize) % len;
    let right = (left + 1) % len;

    let left_weight = ((1.0 - frac) * PORTION_SCALE).round() as u16;
    let right_weight = (frac * PORTION_SCALE).round() as u16;

    let panel = |index: usize, weight: u16, keep_right_edge: bool| {
        let slide = Container::new(slide_view(i18n, state, index, 1.0))
            .width(Length::Fixed(width))
            .height(Length::Fill);
        let mut viewport = Scrollable::new(slide)
            .direction(Direction::Horizontal(Scrollbar::hidden()))
            .width(Length::FillPortion(weight))
            .height(Length::Fill);
        if keep_right_edge {
            viewport = viewport.anchor_right();
        }
        viewport
    };

    let mut track = Row::new().width(Length::Fill).height(Length::Fill);
    if left_weight > 0 {
        track = track.push(panel(left, left_weight, right_weight > 0));
    }
    if right_weight > 0 {
        track = track.push(panel(right, right_weight, false));
    }
    track.into()
}

/// One slide: background art, dark scrim and the text block. `alpha` fades
/// the whole slide for the cross-dissolve.
fn slide_view<'a>(
    i18n: &'a I18n,
    state: &'a State,
    index: usize,
    alpha: f32,
) -> Element<'a, Message> {
    let slide = &state.slides[index];
    let art = &state.artwork[index];
    let faded = move |color: Color| Color {
        a: color.a * alpha,
        ..color
    };

    let background: Element<'a, Message> = match &art.background {
        Some(handle) => svg(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &iced::Theme| iced::widget::container::Style {
                background: Some(faded(palette::GRAY_900).into()),
                ..Default::default()
            })
            .into(),
    };

    let scrim = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &iced::Theme| {
            let mut style = styles::container::hero_scrim(theme);
            style.background = Some(
                Color {
                    a: opacity::OVERLAY_MEDIUM * alpha,
                    ..palette::BLACK
                }
                .into(),
            );
            style
        });

    let mut text_block = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::HERO_TEXT_MAX_WIDTH * 1.5);

    if let Some(logo) = &art.logo {
        text_block = text_block.push(
            svg(logo.clone())
                .height(Length::Fixed(sizing::HERO_LOGO_HEIGHT))
                .width(Length::Shrink)
                .opacity(alpha),
        );
    }

    let meta_color = faded(palette::GRAY_300);
    let meta_icon = |icon| icons::tinted(icons::sized(icon, sizing::ICON_SM), meta_color);
    let meta = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(slide.genre_line()).color(meta_color))
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(meta_icon(icons::calendar()))
                .push(Text::new(slide.year.to_string()).color(meta_color)),
        )
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(meta_icon(icons::clock()))
                .push(Text::new(slide.duration).color(meta_color)),
        );

    let explore = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("hero-explore")).size(typography::BODY))
            .push(icons::sized(icons::arrow_right(), sizing::ICON_MD)),
    )
    .on_press(Message::Explore)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    text_block = text_block
        .push(
            Text::new(slide.title)
                .size(typography::DISPLAY)
                .font(Font {
                    weight: iced::font::Weight::Semibold,
                    ..Font::DEFAULT
                })
                .color(faded(palette::WHITE)),
        )
        .push(meta)
        .push(
            Container::new(Text::new(slide.description).color(meta_color))
                .max_width(sizing::HERO_TEXT_MAX_WIDTH),
        )
        .push(explore);

    let content = Container::new(text_block)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XXL, spacing::PAGE_GUTTER * 2.0])
        .align_y(Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background)
        .push(scrim)
        .push(content)
        .into()
}

/// Previous/next arrows and one dot per slide.
fn controls<'a>(state: &'a State) -> Element<'a, Message> {
    let arrow = |icon, message| {
        button(icons::sized(icon, sizing::ICON_LG))
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::icon)
    };

    let dots = state
        .slides
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, _)| {
            row.push(
                button(Space::new())
                    .width(Length::Fixed(sizing::HERO_DOT))
                    .height(Length::Fixed(sizing::HERO_DOT))
                    .padding(0)
                    .on_press(Message::GoTo(index))
                    .style(styles::button::dot(index == state.index())),
            )
        });

    let arrows = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(arrow(icons::chevron_left(), Message::Previous))
        .push(Space::new().width(Length::Fill))
        .push(arrow(icons::chevron_right(), Message::Next));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(arrows)
        .push(
            Container::new(dots)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(spacing::LG),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slides::SLIDES;

    fn state(style: HeroTransition) -> State {
        State::new(
            &SLIDES,
            style,
            Duration::from_secs(5),
            Duration::from_millis(600),
        )
    }

    #[test]
    fn explore_emits_event() {
        let mut state = state(HeroTransition::Fade);
        assert_eq!(update(&mut state, Message::Explore), Event::Explore);
    }

    #[test]
    fn manual_messages_move_the_index() {
        let mut state = state(HeroTransition::Fade);
        update(&mut state, Message::Next);
        assert_eq!(state.index(), 1);
        update(&mut state, Message::Previous);
        assert_eq!(state.index(), 0);
        update(&mut state, Message::Previous);
        assert_eq!(state.index(), SLIDES.len() - 1);
        update(&mut state, Message::GoTo(1));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn tick_message_auto_advances() {
        let mut state = state(HeroTransition::Slide);
        let later = Instant::now() + Duration::from_secs(6);
        update(&mut state, Message::Tick(later));
        assert_eq!(state.index(), 1);
        assert!(state.is_animating());
    }

    #[test]
    fn empty_slide_list_renders_and_never_advances() {
        static NONE: [Slide; 0] = [];
        let mut state = State::new(
            &NONE,
            HeroTransition::Fade,
            Duration::from_secs(2),
            Duration::from_millis(600),
        );
        update(&mut state, Message::Tick(Instant::now() + Duration::from_secs(60)));
        update(&mut state, Message::Next);
        assert_eq!(state.index(), 0);

        let i18n = I18n::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
            now: Instant::now(),
        });
    }

    #[test]
    fn every_frame_kind_renders() {
        let i18n = I18n::default();
        for style in [HeroTransition::Fade, HeroTransition::Slide] {
            let mut state = state(style);
            let now = Instant::now();
            let _ = view(ViewContext {
                i18n: &i18n,
                state: &state,
                now,
            });
            update(&mut state, Message::Previous);
            let _ = view(ViewContext {
                i18n: &i18n,
                state: &state,
                now: Instant::now() + Duration::from_millis(300),
            });
        }
    }
}
