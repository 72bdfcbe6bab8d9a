// SPDX-License-Identifier: MPL-2.0
//! Releases page: "Now Playing" and "Upcoming" tabs over the two fixed
//! listing categories.
//!
//! The page does not perform I/O itself. Opening it or switching tabs
//! returns [`Event::Fetch`] with a fresh request id; the application runs
//! the request and feeds the outcome back through [`Message::Loaded`].
//! Outcomes carrying an older id are dropped, so a slow response for a tab
//! the user already left never overwrites the current one.

use crate::catalog::{ApiError, Category, MovieSummary};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::empty_state::EmptyState;
use crate::ui::loading;
use crate::ui::movie_grid::{self, GridContext};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Font};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct State {
    tab: Category,
    movies: Vec<MovieSummary>,
    loading: loading::State,
    request_id: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Category),
    Loaded {
        request_id: u64,
        result: Result<Vec<MovieSummary>, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Run the listing request for `category`.
    Fetch { category: Category, request_id: u64 },
    /// The current request succeeded; artwork may need downloading.
    Loaded,
    /// The current request failed; the page shows its empty state.
    Failed(ApiError),
}

impl State {
    #[must_use]
    pub fn tab(&self) -> Category {
        self.tab
    }

    #[must_use]
    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Called whenever the page is navigated to: back to the default tab and
    /// a fresh fetch.
    pub fn open(&mut self) -> Event {
        self.begin_fetch(Category::default())
    }

    fn begin_fetch(&mut self, category: Category) -> Event {
        self.tab = category;
        self.movies.clear();
        self.loading.start(Instant::now());
        self.request_id += 1;
        Event::Fetch {
            category,
            request_id: self.request_id,
        }
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectTab(category) => {
            if category == state.tab {
                return Event::None;
            }
            state.begin_fetch(category)
        }
        Message::Loaded { request_id, result } => {
            if request_id != state.request_id {
                tracing::debug!(request_id, current = state.request_id, "dropping stale listing");
                return Event::None;
            }
            state.loading.stop();
            match result {
                Ok(movies) => {
                    state.movies = movies;
                    Event::Loaded
                }
                Err(error) => {
                    state.movies.clear();
                    Event::Failed(error)
                }
            }
        }
    }
}

pub fn view<'a>(state: &'a State, grid: GridContext<'a>, now: Instant) -> Element<'a, Message> {
    let i18n: &I18n = grid.i18n;

    if state.is_loading() {
        return loading::view(i18n, &state.loading, now);
    }

    let tabs = Category::ALL
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, &category| {
            row.push(
                button(Text::new(i18n.tr(category.label_key())).size(typography::BODY))
                    .on_press(Message::SelectTab(category))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::tab(category == state.tab)),
            )
        });

    let header = Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(i18n.tr("releases-title"))
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(tabs);

    let body: Element<'a, Message> = if state.movies.is_empty() {
        EmptyState::new(i18n.tr("empty-no-movies"), i18n.tr("empty-unable-to-fetch")).view()
    } else {
        let badge = state.tab.badge_key();
        movie_grid::view(grid, &state.movies, move |_| badge)
    };

    Column::new()
        .spacing(spacing::XL)
        .push(header)
        .push(body)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PosterCache;

    fn movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            backdrop_path: None,
            poster_path: Some(format!("/{id}.jpg")),
            release_date: None,
            vote_average: Some(7.4),
        }
    }

    fn fetch_id(event: &Event) -> u64 {
        match event {
            Event::Fetch { request_id, .. } => *request_id,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn opening_fetches_now_playing() {
        let mut state = State::default();
        let event = state.open();
        assert!(matches!(
            event,
            Event::Fetch {
                category: Category::NowPlaying,
                ..
            }
        ));
        assert!(state.is_loading());
    }

    #[test]
    fn switching_tab_issues_exactly_one_fetch() {
        let mut state = State::default();
        state.open();
        let event = update(&mut state, Message::SelectTab(Category::Upcoming));
        assert!(matches!(
            event,
            Event::Fetch {
                category: Category::Upcoming,
                ..
            }
        ));
        assert_eq!(
            update(&mut state, Message::SelectTab(Category::Upcoming)),
            Event::None
        );
        assert_eq!(state.tab(), Category::Upcoming);
    }

    #[test]
    fn loaded_results_replace_movies() {
        let mut state = State::default();
        let id = fetch_id(&state.open());
        let event = update(
            &mut state,
            Message::Loaded {
                request_id: id,
                result: Ok(vec![movie(1), movie(2)]),
            },
        );
        assert_eq!(event, Event::Loaded);
        assert!(!state.is_loading());
        assert_eq!(state.movies().len(), 2);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = State::default();
        let first = fetch_id(&state.open());
        let second = fetch_id(&update(&mut state, Message::SelectTab(Category::Upcoming)));

        let event = update(
            &mut state,
            Message::Loaded {
                request_id: first,
                result: Ok(vec![movie(1)]),
            },
        );
        assert_eq!(event, Event::None);
        assert!(state.is_loading());
        assert!(state.movies().is_empty());

        update(
            &mut state,
            Message::Loaded {
                request_id: second,
                result: Ok(vec![movie(2)]),
            },
        );
        assert_eq!(state.movies()[0].id, 2);
    }

    #[test]
    fn failure_yields_empty_list() {
        let mut state = State::default();
        let id = fetch_id(&state.open());
        let event = update(
            &mut state,
            Message::Loaded {
                request_id: id,
                result: Err(ApiError::Status(500)),
            },
        );
        assert_eq!(event, Event::Failed(ApiError::Status(500)));
        assert!(state.movies().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn view_renders_every_state() {
        let i18n = I18n::default();
        let posters = PosterCache::default();
        let grid = GridContext {
            i18n: &i18n,
            image_base_url: "https://img.test",
            posters: &posters,
        };

        let mut state = State::default();
        let id = fetch_id(&state.open());
        let _ = view(&state, grid, Instant::now());

        update(
            &mut state,
            Message::Loaded {
                request_id: id,
                result: Ok(Vec::new()),
            },
        );
        let _ = view(&state, grid, Instant::now());

        state.movies = vec![movie(3)];
        let _ = view(&state, grid, Instant::now());
    }
}
