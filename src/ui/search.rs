// SPDX-License-Identifier: MPL-2.0
//! Search results page.
//!
//! Shows the results for a single free-text query. A blank query never hits
//! the network and renders the empty state right away.

use crate::catalog::format::Availability;
use crate::catalog::{ApiError, MovieSummary};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::empty_state::EmptyState;
use crate::ui::icons;
use crate::ui::loading;
use crate::ui::movie_grid::{self, GridContext};
use chrono::NaiveDate;
use iced::widget::{Column, Text};
use iced::{Element, Font};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
    results: Vec<MovieSummary>,
    loading: loading::State,
    request_id: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        request_id: u64,
        result: Result<Vec<MovieSummary>, ApiError>,
    },
    BrowseReleases,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Fetch { query: String, request_id: u64 },
    Loaded,
    Failed(ApiError),
    /// "Browse Latest Releases" was pressed.
    BrowseReleases,
}

impl State {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Shows results for `query`. Any request still in flight is superseded.
    pub fn open(&mut self, query: &str) -> Event {
        self.query = query.trim().to_string();
        self.results.clear();
        self.request_id += 1;

        if self.query.is_empty() {
            self.loading.stop();
            return Event::None;
        }

        self.loading.start(Instant::now());
        Event::Fetch {
            query: self.query.clone(),
            request_id: self.request_id,
        }
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Loaded { request_id, result } => {
            if request_id != state.request_id {
                tracing::debug!(request_id, current = state.request_id, "dropping stale search");
                return Event::None;
            }
            state.loading.stop();
            match result {
                Ok(results) => {
                    state.results = results;
                    Event::Loaded
                }
                Err(error) => {
                    state.results.clear();
                    Event::Failed(error)
                }
            }
        }
        Message::BrowseReleases => Event::BrowseReleases,
    }
}

pub fn view<'a>(
    state: &'a State,
    grid: GridContext<'a>,
    today: NaiveDate,
    now: Instant,
) -> Element<'a, Message> {
    let i18n = grid.i18n;

    if state.is_loading() {
        return loading::view(i18n, &state.loading, now);
    }

    let mut header = Column::new().spacing(spacing::XS).push(
        Text::new(i18n.tr("search-title"))
            .size(typography::TITLE_LG)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            }),
    );
    if !state.query.is_empty() {
        header = header.push(
            Text::new(i18n.tr_with_args("search-showing-results", &[("query", &state.query)]))
                .color(palette::GRAY_400),
        );
    }

    let mut page = Column::new().spacing(spacing::XL).push(header);

    if state.results.is_empty() {
        page = page.push(
            EmptyState::new(
                i18n.tr("search-empty-title"),
                i18n.tr_with_args("search-empty-message", &[("query", &state.query)]),
            )
            .icon(icons::search_x())
            .action(i18n.tr("search-browse-releases"), Message::BrowseReleases)
            .view(),
        );
    } else {
        let count = state.results.len().to_string();
        page = page
            .push(
                Text::new(i18n.tr_with_args("search-found", &[("count", &count)]))
                    .size(typography::TITLE_SM),
            )
            .push(movie_grid::view(grid, &state.results, move |movie| {
                Availability::of(movie.release_date, today).badge_key()
            }));
    }

    page.into()
}
