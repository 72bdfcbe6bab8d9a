// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what they need as events; the handlers here turn those
//! into screen switches and network tasks.

use super::{Message, Screen};
use crate::catalog::{ApiError, Category, MovieSummary, PosterCache, TmdbClient};
use crate::ui::hero;
use crate::ui::movie_grid;
use crate::ui::navbar::{self, Event as NavbarEvent, Route};
use crate::ui::notifications::{self, Notification};
use crate::ui::releases::{self, Event as ReleasesEvent};
use crate::ui::search::{self, Event as SearchEvent};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::{Duration, Instant};

/// Id of the scrollable wrapping the Releases and Search pages.
pub const PAGE_SCROLL_ID: &str = "page-scroll";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub navbar: &'a mut navbar::State,
    pub hero: &'a mut hero::State,
    pub releases: &'a mut releases::State,
    pub search: &'a mut search::State,
    pub client: &'a TmdbClient,
    pub image_base_url: &'a str,
    pub posters: &'a mut PosterCache,
    pub notifications: &'a mut notifications::Manager,
    pub live_search: bool,
    pub search_debounce: Duration,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(ctx.navbar, message, ctx.live_search) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(route) => navigate(ctx, route),
        NavbarEvent::Search(query) => open_search(ctx, &query),
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match hero::update(ctx.hero, message) {
        hero::Event::None => Task::none(),
        hero::Event::Explore => navigate(ctx, Route::Releases),
    }
}

pub fn handle_releases_message(
    ctx: &mut UpdateContext<'_>,
    message: releases::Message,
) -> Task<Message> {
    let event = releases::update(ctx.releases, message);
    handle_releases_event(ctx, event)
}

pub fn handle_search_message(ctx: &mut UpdateContext<'_>, message: search::Message) -> Task<Message> {
    let event = search::update(ctx.search, message);
    handle_search_event(ctx, event)
}

/// Advances every timer-driven piece of state.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);

    let mut tasks = Vec::new();
    if *ctx.screen == Screen::Home {
        tasks.push(handle_hero_message(ctx, hero::Message::Tick(now)));
    }

    if let Some(query) = ctx.navbar.poll_debounce(now, ctx.search_debounce) {
        let already_shown = *ctx.screen == Screen::Search && ctx.search.query() == query;
        if !already_shown {
            tasks.push(open_search(ctx, &query));
        }
    }

    Task::batch(tasks)
}

pub fn handle_poster_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>, ApiError>,
) -> Task<Message> {
    ctx.posters.complete(url, result);
    Task::none()
}

/// Switches to the page behind `route`, fetching its data, and scrolls to
/// the top.
pub fn navigate(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    ctx.navbar.menu_open = false;

    let task = match route {
        Route::Home => {
            *ctx.screen = Screen::Home;
            ctx.hero.resume(Instant::now());
            Task::none()
        }
        Route::Releases => {
            *ctx.screen = Screen::Releases;
            let event = ctx.releases.open();
            handle_releases_event(ctx, event)
        }
    };

    Task::batch([task, scroll_to_top()])
}

/// Shows the search page for `query`.
pub fn open_search(ctx: &mut UpdateContext<'_>, query: &str) -> Task<Message> {
    *ctx.screen = Screen::Search;
    let event = ctx.search.open(query);
    Task::batch([handle_search_event(ctx, event), scroll_to_top()])
}

fn handle_releases_event(ctx: &mut UpdateContext<'_>, event: ReleasesEvent) -> Task<Message> {
    match event {
        ReleasesEvent::None => Task::none(),
        ReleasesEvent::Fetch {
            category,
            request_id,
        } => fetch_releases(ctx.client, category, request_id),
        ReleasesEvent::Loaded => {
            ctx.notifications.clear_api_errors();
            load_posters(ctx.client, ctx.image_base_url, ctx.posters, ctx.releases.movies())
        }
        ReleasesEvent::Failed(error) => {
            report_api_error(ctx.notifications, &error);
            Task::none()
        }
    }
}

fn handle_search_event(ctx: &mut UpdateContext<'_>, event: SearchEvent) -> Task<Message> {
    match event {
        SearchEvent::None => Task::none(),
        SearchEvent::Fetch { query, request_id } => search_movies(ctx.client, query, request_id),
        SearchEvent::Loaded => {
            ctx.notifications.clear_api_errors();
            load_posters(ctx.client, ctx.image_base_url, ctx.posters, ctx.search.results())
        }
        SearchEvent::Failed(error) => {
            report_api_error(ctx.notifications, &error);
            Task::none()
        }
        SearchEvent::BrowseReleases => navigate(ctx, Route::Releases),
    }
}

fn fetch_releases(client: &TmdbClient, category: Category, request_id: u64) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.fetch_category(category).await },
        move |result| Message::Releases(releases::Message::Loaded { request_id, result }),
    )
}

fn search_movies(client: &TmdbClient, query: String, request_id: u64) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.search(&query).await },
        move |result| Message::Search(search::Message::Loaded { request_id, result }),
    )
}

/// Starts one download per card image not seen before.
fn load_posters(
    client: &TmdbClient,
    image_base_url: &str,
    posters: &mut PosterCache,
    movies: &[MovieSummary],
) -> Task<Message> {
    let pending = posters.request(movie_grid::image_urls(image_base_url, movies));
    tracing::debug!(count = pending.len(), "downloading card images");

    Task::batch(pending.into_iter().map(|url| {
        let client = client.clone();
        let target = url.clone();
        Task::perform(
            async move { client.fetch_image(&url).await },
            move |result| Message::PosterLoaded {
                url: target,
                result,
            },
        )
    }))
}

fn report_api_error(notifications: &mut notifications::Manager, error: &ApiError) {
    tracing::error!(%error, "movie request failed");
    let notification = Notification::error(error.i18n_key());
    let notification = match error {
        ApiError::Status(code) => notification.with_arg("status", code.to_string()),
        _ => notification,
    };
    notifications.push(notification);
}

fn scroll_to_top() -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset::START)
}
