// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct wires together the components (navbar, hero, releases,
//! search), localization, the API client and the artwork cache, and
//! translates component events into network tasks and screen switches.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{PosterCache, TmdbClient};
use crate::i18n::I18n;
use crate::ui::hero::{self, slides::SLIDES};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::releases;
use crate::ui::search;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    navbar: navbar::State,
    hero: hero::State,
    releases: releases::State,
    search: search::State,
    client: TmdbClient,
    image_base_url: String,
    posters: PosterCache,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Whether typing in the navbar searches after a pause.
    live_search: bool,
    search_debounce: Duration,
    window_width: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("hero_index", &self.hero.index())
            .field("posters", &self.posters.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the state for `config` without touching the network.
    fn from_config(config: &Config, i18n: I18n, access_token: Option<String>) -> Self {
        let client = TmdbClient::new(
            config.api_base_url(),
            access_token,
            config.api_language(),
            config.request_timeout(),
        );

        Self {
            i18n,
            screen: Screen::default(),
            navbar: navbar::State::default(),
            hero: hero::State::new(
                &SLIDES,
                config.hero.transition.unwrap_or_default(),
                config.hero_interval(),
                config.hero_transition_duration(),
            ),
            releases: releases::State::default(),
            search: search::State::default(),
            client,
            image_base_url: config.image_base_url().to_string(),
            posters: PosterCache::default(),
            notifications: notifications::Manager::new(),
            theme_mode: config.general.theme_mode,
            live_search: config.search.live.unwrap_or(false),
            search_debounce: config.search_debounce(),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
        }
    }

    /// Initializes application state and optionally starts on the search
    /// page when a query was given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let token = config.resolve_access_token(flags.token);
        let mut app = Self::from_config(&config, i18n, token);
        if !app.client.has_token() {
            tracing::warn!("no API access token configured; listings will stay empty");
        }

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                let mut ctx = app.update_context();
                update::open_search(&mut ctx, query)
            }
            _ => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen.title_key() {
            Some(key) => format!("{} - {app_name}", self.i18n.tr(key)),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let on_home = self.screen == Screen::Home;
        let loading = match self.screen {
            Screen::Home => false,
            Screen::Releases => self.releases.is_loading(),
            Screen::Search => self.search.is_loading(),
        };
        let animating = (on_home && self.hero.is_animating()) || loading;
        let timed = on_home
            || self.notifications.has_notifications()
            || self.navbar.debounce_pending();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating, timed),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            navbar: &mut self.navbar,
            hero: &mut self.hero,
            releases: &mut self.releases,
            search: &mut self.search,
            client: &self.client,
            image_base_url: &self.image_base_url,
            posters: &mut self.posters,
            notifications: &mut self.notifications,
            live_search: self.live_search,
            search_debounce: self.search_debounce,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::WindowResized(size) = &message {
            self.window_width = size.width;
            return Task::none();
        }

        let mut ctx = self.update_context();
        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::Hero(msg) => update::handle_hero_message(&mut ctx, msg),
            Message::Releases(msg) => update::handle_releases_message(&mut ctx, msg),
            Message::Search(msg) => update::handle_search_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(&msg);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::PosterLoaded { url, result } => {
                update::handle_poster_loaded(&mut ctx, url, result)
            }
            Message::WindowResized(_) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            navbar: &self.navbar,
            hero: &self.hero,
            releases: &self.releases,
            search: &self.search,
            image_base_url: &self.image_base_url,
            posters: &self.posters,
            notifications: &self.notifications,
            window_width: self.window_width,
            now: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ApiError, Category, MovieSummary};
    use crate::ui::navbar::Route;

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), None, &Config::default())
    }

    fn app() -> App {
        App::from_config(&Config::default(), english(), None)
    }

    fn movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            backdrop_path: Some(format!("/b{id}.jpg")),
            poster_path: None,
            release_date: None,
            vote_average: Some(6.5),
        }
    }

    #[test]
    fn starts_on_home() {
        let app = app();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.title(), "QuickShow");
    }

    #[test]
    fn navbar_link_opens_releases_and_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.navbar.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Route::Releases)));
        assert_eq!(app.screen, Screen::Releases);
        assert!(!app.navbar.menu_open);
        assert!(app.releases.is_loading());
        assert_eq!(app.releases.tab(), Category::NowPlaying);
        assert_eq!(app.title(), "Latest Releases - QuickShow");
    }

    #[test]
    fn hero_explore_opens_releases() {
        let mut app = app();
        let _ = app.update(Message::Hero(hero::Message::Explore));
        assert_eq!(app.screen, Screen::Releases);
    }

    #[test]
    fn submitted_query_opens_search() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::QueryChanged(
            "  dune ".into(),
        )));
        let _ = app.update(Message::Navbar(navbar::Message::SubmitSearch));
        assert_eq!(app.screen, Screen::Search);
        assert_eq!(app.search.query(), "dune");
        assert!(app.search.is_loading());
        assert!(app.navbar.search_query.is_empty());
    }

    #[test]
    fn blank_query_stays_put() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::QueryChanged("   ".into())));
        let _ = app.update(Message::Navbar(navbar::Message::SubmitSearch));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn live_search_fires_after_debounce() {
        let mut config = Config::default();
        config.search.live = Some(true);
        let mut app = App::from_config(&config, english(), None);

        let _ = app.update(Message::Navbar(navbar::Message::QueryChanged("alien".into())));
        assert!(app.navbar.debounce_pending());

        let later = Instant::now() + app.search_debounce + Duration::from_millis(1);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.screen, Screen::Search);
        assert_eq!(app.search.query(), "alien");
        assert_eq!(app.navbar.search_query, "alien");
    }

    #[test]
    fn failed_fetch_shows_error_toast_and_success_clears_it() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Route::Releases)));
        let _ = app.update(Message::Releases(releases::Message::Loaded {
            request_id: 1,
            result: Err(ApiError::MissingToken),
        }));
        assert!(app.notifications.has_notifications());
        assert!(app.releases.movies().is_empty());

        let _ = app.update(Message::Releases(releases::Message::SelectTab(
            Category::Upcoming,
        )));
        let _ = app.update(Message::Releases(releases::Message::Loaded {
            request_id: 2,
            result: Ok(vec![movie(1)]),
        }));
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.releases.movies().len(), 1);
        // Card image plus the placeholder.
        assert_eq!(app.posters.len(), 2);
    }

    #[test]
    fn browse_releases_from_empty_search() {
        let mut app = app();
        let _ = app.update(Message::Search(search::Message::BrowseReleases));
        assert_eq!(app.screen, Screen::Releases);
    }

    #[test]
    fn resize_updates_width() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(iced::Size::new(500.0, 700.0)));
        assert_eq!(app.window_width, 500.0);
    }

    #[test]
    fn view_renders_every_screen() {
        let mut app = app();
        let _ = app.view();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Route::Releases)));
        let _ = app.view();
        let _ = app.update(Message::Search(search::Message::BrowseReleases));
        let _ = app.update(Message::WindowResized(iced::Size::new(400.0, 700.0)));
        let _ = app.view();
    }
}
