// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::ApiError;
use crate::ui::hero;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::releases;
use crate::ui::search;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Releases(releases::Message),
    Search(search::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving the carousel, spinners, toasts and debounce.
    Tick(Instant),
    WindowResized(Size),
    /// A card image download finished.
    PosterLoaded {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `QUICKSHOW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// API access token; takes precedence over `TMDB_API_KEY` and the config.
    pub token: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Start on the search page with this query.
    pub query: Option<String>,
}
