// SPDX-License-Identifier: MPL-2.0
//! Movie catalog access backed by the TMDB v3 REST API.
//!
//! The catalog is read-only: listings are fetched on demand, rendered as
//! cards and dropped when the user navigates away. Nothing is persisted.
//!
//! # Components
//!
//! - [`client`] - Bearer-authenticated HTTP client for the three listing queries
//! - [`format`] - Presentation helpers (release dates, ratings, badges, image URLs)
//! - [`posters`] - Bounded cache of downloaded card images

pub mod client;
pub mod format;
pub mod posters;

pub use client::{parse_listing, TmdbClient};
pub use posters::{PosterCache, PosterState};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One movie as returned by the listing and search endpoints.
///
/// The shape is imposed by the remote API; only the fields the cards need
/// are kept and everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// Page envelope shared by all listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

/// Fixed listing categories shown on the releases page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Category {
    #[default]
    NowPlaying,
    Upcoming,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::NowPlaying, Category::Upcoming];

    /// Path segment under `/movie/` for this category.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Category::NowPlaying => "now_playing",
            Category::Upcoming => "upcoming",
        }
    }

    /// i18n key of the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Category::NowPlaying => "releases-tab-now-playing",
            Category::Upcoming => "releases-tab-upcoming",
        }
    }

    /// i18n key of the badge shown on every card of this category.
    #[must_use]
    pub fn badge_key(self) -> &'static str {
        match self {
            Category::NowPlaying => "badge-in-theaters",
            Category::Upcoming => "badge-coming-soon",
        }
    }
}

/// Failures while talking to the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No access token was configured.
    MissingToken,
    /// Connection, TLS or timeout failure.
    Transport(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The body could not be decoded.
    Decode(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::MissingToken => "error-api-missing-token",
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Status(_) => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingToken => write!(f, "no API access token configured"),
            ApiError::Transport(msg) => write!(f, "transport failure: {}", msg),
            ApiError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            ApiError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Accepts `"YYYY-MM-DD"`, `""` and `null`; anything unparsable becomes `None`.
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}
