// SPDX-License-Identifier: MPL-2.0
//! Presentation helpers shared by the movie cards.

use super::MovieSummary;
use chrono::NaiveDate;

/// Image shown when a card has no artwork or its artwork fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/500x300?text=No+Image";

/// Whether a search result is already released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    ComingSoon,
    Available,
}

impl Availability {
    /// Computes availability against `today`. Undated movies count as available.
    #[must_use]
    pub fn of(release_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match release_date {
            Some(date) if date > today => Availability::ComingSoon,
            _ => Availability::Available,
        }
    }

    #[must_use]
    pub fn badge_key(self) -> &'static str {
        match self {
            Availability::ComingSoon => "badge-coming-soon",
            Availability::Available => "badge-available",
        }
    }
}

/// Formats a release date as `Mar 5, 2025`.
#[must_use]
pub fn release_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%b %-d, %Y").to_string())
}

/// Formats the average vote with one decimal. Zero means "no votes yet".
#[must_use]
pub fn rating(vote_average: Option<f64>) -> Option<String> {
    vote_average
        .filter(|v| v.is_finite() && *v != 0.0)
        .map(|v| format!("{v:.1}"))
}

/// Picks the artwork for a card: backdrop first, then poster.
#[must_use]
pub fn card_image_url(image_base_url: &str, movie: &MovieSummary) -> Option<String> {
    non_empty(&movie.backdrop_path)
        .or_else(|| non_empty(&movie.poster_path))
        .map(|path| format!("{}{}", image_base_url.trim_end_matches('/'), path))
}

fn non_empty(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| !p.is_empty())
}

/// Like [`card_image_url`] but falls back to the placeholder image.
#[must_use]
pub fn card_image_or_placeholder(image_base_url: &str, movie: &MovieSummary) -> String {
    card_image_url(image_base_url, movie).unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string())
}

/// Today's date in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
