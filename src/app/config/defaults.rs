// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Remote catalog endpoints and request timeout
//! - **Hero**: Carousel auto-advance and transition timing
//! - **Search**: Live search debounce bounds

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the TMDB v3 REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Prefix prepended to backdrop/poster paths.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

/// Language requested from the API.
pub const DEFAULT_API_LANGUAGE: &str = "en-US";

/// Per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 15;

/// Minimum request timeout.
pub const MIN_REQUEST_TIMEOUT_SECS: u32 = 1;

/// Maximum request timeout.
pub const MAX_REQUEST_TIMEOUT_SECS: u32 = 120;

// ==========================================================================
// Hero Carousel Defaults
// ==========================================================================

/// Seconds each slide stays on screen before auto-advancing.
pub const DEFAULT_HERO_INTERVAL_SECS: u32 = 5;

/// Minimum auto-advance interval.
pub const MIN_HERO_INTERVAL_SECS: u32 = 2;

/// Maximum auto-advance interval.
pub const MAX_HERO_INTERVAL_SECS: u32 = 30;

/// Duration of one slide transition in milliseconds.
pub const DEFAULT_HERO_TRANSITION_MS: u32 = 600;

/// Shortest transition (effectively a cut).
pub const MIN_HERO_TRANSITION_MS: u32 = 0;

/// Longest transition.
pub const MAX_HERO_TRANSITION_MS: u32 = 1_500;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Idle time before a live search fires.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 400;

/// Minimum debounce delay.
pub const MIN_SEARCH_DEBOUNCE_MS: u32 = 100;

/// Maximum debounce delay.
pub const MAX_SEARCH_DEBOUNCE_MS: u32 = 2_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_HERO_INTERVAL_SECS <= DEFAULT_HERO_INTERVAL_SECS);
    assert!(DEFAULT_HERO_INTERVAL_SECS <= MAX_HERO_INTERVAL_SECS);
    // A transition must finish before the next auto-advance
    assert!(MAX_HERO_TRANSITION_MS < MIN_HERO_INTERVAL_SECS * 1_000);
    assert!(MIN_SEARCH_DEBOUNCE_MS <= DEFAULT_SEARCH_DEBOUNCE_MS);
    assert!(DEFAULT_SEARCH_DEBOUNCE_MS <= MAX_SEARCH_DEBOUNCE_MS);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
};
