// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! page owns a `State`, reacts to its own `Message` in `update`, and reports
//! anything the application must act on (navigation, network requests) as an
//! `Event`.
//!
//! # Pages
//!
//! - [`hero`] - Home page carousel of featured titles
//! - [`releases`] - Now Playing / Upcoming listings
//! - [`search`] - Results for a free-text query
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Fixed navigation bar with search input
//! - [`movie_grid`] - Movie cards in a wrapping grid
//! - [`loading`] and [`empty_state`] - Placeholder content
//! - [`notifications`] - Toast notifications for errors
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icons

pub mod design_tokens;
pub mod empty_state;
pub mod hero;
pub mod icons;
pub mod loading;
pub mod movie_grid;
pub mod navbar;
pub mod notifications;
pub mod releases;
pub mod search;
pub mod styles;
pub mod theming;
pub mod widgets;
