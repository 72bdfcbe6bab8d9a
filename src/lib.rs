// SPDX-License-Identifier: MPL-2.0
//! `quickshow` is a movie browsing frontend built with the Iced GUI framework.
//!
//! It shows a hero carousel of featured titles, the "Now Playing" and
//! "Upcoming" listings of the TMDB API and a free-text movie search, with
//! Fluent localization and a TOML settings file.

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod ui;
