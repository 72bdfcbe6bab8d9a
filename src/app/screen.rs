// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Route;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Releases,
    Search,
}

impl Screen {
    /// Navbar link highlighted while this screen is shown.
    #[must_use]
    pub fn route(self) -> Option<Route> {
        match self {
            Screen::Home => Some(Route::Home),
            Screen::Releases => Some(Route::Releases),
            Screen::Search => None,
        }
    }

    /// i18n key of the window title prefix, if any.
    #[must_use]
    pub fn title_key(self) -> Option<&'static str> {
        match self {
            Screen::Home => None,
            Screen::Releases => Some("releases-title"),
            Screen::Search => Some("search-title"),
        }
    }
}
