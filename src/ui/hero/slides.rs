// SPDX-License-Identifier: MPL-2.0
//! Promotional slides shown on the home screen.

use iced::widget::svg::Handle;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/hero/"]
struct HeroArt;

/// One promotional entry. Artwork names refer to files under `assets/hero/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    /// May contain a line break.
    pub title: &'static str,
    pub genres: &'static [&'static str],
    pub year: u16,
    pub duration: &'static str,
    pub description: &'static str,
    pub background: &'static str,
    pub logo: &'static str,
}

impl Slide {
    /// Genres joined the way the hero displays them (`Action | Thriller`).
    #[must_use]
    pub fn genre_line(&self) -> String {
        self.genres.join(" | ")
    }
}

pub static SLIDES: [Slide; 3] = [
    Slide {
        id: "og",
        title: "Original\nGangster",
        genres: &["Action", "Thriller", "Sci-Fi"],
        year: 2025,
        duration: "2h 34m",
        description: "Pawan Kalyan stars as Ojas Gambheera (OG), a young man who rises in the criminal underworld of 1970s Bombay.",
        background: "og-background.svg",
        logo: "og-logo.svg",
    },
    Slide {
        id: "dune-part-two",
        title: "Dune:\nPart Two",
        genres: &["Sci-Fi", "Adventure", "Drama"],
        year: 2024,
        duration: "2h 46m",
        description: "Paul Atreides unites with Chani and the Fremen while on a warpath of revenge against the conspirators who destroyed his family.",
        background: "dune-background.svg",
        logo: "dune-logo.svg",
    },
    Slide {
        id: "oppenheimer",
        title: "Oppenheimer",
        genres: &["Biography", "Drama", "History"],
        year: 2023,
        duration: "3h 0m",
        description: "The story of J. Robert Oppenheimer and his role in the development of the atomic bomb during World War II.",
        background: "oppenheimer-background.svg",
        logo: "oppenheimer-logo.svg",
    },
];

/// Decoded artwork handles for one slide. Missing files stay `None`.
#[derive(Debug, Clone)]
pub struct Artwork {
    pub background: Option<Handle>,
    pub logo: Option<Handle>,
}

impl Artwork {
    #[must_use]
    pub fn load(slide: &Slide) -> Self {
        Self {
            background: load_handle(slide.background),
            logo: load_handle(slide.logo),
        }
    }
}

fn load_handle(name: &str) -> Option<Handle> {
    match HeroArt::get(name) {
        Some(file) => Some(Handle::from_memory(file.data.into_owned())),
        None => {
            tracing::warn!(name, "hero artwork not found");
            None
        }
    }
}
