// SPDX-License-Identifier: MPL-2.0
//! Movie cards laid out in a wrapping grid.
//!
//! Cards are read-only: artwork, title, release date, a badge and the
//! rating. Artwork comes from the shared [`PosterCache`]; while a download is
//! pending or after it failed the card falls back to the placeholder image,
//! and to a plain "No Image" block if that one is unavailable too.

use crate::catalog::format::{self, PLACEHOLDER_IMAGE_URL};
use crate::catalog::{MovieSummary, PosterCache, PosterState};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::text::Wrapping;
use iced::widget::{image, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, ContentFit, Element, Font, Length};

/// Everything a card needs besides the movie itself.
#[derive(Clone, Copy)]
pub struct GridContext<'a> {
    pub i18n: &'a I18n,
    pub image_base_url: &'a str,
    pub posters: &'a PosterCache,
}

/// Image URLs to download for `movies`, including the placeholder.
pub fn image_urls<'m>(
    image_base_url: &'m str,
    movies: &'m [MovieSummary],
) -> impl Iterator<Item = String> + 'm {
    movies
        .iter()
        .map(move |movie| format::card_image_or_placeholder(image_base_url, movie))
        .chain(std::iter::once(PLACEHOLDER_IMAGE_URL.to_string()))
}

/// Renders one card per movie. `badge_key` gives the i18n key of each badge.
pub fn view<'a, Message: 'a>(
    ctx: GridContext<'a>,
    movies: &'a [MovieSummary],
    badge_key: impl Fn(&MovieSummary) -> &'static str,
) -> Element<'a, Message> {
    let cards = movies
        .iter()
        .map(|movie| card(ctx, movie, badge_key(movie)));

    Row::with_children(cards)
        .spacing(spacing::XL)
        .wrap()
        .vertical_spacing(spacing::XL)
        .into()
}

fn card<'a, Message: 'a>(
    ctx: GridContext<'a>,
    movie: &'a MovieSummary,
    badge_key: &'static str,
) -> Element<'a, Message> {
    let release = format::release_date(movie.release_date)
        .unwrap_or_else(|| ctx.i18n.tr("release-date-tba"));
    let rating = format::rating(movie.vote_average).unwrap_or_else(|| ctx.i18n.tr("rating-na"));

    let title = Container::new(
        Text::new(movie.title.as_str())
            .size(typography::BODY_LG)
            .wrapping(Wrapping::None)
            .font(Font {
                weight: iced::font::Weight::Semibold,
                ..Font::DEFAULT
            }),
    )
    .width(Length::Fill)
    .clip(true);

    let badge = Container::new(Text::new(ctx.i18n.tr(badge_key)).size(typography::CAPTION))
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::badge);

    let rating_row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::star(), sizing::ICON_SM),
            palette::PRIMARY,
        ))
        .push(Text::new(rating).size(typography::BODY).color(palette::GRAY_400));

    let footer = Row::new()
        .align_y(Vertical::Center)
        .push(badge)
        .push(Space::new().width(Length::Fill))
        .push(rating_row);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(artwork(ctx, movie))
        .push(title)
        .push(Text::new(release).size(typography::BODY).color(palette::GRAY_400))
        .push(Container::new(footer).padding([spacing::XS, 0.0]));

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn artwork<'a, Message: 'a>(ctx: GridContext<'a>, movie: &'a MovieSummary) -> Element<'a, Message> {
    let url = format::card_image_or_placeholder(ctx.image_base_url, movie);

    let handle = match ctx.posters.get(&url) {
        Some(PosterState::Ready(handle)) => Some(handle.clone()),
        _ => match ctx.posters.get(PLACEHOLDER_IMAGE_URL) {
            Some(PosterState::Ready(handle)) => Some(handle.clone()),
            _ => None,
        },
    };

    match handle {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(ctx.i18n.tr("no-image")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .center(Length::Fill)
            .style(styles::container::image_placeholder)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, backdrop: Option<&str>) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            backdrop_path: backdrop.map(String::from),
            poster_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    #[test]
    fn image_urls_include_placeholder_once_per_call() {
        let movies = vec![movie(1, Some("/a.jpg")), movie(2, None)];
        let urls: Vec<String> = image_urls("https://img.test/t/p/original", &movies).collect();
        assert_eq!(
            urls,
            vec![
                "https://img.test/t/p/original/a.jpg".to_string(),
                PLACEHOLDER_IMAGE_URL.to_string(),
                PLACEHOLDER_IMAGE_URL.to_string(),
            ]
        );
    }

    #[test]
    fn grid_renders_with_empty_cache() {
        let i18n = I18n::default();
        let posters = PosterCache::default();
        let movies = vec![movie(1, Some("/a.jpg")), movie(2, None)];
        let ctx = GridContext {
            i18n: &i18n,
            image_base_url: "https://img.test",
            posters: &posters,
        };
        let _: Element<'_, ()> = view(ctx, &movies, |_| "badge-available");
    }
}
