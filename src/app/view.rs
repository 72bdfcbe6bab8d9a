// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar floats over the page: the hero fills the whole window beneath
//! it, while the listing pages scroll inside a padded column.

use super::update::PAGE_SCROLL_ID;
use super::{Message, Screen};
use crate::catalog::format;
use crate::catalog::PosterCache;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::hero;
use crate::ui::movie_grid::GridContext;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::releases;
use crate::ui::search;
use crate::ui::styles;
use iced::widget::{Container, Id, Scrollable, Space, Stack};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub navbar: &'a navbar::State,
    pub hero: &'a hero::State,
    pub releases: &'a releases::State,
    pub search: &'a search::State,
    pub image_base_url: &'a str,
    pub posters: &'a PosterCache,
    pub notifications: &'a notifications::Manager,
    pub window_width: f32,
    pub now: Instant,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let compact = ctx.window_width < sizing::COMPACT_BREAKPOINT;
    let grid = GridContext {
        i18n: ctx.i18n,
        image_base_url: ctx.image_base_url,
        posters: ctx.posters,
    };

    let page: Element<'_, Message> = match ctx.screen {
        Screen::Home => hero::view(hero::ViewContext {
            i18n: ctx.i18n,
            state: ctx.hero,
            now: ctx.now,
        })
        .map(Message::Hero),
        Screen::Releases => listing_page(
            releases::view(ctx.releases, grid, ctx.now).map(Message::Releases),
            compact,
        ),
        Screen::Search => listing_page(
            search::view(ctx.search, grid, format::today(), ctx.now).map(Message::Search),
            compact,
        ),
    };

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        active: ctx.screen.route(),
        compact,
    })
    .map(Message::Navbar);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(navbar_view)
        .push(toasts)
        .into()
}

/// Wraps a listing page in the shared scrollable, below the navbar, with
/// the two corner glows behind it.
fn listing_page(content: Element<'_, Message>, compact: bool) -> Element<'_, Message> {
    let gutter = if compact {
        spacing::MD
    } else {
        spacing::PAGE_GUTTER
    };

    let padded = Container::new(content)
        .width(Length::Fill)
        .padding(Padding {
            top: sizing::NAVBAR_HEIGHT + spacing::XL,
            right: gutter,
            bottom: spacing::XXL,
            left: gutter,
        });

    let scroll = Scrollable::new(padded)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(glow(Horizontal::Left, Vertical::Top))
        .push(glow(Horizontal::Right, Vertical::Bottom))
        .push(scroll)
        .into()
}

fn glow<'a>(align_x: Horizontal, align_y: Vertical) -> Element<'a, Message> {
    let circle = Container::new(Space::new())
        .width(Length::Fixed(sizing::BLUR_CIRCLE))
        .height(Length::Fixed(sizing::BLUR_CIRCLE))
        .style(styles::container::blur_circle);

    Container::new(circle)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(sizing::NAVBAR_HEIGHT + spacing::XL)
        .align_x(align_x)
        .align_y(align_y)
        .into()
}
