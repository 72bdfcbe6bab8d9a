// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar holds the logo, the Home/Releases links and the search input.
//! Wide windows show everything inline; compact windows collapse the links
//! into a toggleable menu and the search input into a dropdown.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Font, Length,
};
use std::time::{Duration, Instant};

/// Pages reachable from the navbar links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Releases,
}

/// Navbar state owned by the application.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub menu_open: bool,
    pub search_query: String,
    pub mobile_search_open: bool,
    /// When the query was last edited, while a live search is pending.
    edited_at: Option<Instant>,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Route whose link is highlighted, if any.
    pub active: Option<Route>,
    /// Whether the window is narrower than the compact breakpoint.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Route),
    QueryChanged(String),
    SubmitSearch,
    ToggleMobileSearch,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    /// A trimmed, non-empty query to show results for.
    Search(String),
}

impl State {
    /// Whether a live search is waiting for the typing pause.
    #[must_use]
    pub fn debounce_pending(&self) -> bool {
        self.edited_at.is_some()
    }

    /// The compact dropdown's explicit search button only appears once
    /// there is something to search.
    #[must_use]
    pub fn shows_search_button(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Fires the pending live search once `delay` has passed since the last
    /// edit. The input keeps its text; a blank query cancels the search.
    pub fn poll_debounce(&mut self, now: Instant, delay: Duration) -> Option<String> {
        let edited_at = self.edited_at?;
        if now.saturating_duration_since(edited_at) < delay {
            return None;
        }
        self.edited_at = None;

        let query = self.search_query.trim();
        (!query.is_empty()).then(|| query.to_string())
    }
}

/// Process a navbar message and return the corresponding event.
///
/// `live` enables the debounced search-as-you-type mode.
pub fn update(state: &mut State, message: Message, live: bool) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::CloseMenu => {
            state.menu_open = false;
            Event::None
        }
        Message::Navigate(route) => {
            state.menu_open = false;
            Event::Navigate(route)
        }
        Message::QueryChanged(query) => {
            state.search_query = query;
            state.edited_at = live.then(Instant::now);
            Event::None
        }
        Message::SubmitSearch => {
            let query = state.search_query.trim();
            if query.is_empty() {
                return Event::None;
            }
            let query = query.to_string();
            state.search_query.clear();
            state.edited_at = None;
            state.mobile_search_open = false;
            state.menu_open = false;
            Event::Search(query)
        }
        Message::ToggleMobileSearch => {
            state.mobile_search_open = !state.mobile_search_open;
            Event::None
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    if ctx.compact {
        content = content.push(build_compact_bar(&ctx));
        if ctx.state.menu_open {
            content = content.push(build_menu_dropdown(&ctx));
        }
        if ctx.state.mobile_search_open {
            content = content.push(build_search_dropdown(&ctx));
        }
    } else {
        content = content.push(build_wide_bar(&ctx));
    }

    content.into()
}

fn build_logo<'a>() -> Element<'a, Message> {
    let logo = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::film(), sizing::ICON_LG),
            palette::PRIMARY,
        ))
        .push(
            Text::new("QuickShow")
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        );

    button(logo)
        .on_press(Message::Navigate(Route::Home))
        .padding(0)
        .width(Length::Fixed(sizing::LOGO_WIDTH + spacing::XXL))
        .style(styles::button::nav_link(false))
        .into()
}

fn nav_link<'a>(ctx: &ViewContext<'a>, route: Route) -> Element<'a, Message> {
    let key = match route {
        Route::Home => "nav-home",
        Route::Releases => "nav-releases",
    };
    button(Text::new(ctx.i18n.tr(key)).size(typography::BODY_LG))
        .on_press(Message::Navigate(route))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(ctx.active == Some(route)))
        .into()
}

fn search_input<'a>(ctx: &ViewContext<'a>, width: Length) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), &ctx.state.search_query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SubmitSearch)
        .size(typography::BODY)
        .padding(spacing::XXS)
        .width(width)
        .style(|theme, status| {
            let mut style = text_input::default(theme, status);
            style.background = iced::Background::Color(iced::Color::TRANSPARENT);
            style.border.width = 0.0;
            style.value = palette::WHITE;
            style.placeholder = palette::GRAY_400;
            style
        });

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::search(), sizing::ICON_MD),
            palette::GRAY_300,
        ))
        .push(input);

    Container::new(row)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::pill)
        .into()
}

fn build_wide_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = Container::new(
        Row::new()
            .spacing(spacing::XL)
            .align_y(Vertical::Center)
            .push(nav_link(ctx, Route::Home))
            .push(nav_link(ctx, Route::Releases)),
    )
    .padding([spacing::XS, spacing::XL])
    .style(styles::container::pill);

    let row = Row::new()
        .padding([spacing::SM, spacing::XL])
        .align_y(Vertical::Center)
        .push(build_logo())
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(Space::new().width(Length::Fill))
        .push(search_input(
            ctx,
            Length::Fixed(sizing::SEARCH_INPUT_WIDTH),
        ));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT + spacing::MD))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn build_compact_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let search_toggle = button(icons::sized(icons::search(), sizing::ICON_MD))
        .on_press(Message::ToggleMobileSearch)
        .padding(spacing::XS)
        .style(styles::button::icon);

    let menu_icon = if ctx.state.menu_open {
        icons::x()
    } else {
        icons::menu()
    };
    let menu_toggle = button(icons::sized(menu_icon, sizing::ICON_LG))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XXS)
        .style(styles::button::icon);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(build_logo())
        .push(Space::new().width(Length::Fill))
        .push(search_toggle)
        .push(menu_toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn build_menu_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let item = |route: Route, key: &str| {
        button(
            Text::new(ctx.i18n.tr(key))
                .size(typography::TITLE_SM)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
        )
        .on_press(Message::Navigate(route))
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(styles::button::menu_item)
    };

    let menu = Column::new()
        .spacing(spacing::XS)
        .push(item(Route::Home, "nav-home"))
        .push(item(Route::Releases, "nav-releases"));

    Container::new(menu)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::dropdown)
        .into()
}

fn build_search_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(search_input(ctx, Length::Fill));

    if ctx.state.shows_search_button() {
        row = row.push(
            button(Text::new(ctx.i18n.tr("search-button")).size(typography::BODY))
                .on_press(Message::SubmitSearch)
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::primary),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::dropdown)
        .into()
}
