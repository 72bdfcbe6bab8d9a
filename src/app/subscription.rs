// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval while something is visibly moving.
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Interval for timers that only need coarse resolution.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Tracks the window width for the navbar breakpoint.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates the periodic tick.
///
/// `animating` covers carousel transitions and loading spinners; `timed`
/// covers the carousel interval, toast auto-dismiss and the search debounce.
/// With neither, no timer exists at all.
pub fn create_tick_subscription(animating: bool, timed: bool) -> Subscription<Message> {
    match tick_interval(animating, timed) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_interval(animating: bool, timed: bool) -> Option<Duration> {
    if animating {
        Some(ANIMATION_TICK)
    } else if timed {
        Some(IDLE_TICK)
    } else {
        None
    }
}
