// SPDX-License-Identifier: MPL-2.0
//! Carousel timing and transition state.
//!
//! The slide transition runs along a track of `len + 1` positions where the
//! last position shows a clone of slide 0. Moving forward from the last slide
//! animates onto the clone and then snaps the track back to position 0, so
//! the loop never visibly rewinds. Moving backward from slide 0 first jumps
//! onto the clone and animates back to `len - 1`.

use crate::app::config::HeroTransition;
use std::time::{Duration, Instant};

/// Animation between two track positions.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: usize,
    to: usize,
    started: Instant,
}

/// What the view should draw at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// No animation: only `index` is visible.
    Still { index: usize },
    /// Cross-dissolve. `progress` goes 0 → 1 as `incoming` replaces `outgoing`.
    Fade {
        outgoing: usize,
        incoming: usize,
        progress: f32,
    },
    /// Track offset in slide widths, e.g. `1.25` shows a quarter of the third
    /// track position.
    Slide { offset: f32 },
}

/// Auto-advancing carousel position.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    /// Active slide, always `< len` when `len > 0`.
    index: usize,
    /// Track position; equals `index` except while parked on the clone.
    position: usize,
    style: HeroTransition,
    interval: Duration,
    duration: Duration,
    last_advance: Instant,
    animation: Option<Animation>,
}

impl Carousel {
    #[must_use]
    pub fn new(
        len: usize,
        style: HeroTransition,
        interval: Duration,
        duration: Duration,
        now: Instant,
    ) -> Self {
        Self {
            len,
            index: 0,
            position: 0,
            style,
            interval,
            duration,
            last_advance: now,
            animation: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Finishes due animations and auto-advances once the interval elapsed.
    /// Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(animation) = self.animation {
            if now.saturating_duration_since(animation.started) >= self.duration {
                self.finish_animation();
                changed = true;
            } else {
                // Still animating: the view interpolates from `now`.
                return true;
            }
        }

        if self.len > 1 && now.saturating_duration_since(self.last_advance) >= self.interval {
            self.step_forward(now);
            changed = true;
        }

        changed
    }

    pub fn next(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.finish_animation();
        self.step_forward(now);
    }

    pub fn previous(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.finish_animation();
        self.last_advance = now;
        if self.len == 1 {
            return;
        }

        let target = (self.index + self.len - 1) % self.len;
        match self.style {
            HeroTransition::Fade => self.start(self.index, target, now),
            HeroTransition::Slide => {
                // Park on the clone of slide 0 so the track moves left.
                let from = if self.index == 0 { self.len } else { self.index };
                self.start(from, target, now);
            }
        }
        self.index = target;
    }

    /// Jumps to slide `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index >= self.len {
            return;
        }
        self.finish_animation();
        self.last_advance = now;
        if index == self.index {
            return;
        }
        self.start(self.index, index, now);
        self.index = index;
    }

    /// Draw instructions for `now`.
    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        let Some(animation) = self.animation else {
            return match self.style {
                HeroTransition::Fade => Frame::Still { index: self.index },
                HeroTransition::Slide => Frame::Slide {
                    offset: self.position as f32,
                },
            };
        };

        let progress = self.progress(animation, now);
        match self.style {
            HeroTransition::Fade => Frame::Fade {
                outgoing: animation.from % self.len.max(1),
                incoming: animation.to % self.len.max(1),
                progress,
            },
            HeroTransition::Slide => {
                let from = animation.from as f32;
                let to = animation.to as f32;
                Frame::Slide {
                    offset: from + (to - from) * progress,
                }
            }
        }
    }

    /// Eased 0..=1 progress of `animation` at `now`.
    fn progress(&self, animation: Animation, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(animation.started).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        ease_in_out(t)
    }

    fn step_forward(&mut self, now: Instant) {
        self.last_advance = now;
        if self.len <= 1 {
            return;
        }

        let target = (self.index + 1) % self.len;
        match self.style {
            HeroTransition::Fade => self.start(self.index, target, now),
            HeroTransition::Slide => {
                // The last slide moves onto the clone; `finish_animation`
                // snaps the track back to 0.
                let to = if target == 0 { self.len } else { target };
                self.start(self.position, to, now);
            }
        }
        self.index = target;
    }

    fn start(&mut self, from: usize, to: usize, now: Instant) {
        if self.duration.is_zero() {
            self.position = to % self.len;
            return;
        }
        self.position = to;
        self.animation = Some(Animation {
            from,
            to,
            started: now,
        });
    }

    fn finish_animation(&mut self) {
        if self.animation.take().is_some() && self.position >= self.len {
            self.position = 0;
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const INTERVAL: Duration = Duration::from_secs(5);
    const ANIMATION: Duration = Duration::from_millis(600);

    fn carousel(len: usize, style: HeroTransition, now: Instant) -> Carousel {
        Carousel::new(len, style, INTERVAL, ANIMATION, now)
    }

    #[test]
    fn timer_advances_modulo_length() {
        let start = Instant::now();
        let mut c = carousel(3, HeroTransition::Fade, start);
        let mut now = start;

        for expected in [1, 2, 0, 1] {
            now += INTERVAL;
            assert!(c.tick(now));
            assert_eq!(c.index(), expected);
            now += ANIMATION;
            c.tick(now);
            assert!(!c.is_animating());
        }
    }

    #[test]
    fn tick_before_interval_does_nothing() {
        let start = Instant::now();
        let mut c = carousel(3, HeroTransition::Fade, start);
        assert!(!c.tick(start + Duration::from_secs(4)));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn manual_navigation_wraps() {
        let now = Instant::now();
        let mut c = carousel(3, HeroTransition::Fade, now);
        c.previous(now);
        assert_eq!(c.index(), 2);
        c.next(now);
        assert_eq!(c.index(), 0);
        c.next(now);
        c.next(now);
        c.next(now);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn manual_navigation_restarts_interval() {
        let start = Instant::now();
        let mut c = carousel(3, HeroTransition::Fade, start);

        let manual = start + Duration::from_secs(4);
        c.next(manual);
        assert_eq!(c.index(), 1);

        // Would have auto-advanced at start + 5s without the reset.
        c.tick(start + Duration::from_secs(6));
        assert_eq!(c.index(), 1);

        c.tick(manual + INTERVAL);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let now = Instant::now();
        let mut c = carousel(3, HeroTransition::Slide, now);
        c.go_to(7, now);
        assert_eq!(c.index(), 0);
        c.go_to(2, now);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_carousel_never_advances() {
        let start = Instant::now();
        let mut c = carousel(0, HeroTransition::Slide, start);
        assert!(!c.tick(start + INTERVAL * 10));
        c.next(start);
        c.previous(start);
        c.go_to(0, start);
        assert_eq!(c.index(), 0);
        assert!(!c.is_animating());
    }

    #[test]
    fn single_slide_stays_still() {
        let start = Instant::now();
        let mut c = carousel(1, HeroTransition::Fade, start);
        c.tick(start + INTERVAL);
        c.next(start);
        assert_eq!(c.index(), 0);
        assert!(!c.is_animating());
    }

    #[test]
    fn slide_transition_snaps_back_after_clone() {
        let start = Instant::now();
        let mut c = carousel(3, HeroTransition::Slide, start);
        c.go_to(2, start);
        c.tick(start + ANIMATION);

        let advance = start + INTERVAL;
        c.tick(advance);
        assert_eq!(c.index(), 0);

        // Halfway the track sits between the last slide and the clone.
        let Frame::Slide { offset } = c.frame(advance + ANIMATION / 2) else {
            panic!("expected slide frame");
        };
        assert_abs_diff_eq!(offset, 2.5, epsilon = 1e-4);

        c.tick(advance + ANIMATION);
        assert_eq!(c.frame(advance + ANIMATION), Frame::Slide { offset: 0.0 });
    }

    #[test]
    fn slide_previous_from_first_moves_left_from_clone() {
        let now = Instant::now();
        let mut c = carousel(3, HeroTransition::Slide, now);
        c.previous(now);
        assert_eq!(c.index(), 2);
        assert_eq!(c.frame(now), Frame::Slide { offset: 3.0 });

        let Frame::Slide { offset } = c.frame(now + ANIMATION) else {
            panic!("expected slide frame");
        };
        assert_abs_diff_eq!(offset, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn fade_progress_is_eased_between_slides() {
        let now = Instant::now();
        let mut c = carousel(3, HeroTransition::Fade, now);
        c.next(now);

        let Frame::Fade {
            outgoing,
            incoming,
            progress,
        } = c.frame(now + ANIMATION / 2)
        else {
            panic!("expected fade frame");
        };
        assert_eq!((outgoing, incoming), (0, 1));
        assert_abs_diff_eq!(progress, 0.5, epsilon = 1e-4);

        c.tick(now + ANIMATION);
        assert_eq!(c.frame(now + ANIMATION), Frame::Still { index: 1 });
    }

    #[test]
    fn zero_duration_switches_instantly() {
        let now = Instant::now();
        let mut c = Carousel::new(3, HeroTransition::Slide, INTERVAL, Duration::ZERO, now);
        c.go_to(2, now);
        c.next(now);
        assert!(!c.is_animating());
        assert_eq!(c.frame(now), Frame::Slide { offset: 0.0 });
    }

    #[test]
    fn interrupting_an_animation_completes_it() {
        let now = Instant::now();
        let mut c = carousel(3, HeroTransition::Slide, now);
        c.go_to(2, now);
        c.next(now + ANIMATION / 3);
        assert_eq!(c.index(), 0);
        c.tick(now + ANIMATION * 2);
        assert_eq!(c.frame(now + ANIMATION * 2), Frame::Slide { offset: 0.0 });
    }
}
