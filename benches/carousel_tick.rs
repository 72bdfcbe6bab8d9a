// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quickshow::app::config::HeroTransition;
use quickshow::ui::hero::transition::Carousel;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// One simulated minute of 60 Hz ticks, including auto-advances and the
/// frame query the view performs after each tick.
fn carousel_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_tick");
    let frame = Duration::from_millis(16);

    for style in [HeroTransition::Fade, HeroTransition::Slide] {
        group.bench_with_input(
            BenchmarkId::new("one_minute", format!("{style:?}")),
            &style,
            |b, &style| {
                b.iter(|| {
                    let start = Instant::now();
                    let mut carousel = Carousel::new(
                        3,
                        style,
                        Duration::from_secs(5),
                        Duration::from_millis(600),
                        start,
                    );
                    let mut now = start;
                    for _ in 0..3600 {
                        now += frame;
                        carousel.tick(now);
                        black_box(carousel.frame(now));
                    }
                    carousel.index()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, carousel_tick_benchmark);
criterion_main!(benches);
