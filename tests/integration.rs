// SPDX-License-Identifier: MPL-2.0
use chrono::NaiveDate;
use quickshow::app::config::{self, Config, HeroTransition};
use quickshow::catalog::format::{self, Availability};
use quickshow::catalog::{parse_listing, Category};
use quickshow::i18n::I18n;
use quickshow::ui::hero::transition::{Carousel, Frame};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const NOW_PLAYING_PAGE: &str = r#"{
    "dates": {"maximum": "2025-06-10", "minimum": "2025-04-23"},
    "page": 1,
    "results": [
        {
            "adult": false,
            "backdrop_path": "/backdrop.jpg",
            "id": 950396,
            "poster_path": "/poster.jpg",
            "release_date": "2025-05-21",
            "title": "The Gorge",
            "vote_average": 7.754,
            "vote_count": 2100
        },
        {
            "id": 12,
            "title": "Untitled Sequel",
            "release_date": "",
            "vote_average": 0
        }
    ],
    "total_pages": 1,
    "total_results": 2
}"#;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("releases-tab-now-playing"), "Now Playing");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-home"), "Accueil");
}

#[test]
fn test_cli_language_beats_config() {
    let mut cfg = Config::default();
    cfg.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".into()), None, &cfg);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_settings_round_trip_keeps_hero_and_search_sections() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.hero.transition = Some(HeroTransition::Slide);
    cfg.hero.interval_secs = Some(8);
    cfg.search.live = Some(true);
    config::save_to_path(&cfg, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded.hero.transition, Some(HeroTransition::Slide));
    assert_eq!(loaded.hero_interval(), Duration::from_secs(8));
    assert_eq!(loaded.search.live, Some(true));
}

#[test]
fn test_listing_page_renders_card_fields() {
    let listing = parse_listing(NOW_PLAYING_PAGE).expect("valid page");
    assert_eq!(listing.results.len(), 2);

    let gorge = &listing.results[0];
    assert_eq!(
        format::card_image_url("https://image.tmdb.org/t/p/original", gorge).as_deref(),
        Some("https://image.tmdb.org/t/p/original/backdrop.jpg")
    );
    assert_eq!(format::release_date(gorge.release_date).as_deref(), Some("May 21, 2025"));
    assert_eq!(format::rating(gorge.vote_average).as_deref(), Some("7.8"));

    let sequel = &listing.results[1];
    assert_eq!(sequel.release_date, None);
    assert_eq!(format::rating(sequel.vote_average), None);
    assert_eq!(
        format::card_image_or_placeholder("https://image.tmdb.org/t/p/original", sequel),
        format::PLACEHOLDER_IMAGE_URL
    );
}

#[test]
fn test_badges_follow_category_and_release_date() {
    let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
    assert_eq!(i18n.tr(Category::NowPlaying.badge_key()), "In Theaters");
    assert_eq!(i18n.tr(Category::Upcoming.badge_key()), "Coming Soon");

    let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    let tomorrow = today.succ_opt();
    assert_eq!(Availability::of(tomorrow, today), Availability::ComingSoon);
    assert_eq!(Availability::of(Some(today), today), Availability::Available);
}

#[test]
fn test_carousel_slide_loop_returns_to_first_slide() {
    let start = Instant::now();
    let interval = Duration::from_secs(5);
    let duration = Duration::from_millis(600);
    let mut carousel = Carousel::new(3, HeroTransition::Slide, interval, duration, start);

    let mut now = start;
    for expected in [1, 2, 0, 1] {
        now += interval;
        carousel.tick(now);
        now += duration;
        carousel.tick(now);
        assert_eq!(carousel.index(), expected);
        assert_eq!(
            carousel.frame(now),
            Frame::Slide {
                offset: expected as f32
            }
        );
    }
}
