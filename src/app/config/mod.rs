// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Catalog endpoints, access token and request timeout
//! - `[hero]` - Carousel auto-advance interval and transition style
//! - `[search]` - Live (debounced) search
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `QUICKSHOW_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use quickshow::app::config;
//!
//! # fn main() -> quickshow::error::Result<()> {
//! let (mut config, _warning) = config::load();
//! config.hero.interval_secs = Some(8);
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))?;
//! # Ok(())
//! # }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable holding the API read access token.
pub const ENV_ACCESS_TOKEN: &str = "TMDB_API_KEY";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// How the hero carousel moves from one slide to the next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeroTransition {
    /// Cross-dissolve between outgoing and incoming slide.
    #[default]
    Fade,
    /// Horizontal slide with a seamless snap-back loop.
    Slide,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Remote catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// API root, e.g. `https://api.themoviedb.org/3`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Prefix for backdrop and poster paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,

    /// Read access token (v4 bearer). `TMDB_API_KEY` takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Language requested from the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
}

/// Hero carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    /// Seconds between automatic slide changes.
    #[serde(
        default = "default_hero_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_secs: Option<u32>,

    /// Transition style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<HeroTransition>,

    /// Transition duration in milliseconds.
    #[serde(
        default = "default_hero_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u32>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_hero_interval_secs(),
            transition: Some(HeroTransition::default()),
            transition_ms: default_hero_transition_ms(),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Search while typing, after `debounce_ms` of inactivity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,

    /// Idle delay before a live search fires.
    #[serde(
        default = "default_search_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub debounce_ms: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            live: Some(false),
            debounce_ms: default_search_debounce_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// API root with the default applied.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Image URL prefix with the default applied.
    #[must_use]
    pub fn image_base_url(&self) -> &str {
        self.api
            .image_base_url
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_BASE_URL)
    }

    /// API language with the default applied.
    #[must_use]
    pub fn api_language(&self) -> &str {
        self.api.language.as_deref().unwrap_or(DEFAULT_API_LANGUAGE)
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .api
            .timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(u64::from(secs))
    }

    /// Carousel auto-advance interval, clamped to the supported range.
    #[must_use]
    pub fn hero_interval(&self) -> Duration {
        let secs = self
            .hero
            .interval_secs
            .unwrap_or(DEFAULT_HERO_INTERVAL_SECS)
            .clamp(MIN_HERO_INTERVAL_SECS, MAX_HERO_INTERVAL_SECS);
        Duration::from_secs(u64::from(secs))
    }

    /// Carousel transition duration, clamped to the supported range.
    #[must_use]
    pub fn hero_transition_duration(&self) -> Duration {
        let ms = self
            .hero
            .transition_ms
            .unwrap_or(DEFAULT_HERO_TRANSITION_MS)
            .clamp(MIN_HERO_TRANSITION_MS, MAX_HERO_TRANSITION_MS);
        Duration::from_millis(u64::from(ms))
    }

    /// Live search debounce delay, clamped to the supported range.
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        let ms = self
            .search
            .debounce_ms
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS)
            .clamp(MIN_SEARCH_DEBOUNCE_MS, MAX_SEARCH_DEBOUNCE_MS);
        Duration::from_millis(u64::from(ms))
    }

    /// Resolves the access token: CLI flag, then `TMDB_API_KEY`, then the file.
    #[must_use]
    pub fn resolve_access_token(&self, cli_token: Option<String>) -> Option<String> {
        let env_token = std::env::var(ENV_ACCESS_TOKEN).ok();
        pick_token(cli_token, env_token, self.api.access_token.clone())
    }
}

fn pick_token(
    cli: Option<String>,
    env: Option<String>,
    file: Option<String>,
) -> Option<String> {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_hero_interval_secs() -> Option<u32> {
    Some(DEFAULT_HERO_INTERVAL_SECS)
}

fn default_hero_transition_ms() -> Option<u32> {
    Some(DEFAULT_HERO_TRANSITION_MS)
}

fn default_search_debounce_ms() -> Option<u32> {
    Some(DEFAULT_SEARCH_DEBOUNCE_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: Some("https://example.test/3".into()),
                ..ApiConfig::default()
            },
            hero: HeroConfig {
                interval_secs: Some(8),
                transition: Some(HeroTransition::Slide),
                transition_ms: Some(300),
            },
            search: SearchConfig {
                live: Some(true),
                debounce_ms: Some(250),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[hero\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[hero]\ntransition = \"slide\"\n").expect("write");

        let config = load_from_path(&config_path).expect("valid config");
        assert_eq!(config.hero.transition, Some(HeroTransition::Slide));
        assert_eq!(config.hero.interval_secs, Some(DEFAULT_HERO_INTERVAL_SECS));
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"neon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn durations_are_clamped() {
        let mut config = Config::default();
        config.hero.interval_secs = Some(0);
        config.hero.transition_ms = Some(60_000);
        config.search.debounce_ms = Some(1);
        config.api.timeout_secs = Some(10_000);

        assert_eq!(
            config.hero_interval(),
            Duration::from_secs(u64::from(MIN_HERO_INTERVAL_SECS))
        );
        assert_eq!(
            config.hero_transition_duration(),
            Duration::from_millis(u64::from(MAX_HERO_TRANSITION_MS))
        );
        assert_eq!(
            config.search_debounce(),
            Duration::from_millis(u64::from(MIN_SEARCH_DEBOUNCE_MS))
        );
        assert_eq!(
            config.request_timeout(),
            Duration::from_secs(u64::from(MAX_REQUEST_TIMEOUT_SECS))
        );
    }

    #[test]
    fn token_precedence_is_cli_env_file() {
        let t = |s: &str| Some(s.to_string());
        assert_eq!(pick_token(t("cli"), t("env"), t("file")), t("cli"));
        assert_eq!(pick_token(None, t("env"), t("file")), t("env"));
        assert_eq!(pick_token(None, None, t("file")), t("file"));
        assert_eq!(pick_token(t("  "), None, t("file")), t("file"));
        assert_eq!(pick_token(None, None, None), None);
    }
}
