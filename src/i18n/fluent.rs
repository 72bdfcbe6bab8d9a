// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles for the embedded (and optionally on-disk) translations.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file, then any file found in `i18n_dir`
    /// (which replaces the embedded bundle of the same locale).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
                if let Some(bundle) = build_bundle(&locale, source) {
                    bundles.insert(locale, bundle);
                }
            }
        }

        if let Some(dir) = i18n_dir {
            load_directory(Path::new(&dir), &mut bundles);
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(|locale| locale.to_string());

        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(DEFAULT_LOCALE);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments. Numeric values are passed as
    /// Fluent numbers so plural selectors work.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::try_number(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let bundle = self
            .bundles
            .get(&self.current_locale)
            .or_else(|| self.bundles.get(&DEFAULT_LOCALE));

        if let Some(bundle) = bundle {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
                tracing::warn!(key, ?errors, "failed to format message");
            }
        }
        format!("MISSING: {key}")
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(%locale, ?errors, "skipping unparsable translation file");
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "duplicate messages in translation file");
    }
    Some(bundle)
}

fn load_directory(dir: &Path, bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "cannot read translation directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        match std::fs::read_to_string(&path) {
            Ok(source) => {
                if let Some(bundle) = build_bundle(&locale, source) {
                    bundles.insert(locale, bundle);
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read translation file");
            }
        }
    }
}

/// Picks the first available locale among CLI, config and OS preference.
/// A bare language (`fr-CA`) falls back to its language-only bundle (`fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.general.language.clone(), os_locale]
        .into_iter()
        .flatten()
        .find_map(|candidate| match_available(&candidate, available))
}

fn match_available(candidate: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang: LanguageIdentifier = candidate.replace('_', "-").parse().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|locale| locale.language == lang.language && locale.region.is_none())
        .cloned()
}
