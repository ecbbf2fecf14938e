// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|s| s.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    tracing::warn!(file = filename, errors = errors.len(), "skipping broken translation file");
                    continue;
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if bundle.add_resource(resource).is_err() {
                tracing::warn!(file = filename, "translation file has duplicate messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            // Numeric values go in as numbers so plural selectors work.
            match value.parse::<f64>() {
                Ok(number) => fluent_args.set(*name, number),
                Err(_) => fluent_args.set(*name, *value),
            }
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config.general.language.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().as_deref().and_then(supported)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unsupported_cli_locale_falls_through_to_config() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &locales());
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.len() >= 2);
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn args_are_interpolated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = i18n.tr_with_args("catalog-usage-count", &[("count", "2")]);
        assert!(text.contains('2'), "got {text}");
    }

    #[test]
    fn numeric_args_select_plural_variants() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("catalog-usage-count", &[("count", "1")]),
            "1 interaction"
        );
        assert_eq!(
            i18n.tr_with_args("catalog-usage-count", &[("count", "3")]),
            "3 interactions"
        );
    }

    #[test]
    fn every_english_key_exists_in_french() {
        let en = I18n::new(Some("en-US".to_string()), &Config::default());
        let fr = I18n::new(Some("fr".to_string()), &Config::default());
        for key in ["window-title", "toast-kind-error", "catalog-props-none", "about-title"] {
            assert!(!en.tr(key).starts_with("MISSING"), "{key} missing in en-US");
            assert!(!fr.tr(key).starts_with("MISSING"), "{key} missing in fr");
        }
    }

    #[test]
    fn set_locale_ignores_unknown_locales() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        i18n.set_locale("ja".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");

        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }
}
