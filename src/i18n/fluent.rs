// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                        if let Some(bundle) = build_bundle(&locale, source) {
                            bundles.insert(locale.clone(), bundle);
                            available_locales.push(locale);
                        }
                    }
                }
            }
        }

        // Runtime .ftl files take precedence over the embedded ones so that
        // custom builds can ship extra or corrected translations.
        if let Some(dir) = i18n_dir {
            load_directory(Path::new(&dir), &mut bundles, &mut available_locales);
        }

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

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

    /// Translates a key with named arguments, e.g. `("name", "Odie")`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let res = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.add_resource(res).ok()?;
    Some(bundle)
}

fn load_directory(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        eprintln!("Failed to read i18n directory: {:?}", dir);
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.extension().and_then(|e| e.to_str()) != Some("ftl") {
            continue;
        }
        let Ok(locale) = stem.parse::<LanguageIdentifier>() else {
            continue;
        };
        let Ok(source) = std::fs::read_to_string(&path) else {
            eprintln!("Failed to read FTL file: {:?}", path);
            continue;
        };
        if let Some(bundle) = build_bundle(&locale, source) {
            if bundles.insert(locale.clone(), bundle).is_none() {
                available_locales.push(locale);
            }
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    #[test]
    fn resolve_locale_prefers_cli() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let mut config = Config::default();
        config.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_languages() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];
        let lang = resolve_locale(Some("xx".to_string()), &config, &available);
        assert!(lang.is_none() || available.contains(&lang.unwrap()));
    }

    #[test]
    fn embedded_bundles_resolve_known_keys() {
        let i18n = I18n::default();
        let title = i18n.tr("window-title");
        assert!(!title.starts_with("MISSING"));
    }

    #[test]
    fn unknown_keys_are_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn set_locale_switches_translation() {
        let mut i18n = I18n::default();
        let english = i18n.tr("navbar-join-beta");
        i18n.set_locale("fr".parse().unwrap());
        let french = i18n.tr("navbar-join-beta");
        assert_ne!(english, french);
    }

    #[test]
    fn tr_with_args_interpolates() {
        let i18n = I18n::default();
        let text = i18n.tr_with_args("deck-counter", &[("current", "01"), ("total", "19")]);
        assert!(text.contains("01"));
        assert!(text.contains("19"));
    }
}
