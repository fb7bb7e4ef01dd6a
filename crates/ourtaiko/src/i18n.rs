//! Message bundles and locale selection.
//!
//! Bundles are nested JSON objects addressed by dot path (`"songs.title"`).
//! Lookup order: active locale, fallback locale, default locale, then the key
//! itself.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::locale::{DEFAULT_LOCALE, FALLBACK_LOCALE};
use crate::error::{Error, Result};

const ZH_BUNDLE: &str = include_str!("../locales/zh.json");
const EN_BUNDLE: &str = include_str!("../locales/en.json");

#[derive(Debug, Clone)]
pub struct I18n {
    bundles: BTreeMap<String, Value>,
    locale: String,
    fallback: String,
}

impl I18n {
    /// Bundled `zh` and `en` messages, with the active locale chosen from `preferred`.
    pub fn builtin(preferred: Option<&str>) -> Result<Self> {
        let bundles: BTreeMap<String, Value> = BTreeMap::from([
            ("zh".to_string(), serde_json::from_str(ZH_BUNDLE)?),
            ("en".to_string(), serde_json::from_str(EN_BUNDLE)?),
        ]);
        Ok(Self::from_bundles(bundles, preferred))
    }

    /// Build from arbitrary bundles. An unknown `preferred` locale selects the default.
    pub fn from_bundles(bundles: BTreeMap<String, Value>, preferred: Option<&str>) -> Self {
        let locale = match preferred {
            Some(locale) if bundles.contains_key(locale) => locale.to_string(),
            Some(locale) => {
                warn!("Unknown locale {:?}, using {}", locale, DEFAULT_LOCALE);
                DEFAULT_LOCALE.to_string()
            }
            None => DEFAULT_LOCALE.to_string(),
        };
        Self {
            bundles,
            locale,
            fallback: FALLBACK_LOCALE.to_string(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    pub fn available_locales(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        if !self.bundles.contains_key(locale) {
            return Err(Error::UnknownLocale(locale.to_string()));
        }
        debug!("Locale {} -> {}", self.locale, locale);
        self.locale = locale.to_string();
        Ok(())
    }

    /// Whether the key resolves in any bundle on the lookup path.
    pub fn has(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// Translate `key`.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Translate `key`, replacing `{name}` placeholders from `args`.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let Some(message) = self.resolve(key) else {
            debug!("Missing message {:?} in {} and {}", key, self.locale, self.fallback);
            return key.to_string();
        };
        interpolate(message, args)
    }

    fn resolve(&self, key: &str) -> Option<&str> {
        self.lookup_in(&self.locale, key)
            .or_else(|| self.lookup_in(&self.fallback, key))
            .or_else(|| self.lookup_in(DEFAULT_LOCALE, key))
    }

    fn lookup_in(&self, locale: &str, key: &str) -> Option<&str> {
        let mut node = self.bundles.get(locale)?;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str()
    }
}

fn interpolate(message: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = after[..end].trim();
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + end + 2]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
