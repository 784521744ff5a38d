//! Locale context and translated country names.
//!
//! The active locale is per-thread context: [`activate`] installs a locale
//! until the returned guard is dropped, and [`current`] reads it. Every name
//! lookup reads the locale at call time, so nothing derived from it is cached
//! across locale changes. APIs that take an explicit [`Locale`] bypass the
//! context entirely.

use countrykit_domain::settings::DEFAULT_LOCALE;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

thread_local! {
    static ACTIVE: RefCell<Option<Locale>> = const { RefCell::new(None) };
}

/// A normalized language tag such as `en`, `pt-br` or `eo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// Parses a language tag, lower-casing it and using `-` as the separator.
    #[must_use]
    pub fn new(tag: impl AsRef<str>) -> Self {
        let normalized = tag.as_ref().trim().replace('_', "-").to_ascii_lowercase();
        Self(Cow::Owned(normalized))
    }

    /// The locale used when nothing is activated.
    #[must_use]
    pub const fn fallback() -> Self {
        Self(Cow::Borrowed(DEFAULT_LOCALE))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`pt` for `pt-br`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0.into_owned()
    }
}

/// Restores the previously active locale when dropped.
#[must_use = "The locale is deactivated as soon as the guard is dropped."]
#[derive(Debug)]
pub struct LocaleGuard {
    previous: Option<Locale>,
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        ACTIVE.with(|active| *active.borrow_mut() = previous);
    }
}

/// Activates `locale` for the current thread until the guard is dropped.
pub fn activate(locale: impl Into<Locale>) -> LocaleGuard {
    let locale = locale.into();
    let previous = ACTIVE.with(|active| active.borrow_mut().replace(locale));
    LocaleGuard { previous }
}

/// The locale explicitly activated on this thread, if any.
#[must_use]
pub fn active() -> Option<Locale> {
    ACTIVE.with(|active| active.borrow().clone())
}

/// The locale active on this thread, or [`Locale::fallback`].
#[must_use]
pub fn current() -> Locale {
    active().unwrap_or_default()
}

/// Translated names keyed by locale and code.
///
/// A lookup for `pt-br` falls back to `pt` when no regional entry exists.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: FxHashMap<Locale, FxHashMap<String, String>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from the `translations` settings table.
    #[must_use]
    pub fn from_table(table: &BTreeMap<String, BTreeMap<String, String>>) -> Self {
        let mut catalog = Self::new();
        for (locale, names) in table {
            let locale = Locale::new(locale);
            for (code, name) in names {
                catalog.insert(locale.clone(), code, name.clone());
            }
        }
        catalog
    }

    /// Adds (or replaces) the translation of `code` for `locale`.
    pub fn insert(&mut self, locale: impl Into<Locale>, code: &str, name: impl Into<String>) {
        self.entries
            .entry(locale.into())
            .or_default()
            .insert(code.trim().to_ascii_uppercase(), name.into());
    }

    /// Looks up an upper-case code for `locale`.
    #[must_use]
    pub fn translate(&self, locale: &Locale, code: &str) -> Option<&str> {
        let exact = self.entries.get(locale).and_then(|names| names.get(code));
        exact
            .or_else(|| {
                let language = Locale::new(locale.language());
                if &language == locale {
                    return None;
                }
                self.entries.get(&language).and_then(|names| names.get(code))
            })
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_normalization() {
        assert_eq!(Locale::new("pt_BR").as_str(), "pt-br");
        assert_eq!(Locale::new(" EO ").as_str(), "eo");
        assert_eq!(Locale::new("pt-br").language(), "pt");
        assert_eq!(Locale::default().as_str(), "en");
    }

    #[test]
    fn test_activation_is_scoped() {
        assert_eq!(current(), Locale::fallback());
        assert!(active().is_none());
        {
            let _eo = activate("eo");
            assert_eq!(current().as_str(), "eo");
            {
                let _de = activate("de");
                assert_eq!(current().as_str(), "de");
            }
            assert_eq!(current().as_str(), "eo");
        }
        assert_eq!(current(), Locale::fallback());
    }

    #[test]
    fn test_catalog_falls_back_to_language() {
        let mut catalog = Catalog::new();
        catalog.insert("pt", "de", "Alemanha");
        catalog.insert("pt-br", "NZ", "Nova Zelândia");

        assert_eq!(catalog.translate(&Locale::new("pt-br"), "DE"), Some("Alemanha"));
        assert_eq!(catalog.translate(&Locale::new("pt-br"), "NZ"), Some("Nova Zelândia"));
        assert_eq!(catalog.translate(&Locale::new("pt"), "NZ"), None);
        assert_eq!(catalog.translate(&Locale::new("en"), "DE"), None);
    }
}
