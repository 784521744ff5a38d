//! Country registry: code → name / alpha-3 / IOC / numeric lookups.
//!
//! A [`Registry`] is immutable once built and shared as `Arc<Registry>`.
//! The default one is built from [`CountriesSettings`]; a custom registry
//! overrides display names and the set of available codes while ISO metadata
//! (alpha-3, IOC, numeric) always comes from the static dataset.

use crate::country::Country;
use crate::translation::{self, Catalog, Locale};
use countrykit_domain::data::{COMMON_NAMES, COUNTRIES, CountryRecord};
use countrykit_domain::settings::CountriesSettings;
use fxhash::{FxHashMap, FxHashSet};
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static GLOBAL: LazyLock<Arc<Registry>> =
    LazyLock::new(|| Arc::new(Registry::new(&CountriesSettings::default())));

static INDEX: LazyLock<Index> = LazyLock::new(Index::build);

/// Reverse indexes over the static dataset, built on first use.
#[derive(Debug)]
struct Index {
    by_code: FxHashMap<&'static str, &'static CountryRecord>,
    by_alpha3: FxHashMap<&'static str, &'static str>,
    by_numeric: FxHashMap<u16, &'static str>,
    by_ioc: FxHashMap<&'static str, &'static str>,
}

impl Index {
    fn build() -> Self {
        let mut index = Self {
            by_code: FxHashMap::default(),
            by_alpha3: FxHashMap::default(),
            by_numeric: FxHashMap::default(),
            by_ioc: FxHashMap::default(),
        };
        for record in COUNTRIES {
            index.by_code.insert(record.code, record);
            index.by_alpha3.insert(record.alpha3, record.code);
            index.by_numeric.insert(record.numeric, record.code);
            if let Some(ioc) = record.ioc {
                index.by_ioc.insert(ioc, record.code);
            }
        }
        index
    }

    fn record(&self, code: &str) -> Option<&'static CountryRecord> {
        self.by_code.get(code).copied()
    }
}

/// A set of countries with display names, available choices and the flag
/// URL environment they render with.
#[derive(Debug)]
pub struct Registry {
    names: FxHashMap<String, Cow<'static, str>>,
    available: Vec<String>,
    parent: Option<Arc<Registry>>,
    first: Vec<String>,
    first_repeat: bool,
    first_break: Option<String>,
    first_sort: bool,
    catalog: Arc<Catalog>,
    static_url: String,
    flag_url: String,
    default_locale: Locale,
}

impl Registry {
    /// Builds the default registry: the full dataset adjusted by common names,
    /// overrides and the `only` restriction.
    #[must_use]
    pub fn new(settings: &CountriesSettings) -> Self {
        let mut names: FxHashMap<String, Cow<'static, str>> = COUNTRIES
            .iter()
            .map(|record| (record.code.to_owned(), Cow::Borrowed(record.name)))
            .collect();

        if settings.common_names {
            for (code, name) in COMMON_NAMES {
                names.insert((*code).to_owned(), Cow::Borrowed(*name));
            }
        }

        for (code, name) in &settings.overrides {
            let code = normalize(code);
            match name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => {
                    names.insert(code, Cow::Owned(name.to_owned()));
                },
                _ => {
                    names.remove(&code);
                },
            }
        }

        let mut available: Vec<String> = if settings.only.is_empty() {
            names.keys().cloned().collect()
        } else {
            unique(settings.only.iter().map(normalize))
                .into_iter()
                .filter(|code| names.contains_key(code))
                .collect()
        };
        available.sort_unstable();

        debug!(
            countries = available.len(),
            overrides = settings.overrides.len(),
            "Country registry built"
        );

        Self {
            names,
            available,
            parent: None,
            first: unique(settings.first.iter().map(normalize)),
            first_repeat: settings.first_repeat,
            first_break: settings.first_break.clone(),
            first_sort: settings.first_sort,
            catalog: Arc::new(Catalog::from_table(&settings.translations)),
            static_url: settings.static_url.clone(),
            flag_url: settings.flag_url.clone(),
            default_locale: Locale::new(&settings.default_locale),
        }
    }

    /// The process-wide registry built from default settings.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Derives a registry offering exactly `entries` as choices.
    ///
    /// Names of codes outside the list still resolve through `self`; the flag
    /// URL environment and translations are inherited.
    #[must_use]
    pub fn custom<I, C, N>(self: &Arc<Self>, entries: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: Into<String>,
    {
        let mut names = FxHashMap::default();
        let mut available = Vec::new();
        for (code, name) in entries {
            let code = normalize(code.as_ref());
            if code.is_empty() {
                continue;
            }
            if names.insert(code.clone(), Cow::Owned(name.into())).is_none() {
                available.push(code);
            }
        }

        debug!(countries = available.len(), "Custom country registry built");

        Self {
            names,
            available,
            parent: Some(Arc::clone(self)),
            first: Vec::new(),
            first_repeat: false,
            first_break: None,
            first_sort: false,
            catalog: Arc::clone(&self.catalog),
            static_url: self.static_url.clone(),
            flag_url: self.flag_url.clone(),
            default_locale: self.default_locale.clone(),
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.parent.is_some()
    }

    /// Number of available codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Whether `code` is one of the available choices.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        let code = normalize(code);
        self.names.contains_key(&code) && self.available.contains(&code)
    }

    /// Width of the widest available code, never less than two.
    #[must_use]
    pub fn code_width(&self) -> usize {
        self.available.iter().map(|code| code.chars().count()).max().unwrap_or(2).max(2)
    }

    #[must_use]
    pub fn static_url(&self) -> &str {
        &self.static_url
    }

    #[must_use]
    pub fn flag_url(&self) -> &str {
        &self.flag_url
    }

    /// The locale name lookups use right now: the thread's active locale or
    /// the configured default.
    #[must_use]
    pub fn locale(&self) -> Locale {
        translation::active().unwrap_or_else(|| self.default_locale.clone())
    }

    /// Display name of `code` in the current locale; empty when unknown.
    #[must_use]
    pub fn name(&self, code: &str) -> String {
        self.name_in(code, &self.locale())
    }

    /// Display name of `code` in `locale`; empty when unknown.
    #[must_use]
    pub fn name_in(&self, code: &str, locale: &Locale) -> String {
        let code = normalize(code);
        if code.is_empty() {
            return String::new();
        }
        match self.names.get(&code) {
            Some(name) => self
                .catalog
                .translate(locale, &code)
                .map_or_else(|| name.as_ref().to_owned(), ToOwned::to_owned),
            None => self.parent.as_ref().map_or_else(String::new, |parent| parent.name_in(&code, locale)),
        }
    }

    /// ISO alpha-3 code; empty when unknown.
    #[must_use]
    pub fn alpha3(&self, code: &str) -> &'static str {
        INDEX.record(&normalize(code)).map_or("", |record| record.alpha3)
    }

    /// IOC code; empty when unknown or when the country has none.
    #[must_use]
    pub fn ioc_code(&self, code: &str) -> &'static str {
        INDEX.record(&normalize(code)).and_then(|record| record.ioc).unwrap_or_default()
    }

    /// ISO numeric code.
    #[must_use]
    pub fn numeric(&self, code: &str) -> Option<u16> {
        INDEX.record(&normalize(code)).map(|record| record.numeric)
    }

    /// Resolves an IOC code to an alpha-2 code.
    #[must_use]
    pub fn code_from_ioc(&self, ioc: &str) -> Option<&'static str> {
        let ioc = normalize(ioc);
        if ioc.is_empty() {
            return None;
        }
        INDEX.by_ioc.get(ioc.as_str()).copied()
    }

    /// Resolves an IOC code to a country bound to this registry.
    #[must_use]
    pub fn country_from_ioc(self: &Arc<Self>, ioc: &str) -> Option<Country> {
        self.code_from_ioc(ioc).map(|code| self.country(code))
    }

    /// Normalizes an alpha-2, alpha-3 or numeric code to alpha-2; empty when unknown.
    #[must_use]
    pub fn alpha2(&self, code: &str) -> String {
        let code = normalize(code);
        if self.names.contains_key(&code) || INDEX.record(&code).is_some() {
            return code;
        }
        let resolved = if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
            code.parse::<u16>().ok().and_then(|numeric| INDEX.by_numeric.get(&numeric).copied())
        } else {
            INDEX.by_alpha3.get(code.as_str()).copied()
        };
        resolved.map(ToOwned::to_owned).unwrap_or_default()
    }

    /// Finds the code whose English or translated name matches `name`, ignoring case.
    #[must_use]
    pub fn by_name(&self, name: &str, locale: &Locale) -> Option<String> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let mut codes: Vec<&String> = self.names.keys().collect();
        codes.sort_unstable();
        codes
            .into_iter()
            .find(|code| {
                self.names.get(*code).is_some_and(|english| english.to_lowercase() == needle)
                    || self
                        .catalog
                        .translate(locale, code)
                        .is_some_and(|translated| translated.to_lowercase() == needle)
            })
            .cloned()
    }

    /// Binds `code` to this registry.
    #[must_use]
    pub fn country(self: &Arc<Self>, code: impl Into<String>) -> Country {
        Country::with_registry(code, Arc::clone(self))
    }

    /// All available `(code, name)` pairs for the current locale.
    #[must_use]
    pub fn all_codes(&self) -> Vec<(String, String)> {
        self.all_codes_in(&self.locale())
    }

    /// All available `(code, name)` pairs sorted by their name in `locale`,
    /// preceded by the pinned `first` codes when configured.
    #[must_use]
    pub fn all_codes_in(&self, locale: &Locale) -> Vec<(String, String)> {
        let entry = |code: &String| (code.clone(), self.name_in(code, locale));

        let mut body: Vec<(String, String)> = self.available.iter().map(entry).collect();
        sort_by_name(&mut body);

        let mut pinned: Vec<(String, String)> = self
            .first
            .iter()
            .filter(|code| self.available.contains(*code))
            .map(entry)
            .collect();
        if pinned.is_empty() {
            return body;
        }
        if self.first_sort {
            sort_by_name(&mut pinned);
        }
        if !self.first_repeat {
            body.retain(|(code, _)| !self.first.contains(code));
        }
        if let Some(label) = &self.first_break {
            pinned.push((String::new(), label.clone()));
        }
        pinned.extend(body);
        pinned
    }
}

/// Trims and upper-cases a code.
pub(crate) fn normalize(code: impl AsRef<str>) -> String {
    code.as_ref().trim().to_ascii_uppercase()
}

/// Collation key: accents stripped, case folded.
fn sort_key(name: &str) -> String {
    name.nfkd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

fn sort_by_name(entries: &mut [(String, String)]) {
    entries.sort_by_cached_key(|(code, name)| (sort_key(name), code.clone()));
}

fn unique(codes: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    codes.filter(|code| !code.is_empty() && seen.insert(code.clone())).collect()
}
