//! The `Country` value object.
//!
//! A `Country` wraps a code exactly as given plus a shared reference to the
//! [`Registry`] it resolves against. Every derived property degrades to an
//! empty value for empty or unknown codes.

use crate::lookup::{CodeRef, codes_equal};
use crate::registry::Registry;
use crate::translation::Locale;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// CSS class shared by every sprite flag.
pub const FLAG_SPRITE_CLASS: &str = "flag-sprite";

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Derived properties a country can be rendered as.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CountryAttr {
    Code,
    Name,
    Flag,
    UnicodeFlag,
    FlagCss,
    #[strum(serialize = "alpha3")]
    #[serde(rename = "alpha3")]
    Alpha3,
    IocCode,
    Numeric,
    NumericPadded,
}

/// A country code bound to a registry.
#[derive(Clone)]
pub struct Country {
    code: String,
    key: String,
    flag_url: Option<String>,
    str_attr: Option<CountryAttr>,
    registry: Arc<Registry>,
}

impl Country {
    /// Creates a country resolving against [`Registry::global`].
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self::with_registry(code, Registry::global())
    }

    #[must_use]
    pub fn with_registry(code: impl Into<String>, registry: Arc<Registry>) -> Self {
        let code = code.into();
        let key = code.to_ascii_uppercase();
        Self { code, key, flag_url: None, str_attr: None, registry }
    }

    /// Overrides the registry's flag URL template; an empty template disables flags.
    #[must_use]
    pub fn with_flag_url(mut self, template: impl Into<String>) -> Self {
        self.flag_url = Some(template.into());
        self
    }

    /// Makes `Display` render `attr` instead of the raw code.
    #[must_use]
    pub const fn with_str_attr(mut self, attr: CountryAttr) -> Self {
        self.str_attr = Some(attr);
        self
    }

    /// Resolves an IOC code against the global registry.
    #[must_use]
    pub fn from_ioc(ioc: &str) -> Option<Self> {
        Registry::global().country_from_ioc(ioc)
    }

    /// The code exactly as it was given.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// "No country selected".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Number of characters in the code.
    #[must_use]
    pub fn len(&self) -> usize {
        self.code.chars().count()
    }

    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    #[must_use]
    pub fn flag_url_template(&self) -> Option<&str> {
        self.flag_url.as_deref()
    }

    #[must_use]
    pub const fn str_attr(&self) -> Option<CountryAttr> {
        self.str_attr
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.registry.name(&self.code)
    }

    #[must_use]
    pub fn name_in(&self, locale: &Locale) -> String {
        self.registry.name_in(&self.code, locale)
    }

    /// Flag image URL rendered from the template and resolved against the
    /// registry's static URL when relative.
    #[must_use]
    pub fn flag(&self) -> String {
        if self.code.is_empty() {
            return String::new();
        }
        let template = self.flag_url.as_deref().unwrap_or_else(|| self.registry.flag_url());
        if template.is_empty() {
            return String::new();
        }
        let url = template
            .replace("{code_upper}", &self.key)
            .replace("{code}", &self.code.to_ascii_lowercase());
        join_static(self.registry.static_url(), url)
    }

    /// Flag emoji built from regional indicator symbols.
    #[must_use]
    pub fn unicode_flag(&self) -> String {
        let bytes = self.code.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return String::new();
        }
        bytes
            .iter()
            .filter_map(|b| {
                char::from_u32(REGIONAL_INDICATOR_A + u32::from(b.to_ascii_uppercase() - b'A'))
            })
            .collect()
    }

    /// Sprite classes, e.g. `flag-sprite flag-n flag-_z` for `NZ`.
    #[must_use]
    pub fn flag_css(&self) -> String {
        if self.code.is_empty() {
            return String::new();
        }
        let mut chars = self.code.chars().map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() { c } else { '_' }
        });
        let mut css = String::from(FLAG_SPRITE_CLASS);
        if let Some(x) = chars.next() {
            css.push_str(" flag-");
            css.push(x);
        }
        if let Some(y) = chars.next() {
            css.push_str(" flag-_");
            css.push(y);
        }
        css
    }

    #[must_use]
    pub fn alpha3(&self) -> &'static str {
        self.registry.alpha3(&self.code)
    }

    #[must_use]
    pub fn ioc_code(&self) -> &'static str {
        self.registry.ioc_code(&self.code)
    }

    #[must_use]
    pub fn numeric(&self) -> Option<u16> {
        self.registry.numeric(&self.code)
    }

    /// Numeric code zero-padded to three digits.
    #[must_use]
    pub fn numeric_padded(&self) -> Option<String> {
        self.numeric().map(|numeric| format!("{numeric:03}"))
    }

    /// Renders one derived property as text.
    #[must_use]
    pub fn attr(&self, attr: CountryAttr) -> String {
        match attr {
            CountryAttr::Code => self.code.clone(),
            CountryAttr::Name => self.name(),
            CountryAttr::Flag => self.flag(),
            CountryAttr::UnicodeFlag => self.unicode_flag(),
            CountryAttr::FlagCss => self.flag_css(),
            CountryAttr::Alpha3 => self.alpha3().to_owned(),
            CountryAttr::IocCode => self.ioc_code().to_owned(),
            CountryAttr::Numeric => self.numeric().map(|n| n.to_string()).unwrap_or_default(),
            CountryAttr::NumericPadded => self.numeric_padded().unwrap_or_default(),
        }
    }
}

/// Joins a relative URL onto `base` the way a browser resolves it against a
/// directory URL; absolute and root-relative URLs are returned as-is.
fn join_static(base: &str, url: String) -> String {
    if base.is_empty() || url.starts_with('/') || has_scheme(&url) {
        return url;
    }
    let authority = base.find("://").map_or(0, |i| i + 3);
    match base[authority..].rfind('/') {
        Some(i) => format!("{}/{url}", &base[..authority + i]),
        None if authority > 0 => format!("{base}/{url}"),
        None => url,
    }
}

fn has_scheme(url: &str) -> bool {
    url.split_once(':').is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.str_attr {
            Some(attr) => f.write_str(&self.attr(attr)),
            None => f.write_str(&self.code),
        }
    }
}

impl fmt::Debug for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country(code={:?}", self.code)?;
        if let Some(url) = &self.flag_url {
            write!(f, ", flag_url={url:?}")?;
        }
        if let Some(attr) = self.str_attr {
            write!(f, ", str_attr={:?}", attr.as_ref())?;
        }
        f.write_str(")")
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        codes_equal(self, other)
    }
}

impl Eq for Country {}

impl PartialEq<str> for Country {
    fn eq(&self, other: &str) -> bool {
        codes_equal(self, other)
    }
}

impl PartialEq<&str> for Country {
    fn eq(&self, other: &&str) -> bool {
        codes_equal(self, *other)
    }
}

impl PartialEq<String> for Country {
    fn eq(&self, other: &String) -> bool {
        codes_equal(self, other)
    }
}

impl PartialEq<Country> for &str {
    fn eq(&self, other: &Country) -> bool {
        codes_equal(*self, other)
    }
}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Borrows the upper-cased code, so maps keyed by `Country` accept `&str` lookups.
impl Borrow<str> for Country {
    fn borrow(&self) -> &str {
        &self.key
    }
}

impl<'a> From<&'a Country> for CodeRef<'a> {
    fn from(country: &'a Country) -> Self {
        CodeRef::Country(country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countrykit_domain::settings::CountriesSettings;
    use std::collections::HashMap;
    use std::hash::BuildHasher;
    use std::str::FromStr;

    fn registry_with_static(static_url: &str, flag_url: &str) -> Arc<Registry> {
        let settings = CountriesSettings {
            static_url: static_url.to_owned(),
            flag_url: flag_url.to_owned(),
            ..CountriesSettings::default()
        };
        Arc::new(Registry::new(&settings))
    }

    #[test]
    fn test_join_static() {
        assert_eq!(join_static("/static-assets/", "flags/nz.gif".to_owned()), "/static-assets/flags/nz.gif");
        assert_eq!(join_static("/static", "flags/nz.gif".to_owned()), "/flags/nz.gif");
        assert_eq!(join_static("https://cdn.example.com", "nz.gif".to_owned()), "https://cdn.example.com/nz.gif");
        assert_eq!(join_static("", "flags/nz.gif".to_owned()), "flags/nz.gif");
        assert_eq!(join_static("/static/", "/img/nz.gif".to_owned()), "/img/nz.gif");
        assert_eq!(join_static("/static/", "//cdn/nz.gif".to_owned()), "//cdn/nz.gif");
        assert_eq!(join_static("/static/", "https://x/nz.gif".to_owned()), "https://x/nz.gif");
    }

    #[test]
    fn test_flag_templates() {
        let registry = registry_with_static("/static-assets/", "img/flag-{code_upper}.png");
        assert_eq!(registry.country("NZ").flag(), "/static-assets/img/flag-NZ.png");
        assert_eq!(registry.country("nz").flag(), "/static-assets/img/flag-NZ.png");

        let registry = registry_with_static("/static-assets/", "https://flags.example.com/{code_upper}.PNG");
        assert_eq!(registry.country("NZ").flag(), "https://flags.example.com/NZ.PNG");

        let country = Country::new("US").with_flag_url("//flags.example.com/{code}.gif");
        assert_eq!(country.flag(), "//flags.example.com/us.gif");
    }

    #[test]
    fn test_flag_css_replaces_non_letters() {
        assert_eq!(Country::new("NZ").flag_css(), "flag-sprite flag-n flag-_z");
        assert_eq!(Country::new("N1").flag_css(), "flag-sprite flag-n flag-__");
        assert_eq!(Country::new("").flag_css(), "");
    }

    #[test]
    fn test_unicode_flag() {
        assert_eq!(Country::new("AU").unicode_flag(), "🇦🇺");
        assert_eq!(Country::new("de").unicode_flag(), "🇩🇪");
        assert_eq!(Country::new("").unicode_flag(), "");
        assert_eq!(Country::new("A1").unicode_flag(), "");
        assert_eq!(Country::new("AUS").unicode_flag(), "");
    }

    #[test]
    fn test_debug_lists_set_options() {
        assert_eq!(format!("{:?}", Country::new("XX")), "Country(code=\"XX\")");
        assert_eq!(
            format!("{:?}", Country::new("XX").with_flag_url("")),
            "Country(code=\"XX\", flag_url=\"\")"
        );
        assert_eq!(
            format!("{:?}", Country::new("XX").with_str_attr(CountryAttr::Name)),
            "Country(code=\"XX\", str_attr=\"name\")"
        );
    }

    #[test]
    fn test_hash_matches_code_string() {
        let state = std::hash::RandomState::new();
        assert_eq!(state.hash_one(Country::new("XX").with_flag_url("")), state.hash_one("XX"));
        assert_eq!(state.hash_one(Country::new("nz")), state.hash_one("NZ"));

        let mut visits = HashMap::new();
        visits.insert(Country::new("NZ"), 3);
        assert_eq!(visits.get("NZ"), Some(&3));
    }

    #[test]
    fn test_attr_names_round_trip() {
        use strum::IntoEnumIterator;

        for attr in CountryAttr::iter() {
            assert_eq!(CountryAttr::from_str(attr.as_ref()).ok(), Some(attr));
        }
        assert_eq!(CountryAttr::Alpha3.as_ref(), "alpha3");
        assert_eq!(CountryAttr::NumericPadded.to_string(), "numeric_padded");
    }
}
