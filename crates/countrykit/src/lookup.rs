//! Code comparison and the query-time lookups a persistence layer needs.

use crate::country::Country;
use crate::field::CountryField;
use crate::store::FieldStore;
use strum_macros::{Display, EnumString};

/// Either a plain code or a [`Country`], compared by upper-cased code.
#[derive(Debug, Clone, Copy)]
pub enum CodeRef<'a> {
    Code(&'a str),
    Country(&'a Country),
}

impl CodeRef<'_> {
    /// The code as given.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Code(code) => code,
            Self::Country(country) => country.code(),
        }
    }

    /// The upper-cased code a query layer compares against.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.code().to_ascii_uppercase()
    }
}

impl<'a> From<&'a str> for CodeRef<'a> {
    fn from(code: &'a str) -> Self {
        Self::Code(code)
    }
}

impl<'a> From<&'a String> for CodeRef<'a> {
    fn from(code: &'a String) -> Self {
        Self::Code(code)
    }
}

/// Case-insensitive code equality across plain codes and countries.
pub fn codes_equal<'a, 'b>(left: impl Into<CodeRef<'a>>, right: impl Into<CodeRef<'b>>) -> bool {
    left.into().code().eq_ignore_ascii_case(right.into().code())
}

/// How a stored column is matched against a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Lookup {
    /// The whole column equals the code.
    Exact,
    /// One element of a comma-joined column equals the code.
    Contains,
}

impl Lookup {
    /// The right-hand-side value to bind in a query.
    #[must_use]
    pub fn prepare<'a>(rhs: impl Into<CodeRef<'a>>) -> String {
        rhs.into().normalized()
    }

    /// Evaluates the lookup against a stored column; `NULL` never matches.
    #[must_use]
    pub fn matches<'a>(self, stored: Option<&str>, rhs: impl Into<CodeRef<'a>>) -> bool {
        let Some(stored) = stored else {
            return false;
        };
        let needle = Self::prepare(rhs);
        match self {
            Self::Exact => stored.eq_ignore_ascii_case(&needle),
            Self::Contains if needle.is_empty() => stored.trim().is_empty(),
            Self::Contains => stored.split(',').any(|code| code.trim().eq_ignore_ascii_case(&needle)),
        }
    }
}

/// Filters in-memory records by `field`'s lookup against `rhs`.
pub fn filter<'r, 'a, S: FieldStore>(
    records: &'r [S],
    field: &CountryField,
    rhs: impl Into<CodeRef<'a>>,
) -> Vec<&'r S> {
    let rhs = rhs.into();
    records.iter().filter(|record| field.matches(*record, rhs)).collect()
}
