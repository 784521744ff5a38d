//! Conversion between stored strings and [`Country`] values.
//!
//! Single-value fields store one code as given. Multi-value fields store an
//! upper-case, comma-joined list; order is kept and duplicates are not removed.

use crate::country::{Country, CountryAttr};
use crate::error::FieldError;
use crate::registry::{Registry, normalize};
use std::sync::Arc;

/// Marker accepted by validation as "no country".
pub const BLANK_CODE: &str = "";

/// Separator between codes of a multi-value column.
pub const SEPARATOR: char = ',';

/// One country given as input: a code or an existing [`Country`].
#[derive(Debug, Clone)]
pub enum CountryInput {
    Code(String),
    Country(Country),
}

impl CountryInput {
    fn code(&self) -> &str {
        match self {
            Self::Code(code) => code,
            Self::Country(country) => country.code(),
        }
    }
}

/// Anything a country field accepts on write.
#[derive(Debug, Clone, Default)]
pub enum FieldInput {
    #[default]
    Null,
    One(CountryInput),
    Many(Vec<CountryInput>),
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(Country),
    Multiple(Vec<Country>),
}

impl FieldValue {
    #[must_use]
    pub const fn as_single(&self) -> Option<&Country> {
        match self {
            Self::Single(country) => Some(country),
            Self::Multiple(_) => None,
        }
    }

    #[must_use]
    pub fn as_multiple(&self) -> Option<&[Country]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(countries) => Some(countries),
        }
    }

    /// The countries of this value; a single value is a one-element slice.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        match self {
            Self::Single(country) => std::slice::from_ref(country),
            Self::Multiple(countries) => countries,
        }
    }

    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.countries().iter().map(Country::code).collect()
    }

    /// An empty code, or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(country) => country.is_empty(),
            Self::Multiple(countries) => countries.is_empty(),
        }
    }
}

/// Decoder/encoder bound to a registry, flag template and multiplicity.
#[derive(Debug, Clone)]
pub struct Codec {
    registry: Arc<Registry>,
    flag_url: Option<String>,
    str_attr: Option<CountryAttr>,
    multiple: bool,
}

impl Codec {
    /// A single-value codec.
    #[must_use]
    pub const fn new(registry: Arc<Registry>) -> Self {
        Self { registry, flag_url: None, str_attr: None, multiple: false }
    }

    #[must_use]
    pub const fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    #[must_use]
    pub fn with_flag_url(mut self, template: Option<String>) -> Self {
        self.flag_url = template;
        self
    }

    #[must_use]
    pub const fn with_str_attr(mut self, attr: Option<CountryAttr>) -> Self {
        self.str_attr = attr;
        self
    }

    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.multiple
    }

    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Binds `code` to this codec's registry and display options.
    #[must_use]
    pub fn wrap(&self, code: impl Into<String>) -> Country {
        let mut country = Country::with_registry(code, Arc::clone(&self.registry));
        if let Some(template) = &self.flag_url {
            country = country.with_flag_url(template.clone());
        }
        if let Some(attr) = self.str_attr {
            country = country.with_str_attr(attr);
        }
        country
    }

    /// Decodes a stored value; `NULL` decodes like an empty string.
    #[must_use]
    pub fn decode(&self, raw: Option<&str>) -> FieldValue {
        let raw = raw.unwrap_or(BLANK_CODE);
        if self.multiple {
            FieldValue::Multiple(split_codes(raw).map(|code| self.wrap(code)).collect())
        } else {
            FieldValue::Single(self.wrap(raw))
        }
    }

    /// Encodes input into its stored form.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidInput`] when a single-value codec is given
    /// more than one country.
    pub fn encode(&self, value: impl Into<FieldInput>) -> Result<Option<String>, FieldError> {
        let value = value.into();
        if self.multiple {
            return Ok(Some(encode_multiple(&value)));
        }
        match value {
            FieldInput::Null => Ok(Some(String::new())),
            FieldInput::One(input) => Ok(Some(input.code().to_owned())),
            FieldInput::Many(inputs) => match inputs.as_slice() {
                [] => Ok(Some(String::new())),
                [input] => Ok(Some(input.code().to_owned())),
                _ => Err(FieldError::InvalidInput {
                    message: format!("{} countries given to a single-value field", inputs.len()).into(),
                    context: None,
                }),
            },
        }
    }

    /// Checks the shape of every code in `value`.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidCode`] for the first offending code; in
    /// multi-value mode the error carries the code's position.
    pub fn validate_codes(&self, value: &FieldValue) -> Result<(), FieldError> {
        match value {
            FieldValue::Single(country) => validate_code(country.code(), None),
            FieldValue::Multiple(countries) => countries
                .iter()
                .enumerate()
                .try_for_each(|(position, country)| validate_code(country.code(), Some(position))),
        }
    }
}

fn encode_multiple(value: &FieldInput) -> String {
    let items: &[CountryInput] = match value {
        FieldInput::Null => &[],
        FieldInput::One(input) => std::slice::from_ref(input),
        FieldInput::Many(inputs) => inputs,
    };
    items.iter().flat_map(|item| split_codes(item.code())).collect::<Vec<_>>().join(",")
}

/// Splits a comma-joined column into trimmed, upper-cased, non-empty codes.
pub fn split_codes(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(SEPARATOR).map(normalize).filter(|code| !code.is_empty())
}

/// Accepts exactly two uppercase ASCII letters, or [`BLANK_CODE`].
///
/// # Errors
/// Returns [`FieldError::InvalidCode`] naming the value and its position.
pub fn validate_code(code: &str, position: Option<usize>) -> Result<(), FieldError> {
    let well_formed = code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase());
    if well_formed || code == BLANK_CODE {
        Ok(())
    } else {
        Err(FieldError::InvalidCode { value: code.to_owned(), position, context: None })
    }
}

// --- Conversions ---

impl From<&str> for CountryInput {
    fn from(code: &str) -> Self {
        Self::Code(code.to_owned())
    }
}

impl From<String> for CountryInput {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

impl From<&String> for CountryInput {
    fn from(code: &String) -> Self {
        Self::Code(code.clone())
    }
}

impl From<Country> for CountryInput {
    fn from(country: Country) -> Self {
        Self::Country(country)
    }
}

impl From<&Country> for CountryInput {
    fn from(country: &Country) -> Self {
        Self::Country(country.clone())
    }
}

impl From<CountryInput> for FieldInput {
    fn from(input: CountryInput) -> Self {
        Self::One(input)
    }
}

impl From<&str> for FieldInput {
    fn from(code: &str) -> Self {
        Self::One(code.into())
    }
}

impl From<String> for FieldInput {
    fn from(code: String) -> Self {
        Self::One(code.into())
    }
}

impl From<&String> for FieldInput {
    fn from(code: &String) -> Self {
        Self::One(code.into())
    }
}

impl From<Country> for FieldInput {
    fn from(country: Country) -> Self {
        Self::One(country.into())
    }
}

impl From<&Country> for FieldInput {
    fn from(country: &Country) -> Self {
        Self::One(country.into())
    }
}

impl<T: Into<CountryInput>> From<Vec<T>> for FieldInput {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CountryInput>, const N: usize> From<[T; N]> for FieldInput {
    fn from(items: [T; N]) -> Self {
        Self::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<CountryInput>> From<&[T]> for FieldInput {
    fn from(items: &[T]) -> Self {
        Self::Many(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<FieldValue> for FieldInput {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Single(country) => Self::One(country.into()),
            FieldValue::Multiple(countries) => countries.into(),
        }
    }
}
