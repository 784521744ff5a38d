//! The country field descriptor.
//!
//! A [`CountryField`] is configured once and then used as an explicit accessor
//! over model instances implementing [`FieldStore`]: [`CountryField::get`]
//! decodes the stored column, [`CountryField::set`] encodes and stores.

use crate::codec::{Codec, FieldInput, FieldValue};
use crate::country::CountryAttr;
use crate::error::FieldError;
use crate::lookup::{self, CodeRef, Lookup};
use crate::registry::Registry;
use crate::store::FieldStore;
use crate::translation::Locale;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Import path reported by [`CountryField::deconstruct`].
pub const FIELD_PATH: &str = "countrykit::CountryField";

/// Label of the blank form choice when none is configured.
pub const DEFAULT_BLANK_LABEL: &str = "---------";

const MAX_LENGTH_KEY: &str = "max_length";

/// A named, ordered list of `(code, name)` pairs replacing the default choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCountries {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl CustomCountries {
    #[must_use]
    pub fn new<I, C, N>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        Self {
            name: name.into(),
            entries: entries.into_iter().map(|(code, name)| (code.into(), name.into())).collect(),
        }
    }
}

/// Per-field configuration. Serializes only the options that differ from
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    #[serde(skip_serializing_if = "is_false")]
    pub multiple: bool,
    #[serde(rename = "countries", skip_serializing_if = "Option::is_none")]
    pub custom_countries: Option<CustomCountries>,
    #[serde(skip_serializing_if = "is_false")]
    pub blank: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub null: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str_attr: Option<CountryAttr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blank_label: Option<String>,
    #[serde(skip_serializing_if = "is_true")]
    pub editable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            multiple: false,
            custom_countries: None,
            blank: false,
            null: false,
            flag_url: None,
            str_attr: None,
            blank_label: None,
            editable: true,
            default: None,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_true(value: &bool) -> bool {
    *value
}

/// What a schema tool needs to rebuild a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deconstructed {
    pub name: String,
    pub path: &'static str,
    pub kwargs: Map<String, Value>,
}

/// Builder for [`CountryField`].
#[derive(Debug, Clone)]
#[must_use]
pub struct CountryFieldBuilder {
    name: String,
    options: FieldOptions,
    registry: Option<Arc<Registry>>,
}

impl CountryFieldBuilder {
    pub const fn multiple(mut self, multiple: bool) -> Self {
        self.options.multiple = multiple;
        self
    }

    pub fn countries(mut self, countries: CustomCountries) -> Self {
        self.options.custom_countries = Some(countries);
        self
    }

    pub const fn blank(mut self, blank: bool) -> Self {
        self.options.blank = blank;
        self
    }

    pub const fn null(mut self, null: bool) -> Self {
        self.options.null = null;
        self
    }

    pub fn flag_url(mut self, template: impl Into<String>) -> Self {
        self.options.flag_url = Some(template.into());
        self
    }

    pub const fn str_attr(mut self, attr: CountryAttr) -> Self {
        self.options.str_attr = Some(attr);
        self
    }

    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.options.blank_label = Some(label.into());
        self
    }

    pub const fn editable(mut self, editable: bool) -> Self {
        self.options.editable = editable;
        self
    }

    pub fn default(mut self, code: impl Into<String>) -> Self {
        self.options.default = Some(code.into());
        self
    }

    /// Base registry; defaults to [`Registry::global`].
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replaces every option at once.
    pub fn options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// # Errors
    /// Returns [`FieldError::InvalidConfiguration`] when `null` is combined
    /// with `multiple`, or when the custom country list is empty.
    pub fn build(self) -> Result<CountryField, FieldError> {
        let Self { name, options, registry } = self;
        let configuration_error = |message: &'static str| {
            FieldError::InvalidConfiguration { message: message.into(), context: None }
                .with_context(name.clone())
        };

        if options.null && options.multiple {
            return Err(configuration_error("multiple-value fields cannot be null"));
        }

        let base = registry.unwrap_or_else(Registry::global);
        let registry = match &options.custom_countries {
            Some(custom) if custom.entries.is_empty() => {
                return Err(configuration_error("custom country list is empty"));
            },
            Some(custom) => Arc::new(base.custom(custom.entries.iter().map(|(c, n)| (c, n.clone())))),
            None => base,
        };

        let codec = Codec::new(registry)
            .multiple(options.multiple)
            .with_flag_url(options.flag_url.clone())
            .with_str_attr(options.str_attr);

        Ok(CountryField { name, options, codec })
    }
}

/// A configured country column of a model.
#[derive(Debug, Clone)]
pub struct CountryField {
    name: String,
    options: FieldOptions,
    codec: Codec,
}

impl CountryField {
    pub fn builder(name: impl Into<String>) -> CountryFieldBuilder {
        CountryFieldBuilder { name: name.into(), options: FieldOptions::default(), registry: None }
    }

    /// # Errors
    /// See [`CountryFieldBuilder::build`].
    pub fn from_options(name: impl Into<String>, options: FieldOptions) -> Result<Self, FieldError> {
        Self::builder(name).options(options).build()
    }

    /// Rebuilds a field from the output of [`CountryField::deconstruct`].
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidConfiguration`] when the keyword options
    /// do not describe a valid field.
    pub fn from_deconstructed(deconstructed: &Deconstructed) -> Result<Self, FieldError> {
        let mut kwargs = deconstructed.kwargs.clone();
        kwargs.remove(MAX_LENGTH_KEY);
        let options: FieldOptions = serde_json::from_value(Value::Object(kwargs)).map_err(|e| {
            FieldError::InvalidConfiguration { message: e.to_string().into(), context: None }
                .with_context(deconstructed.name.clone())
        })?;
        Self::from_options(deconstructed.name.clone(), options)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn options(&self) -> &FieldOptions {
        &self.options
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec {
        &self.codec
    }

    /// The registry values of this field resolve against.
    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        self.codec.registry()
    }

    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.options.multiple
    }

    /// Reads and decodes the field from `instance`.
    ///
    /// # Errors
    /// Returns [`FieldError::Usage`] when called without an instance.
    pub fn get<S: FieldStore + ?Sized>(&self, instance: Option<&S>) -> Result<FieldValue, FieldError> {
        let instance = instance.ok_or_else(|| {
            FieldError::Usage {
                message: "read the field through a model instance".into(),
                context: None,
            }
            .with_context(self.name.clone())
        })?;
        Ok(self.from_raw(instance.raw(&self.name)))
    }

    /// Encodes `value` and stores it on `instance`.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidInput`] when a single-value field is given
    /// several countries.
    pub fn set<S: FieldStore + ?Sized>(
        &self,
        instance: &mut S,
        value: impl Into<FieldInput>,
    ) -> Result<(), FieldError> {
        let raw = self.to_raw(value)?;
        instance.set_raw(&self.name, raw);
        Ok(())
    }

    /// Writes the default value to `instance`: the configured default, `NULL`
    /// for nullable fields, otherwise an empty value.
    ///
    /// # Errors
    /// See [`CountryField::set`].
    pub fn init<S: FieldStore + ?Sized>(&self, instance: &mut S) -> Result<(), FieldError> {
        let raw = match &self.options.default {
            Some(code) => self.to_raw(code.as_str())?,
            None if self.options.null => None,
            None => Some(String::new()),
        };
        instance.set_raw(&self.name, raw);
        Ok(())
    }

    /// The stored form of `value`. Nullable single-value fields store `None`
    /// and empty input as `NULL`; every other field stores them as `""`.
    ///
    /// # Errors
    /// See [`CountryField::set`].
    pub fn to_raw(&self, value: impl Into<FieldInput>) -> Result<Option<String>, FieldError> {
        let raw = self.codec.encode(value).map_err(|e| e.with_context(self.name.clone()))?;
        if self.options.null && raw.as_deref() == Some("") {
            return Ok(None);
        }
        Ok(raw)
    }

    #[must_use]
    pub fn from_raw(&self, raw: Option<&str>) -> FieldValue {
        self.codec.decode(raw)
    }

    /// Validates the value stored on `instance`.
    ///
    /// # Errors
    /// Returns the first validation failure; see [`CountryField::validate_raw`].
    pub fn validate<S: FieldStore + ?Sized>(&self, instance: &S) -> Result<(), FieldError> {
        self.validate_raw(instance.raw(&self.name))
    }

    /// Validates a stored value. Non-editable fields always pass.
    ///
    /// # Errors
    /// * [`FieldError::Null`] for `NULL` in a field that is not nullable.
    /// * [`FieldError::InvalidCode`] for the first malformed code.
    /// * [`FieldError::Blank`] for an empty value in a field that is not blank.
    pub fn validate_raw(&self, raw: Option<&str>) -> Result<(), FieldError> {
        if !self.options.editable {
            return Ok(());
        }
        self.check(raw).map_err(|err| {
            let err = err.with_context(self.name.clone());
            debug!(field = %self.name, error = %err, "Country field validation failed");
            err
        })
    }

    fn check(&self, raw: Option<&str>) -> Result<(), FieldError> {
        if raw.is_none() && !self.options.multiple && !self.options.null {
            return Err(FieldError::Null { context: None });
        }
        let value = self.from_raw(raw);
        self.codec.validate_codes(&value)?;
        if value.is_empty() && !self.options.blank {
            return Err(FieldError::Blank { context: None });
        }
        Ok(())
    }

    /// `(code, name)` choices in the current locale.
    #[must_use]
    pub fn choices(&self) -> Vec<(String, String)> {
        self.registry().all_codes()
    }

    #[must_use]
    pub fn choices_in(&self, locale: &Locale) -> Vec<(String, String)> {
        self.registry().all_codes_in(locale)
    }

    /// Choices for a form select, led by the blank entry where one applies.
    #[must_use]
    pub fn form_choices(&self) -> Vec<(String, String)> {
        self.with_blank_choice(self.choices())
    }

    #[must_use]
    pub fn form_choices_in(&self, locale: &Locale) -> Vec<(String, String)> {
        self.with_blank_choice(self.choices_in(locale))
    }

    fn with_blank_choice(&self, choices: Vec<(String, String)>) -> Vec<(String, String)> {
        let include_blank =
            !self.options.multiple && (self.options.blank || self.options.default.is_none());
        if !include_blank {
            return choices;
        }
        let mut with_blank = Vec::with_capacity(choices.len() + 1);
        with_blank.push((String::new(), self.blank_label().to_owned()));
        with_blank.extend(choices);
        with_blank
    }

    #[must_use]
    pub fn blank_label(&self) -> &str {
        self.options.blank_label.as_deref().unwrap_or(DEFAULT_BLANK_LABEL)
    }

    /// Width of the storage column.
    #[must_use]
    pub fn max_length(&self) -> usize {
        let width = self.registry().code_width();
        if self.options.multiple {
            ((width + 1) * self.registry().len()).saturating_sub(1)
        } else {
            width
        }
    }

    /// Name, path and keyword options (the non-default ones plus
    /// `max_length`) that rebuild this field.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidConfiguration`] when the options cannot
    /// be serialized.
    pub fn deconstruct(&self) -> Result<Deconstructed, FieldError> {
        let mut kwargs = match serde_json::to_value(&self.options) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(e) => {
                return Err(FieldError::InvalidConfiguration {
                    message: e.to_string().into(),
                    context: None,
                }
                .with_context(self.name.clone()));
            },
        };
        kwargs.insert(MAX_LENGTH_KEY.to_owned(), Value::from(self.max_length()));
        Ok(Deconstructed { name: self.name.clone(), path: FIELD_PATH, kwargs })
    }

    /// `contains` for multi-value fields, `exact` otherwise.
    #[must_use]
    pub const fn lookup(&self) -> Lookup {
        if self.options.multiple { Lookup::Contains } else { Lookup::Exact }
    }

    /// Whether the value stored on `instance` matches `rhs` under [`Self::lookup`].
    #[must_use]
    pub fn matches<'a, S: FieldStore + ?Sized>(&self, instance: &S, rhs: impl Into<CodeRef<'a>>) -> bool {
        self.lookup().matches(instance.raw(&self.name), rhs)
    }

    /// The records whose value matches `rhs`.
    #[must_use]
    pub fn filter<'r, 'a, S: FieldStore>(&self, records: &'r [S], rhs: impl Into<CodeRef<'a>>) -> Vec<&'r S> {
        lookup::filter(records, self, rhs)
    }
}

/// Validates every field of `instance`, collecting one error per failing field.
///
/// # Errors
/// Returns every failure when at least one field is invalid.
pub fn full_clean<S: FieldStore + ?Sized>(instance: &S, fields: &[&CountryField]) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = fields.iter().filter_map(|field| field.validate(instance).err()).collect();
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Record;
    use serde_json::json;

    #[test]
    fn test_options_serialize_only_non_defaults() {
        assert_eq!(serde_json::to_value(FieldOptions::default()).unwrap(), json!({}));

        let options = FieldOptions { editable: false, blank: true, ..FieldOptions::default() };
        assert_eq!(serde_json::to_value(options).unwrap(), json!({"blank": true, "editable": false}));
    }

    #[test]
    fn test_null_multiple_is_rejected() {
        let err = CountryField::builder("countries").multiple(true).null(true).build().unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_empty_custom_list_is_rejected() {
        let countries = CustomCountries::new("Nowhere", Vec::<(&str, &str)>::new());
        let err = CountryField::builder("fantasy").countries(countries).build().unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_null_field_stores_empty_as_null() {
        let field = CountryField::builder("country").null(true).blank(true).build().unwrap();
        let mut record = Record::new();
        field.set(&mut record, "").unwrap();
        assert!(record.contains("country"));
        assert_eq!(record.raw("country"), None);
        assert!(field.validate(&record).is_ok());
    }

    #[test]
    fn test_init_writes_default() {
        let field = CountryField::builder("favourite").default("NZ").build().unwrap();
        let mut record = Record::new();
        field.init(&mut record).unwrap();
        assert_eq!(record.raw("favourite"), Some("NZ"));

        let field = CountryField::builder("country").build().unwrap();
        field.init(&mut record).unwrap();
        assert_eq!(record.raw("country"), Some(""));
    }

    #[test]
    fn test_lookup_follows_multiplicity() {
        let single = CountryField::builder("country").build().unwrap();
        let multiple = CountryField::builder("countries").multiple(true).build().unwrap();
        assert_eq!(single.lookup(), Lookup::Exact);
        assert_eq!(multiple.lookup(), Lookup::Contains);
    }
}
