//! # countrykit
//!
//! A country value type and a storage field mapping persisted ISO 3166-1
//! alpha-2 codes to rich [`Country`] objects (name, flag, alpha-3, IOC and
//! numeric codes), including a multi-value variant that keeps several codes
//! in one comma-joined column.
//!
//! * [`Registry`] resolves codes against the static dataset, optionally
//!   restricted or renamed by settings or by a per-field custom list.
//! * [`Country`] wraps one code and degrades to empty values for empty or
//!   unknown codes.
//! * [`Codec`] converts between stored strings and [`FieldValue`]s.
//! * [`CountryField`] reads, writes and validates the column on any
//!   [`FieldStore`].
//! * [`Lookup`] and [`codes_equal`] give the comparison semantics a query
//!   layer needs.
//!
//! ## Example
//!
//! ```rust
//! use countrykit::{CountryField, FieldStore, Record};
//!
//! let field = CountryField::builder("country").build()?;
//! let mut person = Record::new();
//! field.set(&mut person, "NZ")?;
//!
//! let value = field.get(Some(&person))?;
//! let country = value.as_single().map(|c| c.name());
//! assert_eq!(country.as_deref(), Some("New Zealand"));
//! assert_eq!(person.raw("country"), Some("NZ"));
//! # Ok::<(), countrykit::FieldError>(())
//! ```

pub mod codec;
pub mod country;
pub mod error;
pub mod field;
pub mod lookup;
pub mod registry;
pub mod settings;
pub mod store;
pub mod translation;

pub use codec::{BLANK_CODE, Codec, CountryInput, FieldInput, FieldValue};
pub use country::{Country, CountryAttr};
pub use countrykit_domain::settings::{CountriesSettings, LoggingSettings, Settings};
pub use error::{FieldError, SettingsError, SettingsErrorExt};
pub use field::{CountryField, CountryFieldBuilder, CustomCountries, Deconstructed, FieldOptions, full_clean};
pub use lookup::{CodeRef, Lookup, codes_equal};
pub use registry::Registry;
pub use settings::load_settings;
pub use store::{FieldStore, Record};
pub use translation::{Catalog, Locale, LocaleGuard};
