//! # Domain Models
//!
//! Pure data for the country field: the ISO 3166-1 dataset and the settings
//! types. Keep it lean: no I/O and no lookup logic, only data and tiny helpers.

pub mod data;
pub mod settings;

pub use data::{COMMON_NAMES, COUNTRIES, CountryRecord};
