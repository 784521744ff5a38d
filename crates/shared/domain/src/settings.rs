use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_STATIC_URL: &str = "/static/";
pub const DEFAULT_FLAG_URL: &str = "flags/{code}.gif";
pub const DEFAULT_LOCALE: &str = "en";

/// Top-level settings shared by the library and the CLI.
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SettingsInner {
    pub countries: CountriesSettings,
    pub logging: LoggingSettings,
}

/// Thin Arc-wrapped settings for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(flatten, default)]
    inner: Arc<SettingsInner>,
}

impl Deref for Settings {
    type Target = SettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<SettingsInner> for Settings {
    fn from(inner: SettingsInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl DerefMut for Settings {
    fn deref_mut(&mut self) -> &mut SettingsInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Country registry and flag rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CountriesSettings {
    /// Base URL relative flag templates are resolved against.
    pub static_url: String,
    /// Flag URL template, `{code}` and `{code_upper}` are substituted.
    pub flag_url: String,
    /// Prefer everyday short names ("Bolivia") over ISO official ones.
    pub common_names: bool,
    /// Rename or add codes; a `null` or empty name removes the code.
    pub overrides: BTreeMap<String, Option<String>>,
    /// Restrict the available codes to this list.
    pub only: Vec<String>,
    /// Codes listed ahead of the alphabetical body.
    pub first: Vec<String>,
    pub first_repeat: bool,
    /// Label of the separator entry emitted after the `first` codes.
    pub first_break: Option<String>,
    pub first_sort: bool,
    pub default_locale: String,
    /// Translated names, keyed by locale and then by code.
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// Write the rolling file output as JSON lines.
    pub json: bool,
    /// Directory of rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    /// Extra directives such as `countrykit=debug`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for CountriesSettings {
    fn default() -> Self {
        Self {
            static_url: DEFAULT_STATIC_URL.to_owned(),
            flag_url: DEFAULT_FLAG_URL.to_owned(),
            common_names: true,
            overrides: BTreeMap::new(),
            only: Vec::new(),
            first: Vec::new(),
            first_repeat: false,
            first_break: None,
            first_sort: false,
            default_locale: DEFAULT_LOCALE.to_owned(),
            translations: BTreeMap::new(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None, filter: None }
    }
}
