use crate::error::{SettingsError, SettingsErrorExt};
use config::{Config, Environment, File};
use countrykit_domain::settings::{Settings, SettingsInner};
use std::path::Path;
use tracing::{info, instrument};

/// Default settings file, looked up in the working directory with any
/// extension the `config` crate understands.
pub const DEFAULT_SETTINGS_FILE: &str = "countrykit";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "COUNTRYKIT";

/// Loads [`Settings`] from a file layered under environment overrides.
///
/// 1. **File**: `path` when given (it must exist), otherwise an optional
///    `countrykit.{toml,json,yaml,...}` in the working directory.
/// 2. **Environment**: variables prefixed with `COUNTRYKIT__`; nesting uses
///    double underscores, so `COUNTRYKIT__COUNTRIES__STATIC_URL` sets
///    `countries.static_url`. `countries.only` and `countries.first` take
///    comma-separated lists.
///
/// Anything not set keeps its default.
///
/// # Errors
/// Returns [`SettingsError::Config`] when the given file is missing or a
/// source does not match the settings structure.
#[instrument(skip_all)]
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<Settings, SettingsError> {
    let file = match &path {
        Some(path) => {
            info!(path = %path.as_ref().display(), "Loading settings");
            File::from(path.as_ref()).required(true)
        },
        None => {
            info!(name = DEFAULT_SETTINGS_FILE, "Loading settings from optional default file");
            File::with_name(DEFAULT_SETTINGS_FILE).required(false)
        },
    };

    let inner = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("countries.only")
                .with_list_parse_key("countries.first"),
        )
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<SettingsInner>()
        .context("Failed to deserialize settings")?;

    Ok(Settings::from(inner))
}
