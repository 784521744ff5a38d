use std::borrow::Cow;

/// Errors raised by the country field: misuse, failed validation, bad configuration.
///
/// Lookup misses are not errors; derived properties of unknown codes degrade
/// to empty values instead.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The descriptor was accessed without a model instance.
    #[error("Country field accessed without an instance{}: {message}", format_context(.context))]
    Usage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A code is neither two uppercase ASCII letters nor the blank marker.
    #[error(
        "Invalid country code {value:?}{}{}",
        format_position(.position),
        format_context(.context)
    )]
    InvalidCode { value: String, position: Option<usize>, context: Option<Cow<'static, str>> },

    #[error("This field cannot be blank{}", format_context(.context))]
    Blank { context: Option<Cow<'static, str>> },

    #[error("This field cannot be null{}", format_context(.context))]
    Null { context: Option<Cow<'static, str>> },

    /// Input that cannot be stored by this field at all.
    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid field configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl FieldError {
    /// Attaches a context label (usually the field name) to the error.
    #[must_use]
    pub fn with_context(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        match &mut self {
            Self::Usage { context, .. }
            | Self::InvalidCode { context, .. }
            | Self::Blank { context }
            | Self::Null { context }
            | Self::InvalidInput { context, .. }
            | Self::InvalidConfiguration { context, .. } => *context = Some(label.into()),
        }
        self
    }

    /// Whether this is a validation failure (as opposed to misuse or configuration).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCode { .. } | Self::Blank { .. } | Self::Null { .. })
    }
}

/// Errors raised while loading [`countrykit_domain::settings::Settings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl From<config::ConfigError> for SettingsError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Attaches context to `config` results while converting them into [`SettingsError`].
pub trait SettingsErrorExt<T> {
    /// # Errors
    /// Returns the wrapped error with the given context.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError>;
}

impl<T> SettingsErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError> {
        self.map_err(|source| SettingsError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

fn format_position(position: &Option<usize>) -> Cow<'static, str> {
    position.map_or(Cow::Borrowed(""), |p| Cow::Owned(format!(" at position {p}")))
}
