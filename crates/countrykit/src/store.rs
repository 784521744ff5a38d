//! The minimal storage interface a country field needs from a model.

use fxhash::FxHashMap;

/// Raw column access on a model instance.
///
/// `None` is `NULL`; an absent column reads as `NULL` too.
pub trait FieldStore {
    fn raw(&self, field: &str) -> Option<&str>;
    fn set_raw(&mut self, field: &str, value: Option<String>);
}

/// An in-memory model instance: a bag of nullable string columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: FxHashMap<String, Option<String>>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column while building a record.
    #[must_use]
    pub fn with(mut self, field: &str, value: Option<&str>) -> Self {
        self.values.insert(field.to_owned(), value.map(ToOwned::to_owned));
        self
    }

    /// Whether the column was ever written, even as `NULL`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }
}

impl FieldStore for Record {
    fn raw(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(Option::as_deref)
    }

    fn set_raw(&mut self, field: &str, value: Option<String>) {
        self.values.insert(field.to_owned(), value);
    }
}
