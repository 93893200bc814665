//! Test doubles for the localisation layer.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{Arguments, AttrKey, BundleLookup, I18nError, MessageKey};

/// A bundle holding only the entries a test inserts.
///
/// Keys use Fluent's `message.attribute` spelling. Arguments are ignored, so
/// stored text is returned verbatim and missing entries fail exactly like a
/// bundle with a gap in it.
///
/// ```
/// use bindcheck_common::i18n::testing::StaticLookup;
/// use bindcheck_common::i18n::{Arguments, MessageKey, resolve_message_set};
///
/// let lookup = StaticLookup::new("cy")
///     .with("greeting", "Helo")
///     .with("greeting.note", "Nodyn");
///
/// // No `.help` attribute, so the set cannot be resolved.
/// let outcome = resolve_message_set(&lookup, MessageKey::new("greeting"), &Arguments::new());
/// assert!(outcome.is_err());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StaticLookup {
    locale: String,
    entries: BTreeMap<String, String>,
}

impl StaticLookup {
    /// An empty bundle reporting `locale` in its errors.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Adds `text` under `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    fn get(&self, key: String) -> Result<String, I18nError> {
        match self.entries.get(&key) {
            Some(text) => Ok(text.clone()),
            None => Err(I18nError::MissingMessage {
                key,
                locale: self.locale.clone(),
            }),
        }
    }
}

impl BundleLookup for StaticLookup {
    fn message(&self, key: MessageKey<'_>, _args: &Arguments<'_>) -> Result<String, I18nError> {
        self.get(key.to_string())
    }

    fn attribute(
        &self,
        key: MessageKey<'_>,
        attribute: AttrKey<'_>,
        _args: &Arguments<'_>,
    ) -> Result<String, I18nError> {
        self.get(format!("{key}.{}", attribute.as_str()))
    }
}

/// Collects the reports passed to a localisation bug reporter.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: RefCell<Vec<String>>,
}

impl RecordingReporter {
    /// A reporter callback that appends to this recorder.
    pub fn reporter(&self) -> impl FnOnce(String) + '_ {
        |report| self.reports.borrow_mut().push(report)
    }

    /// Reports received so far.
    #[must_use]
    pub fn reports(&self) -> Vec<String> {
        self.reports.borrow().clone()
    }
}
