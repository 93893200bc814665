//! Fluent lookups against one resolved locale.

use std::borrow::Cow;
use std::collections::HashMap;

use fluent_templates::Loader;
use fluent_templates::fluent_bundle::FluentValue;
use thiserror::Error;

use super::locales::match_locale;
use super::{FALLBACK_LANGUAGE, LOADER, LanguageIdentifier};

/// HashMap wrapper used when passing Fluent arguments to lookups.
pub type Arguments<'a> = HashMap<Cow<'static, str>, FluentValue<'a>>;

/// Error raised when localisation data cannot satisfy a caller request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when the requested message slug is missing for the resolved locale.
    #[error("message `{key}` missing for locale `{locale}`")]
    MissingMessage {
        /// Fluent message key, including any attribute suffix.
        key: String,
        /// Locale the lookup ran against.
        locale: String,
    },
}

/// Looks up diagnostic text in one bundled locale.
///
/// Unknown tags resolve to `en-GB` up front, so later lookups never switch
/// locale midway through a diagnostic.
#[derive(Clone, Debug)]
pub struct Localizer {
    language: LanguageIdentifier,
    fallback_used: bool,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::fallback()
    }
}

impl Localizer {
    /// Creates a localizer for the bundle serving `locale`.
    ///
    /// ```
    /// use bindcheck_common::i18n::Localizer;
    ///
    /// let welsh = Localizer::new(Some("cy-GB"));
    /// assert_eq!(welsh.locale(), "cy");
    /// assert!(!welsh.used_fallback());
    ///
    /// let fallback = Localizer::new(Some("zz"));
    /// assert_eq!(fallback.locale(), "en-GB");
    /// assert!(fallback.used_fallback());
    /// ```
    #[must_use]
    pub fn new(locale: Option<&str>) -> Self {
        locale
            .and_then(match_locale)
            .map_or_else(Self::fallback, |language| Self {
                language: language.clone(),
                fallback_used: false,
            })
    }

    /// The bundle's language identifier.
    #[must_use]
    pub const fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    /// The bundle's tag, such as `cy`.
    #[must_use]
    pub fn locale(&self) -> String {
        self.language.to_string()
    }

    /// Whether no bundle matched the requested locale.
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.fallback_used
    }

    /// Message text for `key` without arguments.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when neither this bundle nor the
    /// fallback defines `key`.
    pub fn message(&self, key: &str) -> Result<String, I18nError> {
        self.lookup(key, None)
    }

    /// Message text for `key` with `args` interpolated.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when neither this bundle nor the
    /// fallback defines `key`.
    pub fn message_with_args(&self, key: &str, args: &Arguments<'_>) -> Result<String, I18nError> {
        self.lookup(key, Some(args))
    }

    /// Attribute text such as `binds-method-not-abstract.note`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when no bundle defines the
    /// attribute.
    pub fn attribute_with_args(
        &self,
        key: &str,
        attribute: &str,
        args: &Arguments<'_>,
    ) -> Result<String, I18nError> {
        self.lookup(&format!("{key}.{attribute}"), Some(args))
    }

    fn lookup(&self, key: &str, args: Option<&Arguments<'_>>) -> Result<String, I18nError> {
        let text = match args {
            Some(arguments) => LOADER.try_lookup_with_args(&self.language, key, arguments),
            None => LOADER.try_lookup(&self.language, key),
        };

        text.ok_or_else(|| I18nError::MissingMessage {
            key: key.to_owned(),
            locale: self.language.to_string(),
        })
    }

    fn fallback() -> Self {
        Self {
            language: FALLBACK_LANGUAGE.clone(),
            fallback_used: true,
        }
    }
}
