use std::fmt;

use super::{Arguments, I18nError, Localizer};

/// Fluent message identifier for a diagnostic.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MessageKey<'a>(&'a str);

impl<'a> MessageKey<'a> {
    /// Wrap a Fluent message identifier.
    #[must_use]
    pub const fn new(key: &'a str) -> Self {
        Self(key)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.0
    }
}

impl fmt::Display for MessageKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Fluent attribute name attached to a message, such as `note`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AttrKey<'a>(&'a str);

impl<'a> AttrKey<'a> {
    /// Wrap a Fluent attribute name.
    #[must_use]
    pub const fn new(attribute: &'a str) -> Self {
        Self(attribute)
    }

    /// Returns the raw attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.0
    }
}

const NOTE: AttrKey<'static> = AttrKey::new("note");
const HELP: AttrKey<'static> = AttrKey::new("help");

/// Lookup trait used by validators to resolve translated diagnostic strings.
pub trait BundleLookup {
    /// Resolve the primary message for `key` using `args`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError`] when the message is missing.
    fn message(&self, key: MessageKey<'_>, args: &Arguments<'_>) -> Result<String, I18nError>;

    /// Resolve an attribute message for `key.attribute` using `args`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError`] when the attribute is missing.
    fn attribute(
        &self,
        key: MessageKey<'_>,
        attribute: AttrKey<'_>,
        args: &Arguments<'_>,
    ) -> Result<String, I18nError>;
}

impl BundleLookup for Localizer {
    fn message(&self, key: MessageKey<'_>, args: &Arguments<'_>) -> Result<String, I18nError> {
        self.message_with_args(key.as_str(), args)
    }

    fn attribute(
        &self,
        key: MessageKey<'_>,
        attribute: AttrKey<'_>,
        args: &Arguments<'_>,
    ) -> Result<String, I18nError> {
        self.attribute_with_args(key.as_str(), attribute.as_str(), args)
    }
}

/// Container holding the standard trio of diagnostic messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessageSet {
    primary: String,
    note: String,
    help: String,
}

impl DiagnosticMessageSet {
    /// Construct a new set of diagnostic strings.
    #[must_use]
    pub const fn new(primary: String, note: String, help: String) -> Self {
        Self {
            primary,
            note,
            help,
        }
    }

    /// Access the primary diagnostic.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Access the note attached to the diagnostic.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Access the help text attached to the diagnostic.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }
}

/// Resolve the primary, note, and help messages for a diagnostic.
///
/// # Errors
///
/// Returns the first [`I18nError`] raised by the lookup.
pub fn resolve_message_set(
    lookup: &impl BundleLookup,
    key: MessageKey<'_>,
    args: &Arguments<'_>,
) -> Result<DiagnosticMessageSet, I18nError> {
    let primary = lookup.message(key, args)?;
    let note = lookup.attribute(key, NOTE, args)?;
    let help = lookup.attribute(key, HELP, args)?;

    Ok(DiagnosticMessageSet::new(primary, note, help))
}
