//! Localised diagnostic text.
//!
//! Fluent bundles under `locales/<tag>/bindcheck.ftl` are compiled into the
//! binary. Each rule owns one message whose `.note` and `.help` attributes
//! complete its [`DiagnosticMessageSet`]. Pick a locale with
//! [`get_localizer`] (or [`resolve_localizer`] when the environment should
//! not be read) and render with [`safe_resolve_message_set`], which never
//! fails: a gap in a bundle yields the caller's built-in text instead.

use fluent_templates::static_loader;
use unic_langid::langid;

/// Fluent value type used in [`Arguments`].
pub use fluent_templates::fluent_bundle::FluentValue;
pub use fluent_templates::loader::LanguageIdentifier;

static_loader! {
    pub(crate) static LOADER = {
        locales: "../locales",
        fallback_language: "en-GB",
    };
}

/// Tag of the bundle used when no override matches.
pub const FALLBACK_LOCALE: &str = "en-GB";
pub(crate) const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en-GB");

/// Environment variable holding a locale override.
pub const LOCALE_ENV_VAR: &str = "BINDCHECK_LOCALE";

mod diagnostics;
mod helpers;
mod loader;
mod locales;
mod selection;
pub mod testing;

pub use diagnostics::{
    AttrKey, BundleLookup, DiagnosticMessageSet, MessageKey, resolve_message_set,
};
pub use helpers::{MessageResolution, get_localizer, noop_reporter, safe_resolve_message_set};
pub use loader::{Arguments, I18nError, Localizer};
pub use locales::{available_locales, match_locale, supports_locale};
pub use selection::{LocaleSelection, LocaleSource, normalise_locale, resolve_localizer};
