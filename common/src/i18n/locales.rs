//! Matching requested locale tags against the embedded bundles.

use once_cell::sync::Lazy;

use fluent_templates::Loader;

use super::{LOADER, LanguageIdentifier};

static BUNDLED: Lazy<Vec<LanguageIdentifier>> = Lazy::new(|| {
    let mut bundled: Vec<LanguageIdentifier> = LOADER.locales().cloned().collect();
    bundled.sort_unstable_by_key(ToString::to_string);
    bundled
});

static BUNDLED_TAGS: Lazy<Vec<String>> =
    Lazy::new(|| BUNDLED.iter().map(ToString::to_string).collect());

/// Bundled locale tags in sorted order.
#[must_use]
pub fn available_locales() -> &'static [String] {
    BUNDLED_TAGS.as_slice()
}

/// Finds the bundle that serves `requested`.
///
/// An exact tag wins. Otherwise a bundle sharing the requested language
/// subtag is chosen, so `cy-GB` is served by `cy` and `en` by `en-GB`.
/// Malformed tags match nothing.
///
/// # Examples
///
/// ```
/// use bindcheck_common::i18n::match_locale;
///
/// assert_eq!(match_locale("cy-GB").map(|tag| tag.to_string()).as_deref(), Some("cy"));
/// assert_eq!(match_locale("fr"), None);
/// ```
#[must_use]
pub fn match_locale(requested: &str) -> Option<&'static LanguageIdentifier> {
    let wanted: LanguageIdentifier = requested.parse().ok()?;

    BUNDLED
        .iter()
        .find(|bundled| **bundled == wanted)
        .or_else(|| {
            BUNDLED
                .iter()
                .find(|bundled| bundled.language == wanted.language)
        })
}

/// Whether some bundle can serve `locale`.
#[must_use]
pub fn supports_locale(locale: &str) -> bool {
    match_locale(locale).is_some()
}
