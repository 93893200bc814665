//! Entry points validators use to pick a locale and render message sets.

use std::env;

use log::debug;

use super::{
    Arguments, BundleLookup, DiagnosticMessageSet, LOCALE_ENV_VAR, Localizer, MessageKey,
    resolve_localizer, resolve_message_set,
};

/// Builds the [`Localizer`] for a run, consulting `BINDCHECK_LOCALE` between
/// the explicit and configured locales. The choice is logged under `target`.
///
/// # Examples
///
/// ```
/// use bindcheck_common::i18n::get_localizer;
///
/// let localizer = get_localizer("demo", Some("en-GB"), None);
/// assert_eq!(localizer.locale(), "en-GB");
/// ```
#[must_use]
pub fn get_localizer(
    target: &str,
    explicit_locale: Option<&str>,
    configuration_locale: Option<&str>,
) -> Localizer {
    let selection = resolve_localizer(
        explicit_locale,
        environment_locale(),
        configuration_locale,
    );
    selection.log_outcome(target);
    selection.into_localizer()
}

/// `BINDCHECK_LOCALE`, when set to valid Unicode.
fn environment_locale() -> Option<String> {
    env::var(LOCALE_ENV_VAR).ok()
}

/// Reporter that discards localisation failures.
pub fn noop_reporter(_report: String) {}

/// What to look up in [`safe_resolve_message_set`].
#[derive(Clone, Copy)]
pub struct MessageResolution<'a> {
    /// Log target, usually the validator name.
    pub target: &'a str,
    /// Fluent message whose primary text and attributes form the set.
    pub key: MessageKey<'a>,
    /// Values interpolated into every part of the set.
    pub args: &'a Arguments<'a>,
}

/// Resolves a message set, substituting `fallback` when any part is missing.
///
/// A missing part is a packaging bug rather than a user error, so it is
/// logged at `debug` under the resolution's target and handed to
/// `report_bug`; the diagnostic itself is still produced.
///
/// # Examples
///
/// ```
/// use bindcheck_common::i18n::testing::RecordingReporter;
/// use bindcheck_common::i18n::{
///     Arguments, DiagnosticMessageSet, Localizer, MessageKey, MessageResolution,
///     safe_resolve_message_set,
/// };
///
/// let args: Arguments<'static> = Arguments::default();
/// let resolution = MessageResolution {
///     target: "demo",
///     key: MessageKey::new("missing-key"),
///     args: &args,
/// };
/// let recorder = RecordingReporter::default();
///
/// let messages = safe_resolve_message_set(
///     &Localizer::new(Some("en-GB")),
///     resolution,
///     recorder.reporter(),
///     || DiagnosticMessageSet::new("primary".into(), "note".into(), "help".into()),
/// );
///
/// assert_eq!(messages.primary(), "primary");
/// assert!(recorder.reports().iter().any(|report| report.contains("missing-key")));
/// ```
#[must_use]
pub fn safe_resolve_message_set(
    lookup: &impl BundleLookup,
    resolution: MessageResolution<'_>,
    report_bug: impl FnOnce(String),
    fallback: impl FnOnce() -> DiagnosticMessageSet,
) -> DiagnosticMessageSet {
    let error = match resolve_message_set(lookup, resolution.key, resolution.args) {
        Ok(messages) => return messages,
        Err(error) => error,
    };

    debug!(
        target: resolution.target,
        "using built-in text for `{}`: {error}",
        resolution.key,
    );
    report_bug(format!("{}: {error}", resolution.target));
    fallback()
}
