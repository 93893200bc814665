//! Choosing a locale from the command line, environment, and configuration.

use std::fmt;

use log::debug;

use super::{FALLBACK_LOCALE, LOCALE_ENV_VAR, Localizer, supports_locale};

/// Where the chosen locale came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// The caller's explicit argument, such as `--locale`.
    ExplicitArgument,
    /// The `BINDCHECK_LOCALE` environment variable.
    EnvironmentVariable,
    /// The `locale` key in `bindcheck.toml`.
    Configuration,
    /// No override was usable.
    Fallback,
}

impl LocaleSource {
    /// Override sources in precedence order.
    pub const OVERRIDES: [Self; 3] = [
        Self::ExplicitArgument,
        Self::EnvironmentVariable,
        Self::Configuration,
    ];
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitArgument => formatter.write_str("--locale"),
            Self::EnvironmentVariable => formatter.write_str(LOCALE_ENV_VAR),
            Self::Configuration => formatter.write_str("bindcheck.toml"),
            Self::Fallback => write!(formatter, "default ({FALLBACK_LOCALE})"),
        }
    }
}

/// The chosen locale plus the overrides passed over on the way.
#[derive(Clone, Debug)]
pub struct LocaleSelection {
    localizer: Localizer,
    source: LocaleSource,
    requested: Option<String>,
    skipped: Vec<(LocaleSource, String)>,
}

impl LocaleSelection {
    /// Source that supplied the locale.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// The tag as written by the winning source; `None` for the fallback.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Overrides that named no bundled locale, in precedence order.
    #[must_use]
    pub fn skipped(&self) -> &[(LocaleSource, String)] {
        &self.skipped
    }

    /// Tag of the bundle that will render messages.
    #[must_use]
    pub fn locale(&self) -> String {
        self.localizer.locale()
    }

    /// Whether messages come from the fallback bundle.
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.localizer.used_fallback()
    }

    /// The selected [`Localizer`].
    #[must_use]
    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Consumes the selection, yielding the [`Localizer`].
    #[must_use]
    pub fn into_localizer(self) -> Localizer {
        self.localizer
    }

    /// Logs skipped overrides and the outcome under `target`.
    pub fn log_outcome(&self, target: &str) {
        for (source, tag) in &self.skipped {
            debug!(target: target, "ignoring unsupported locale `{tag}` from {source}");
        }
        debug!(
            target: target,
            "rendering diagnostics in `{}` (from {})",
            self.locale(),
            self.source,
        );
    }
}

/// Picks the first override naming a bundled locale.
///
/// Candidates are tried in [`LocaleSource::OVERRIDES`] order: `explicit`,
/// then `environment`, then `configuration`. Blank candidates are ignored and
/// unsupported ones are recorded in [`LocaleSelection::skipped`].
///
/// # Examples
///
/// ```
/// use bindcheck_common::i18n::{LocaleSource, resolve_localizer};
///
/// let selection = resolve_localizer(Some("fr"), None, Some("cy"));
/// assert_eq!(selection.source(), LocaleSource::Configuration);
/// assert_eq!(selection.locale(), "cy");
/// assert_eq!(selection.skipped().len(), 1);
/// ```
#[must_use]
pub fn resolve_localizer(
    explicit: Option<&str>,
    environment: Option<String>,
    configuration: Option<&str>,
) -> LocaleSelection {
    let raw = [explicit, environment.as_deref(), configuration];
    let mut skipped = Vec::new();

    for (source, candidate) in LocaleSource::OVERRIDES.into_iter().zip(raw) {
        let Some(tag) = normalise_locale(candidate) else {
            continue;
        };
        if !supports_locale(tag) {
            skipped.push((source, tag.to_owned()));
            continue;
        }
        return LocaleSelection {
            localizer: Localizer::new(Some(tag)),
            source,
            requested: Some(tag.to_owned()),
            skipped,
        };
    }

    LocaleSelection {
        localizer: Localizer::new(None),
        source: LocaleSource::Fallback,
        requested: None,
        skipped,
    }
}

/// Trims `input`, treating blank text as absent.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}
