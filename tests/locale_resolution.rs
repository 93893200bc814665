//! Behaviour-driven tests for choosing the diagnostic locale.

use std::cell::RefCell;
use std::str::FromStr;

#[path = "support/steps.rs"]
mod steps;

use bindcheck_common::i18n::{LocaleSelection, LocaleSource, resolve_localizer};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use steps::StepValue;

/// Raw override values, indexed like [`LocaleSource::OVERRIDES`].
#[derive(Default)]
struct LocaleWorld {
    overrides: RefCell<[Option<String>; 3]>,
    selection: RefCell<Option<LocaleSelection>>,
}

impl LocaleWorld {
    fn set(&self, source: LocaleSource, value: Option<String>) {
        let position = LocaleSource::OVERRIDES
            .iter()
            .position(|candidate| *candidate == source)
            .unwrap_or_else(|| panic!("{source} is not an override"));
        if let Some(slot) = self.overrides.borrow_mut().get_mut(position) {
            *slot = value;
        }
    }

    fn selection(&self) -> LocaleSelection {
        self.selection
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("the locale should have been resolved"))
    }
}

#[fixture]
fn world() -> LocaleWorld {
    LocaleWorld::default()
}

/// A source named the way feature files spell it.
#[derive(Debug)]
struct StepSource(LocaleSource);

impl FromStr for StepSource {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "the command line" => Ok(Self(LocaleSource::ExplicitArgument)),
            "BINDCHECK_LOCALE" => Ok(Self(LocaleSource::EnvironmentVariable)),
            "bindcheck.toml" => Ok(Self(LocaleSource::Configuration)),
            "the default" => Ok(Self(LocaleSource::Fallback)),
            other => Err(format!("unknown locale source '{other}'")),
        }
    }
}

#[given("{source} requests the locale {value}")]
fn request(world: &LocaleWorld, source: StepSource, value: StepValue) {
    world.set(source.0, Some(value.into_inner()));
}

#[given("{source} requests no locale")]
fn request_nothing(world: &LocaleWorld, source: StepSource) {
    world.set(source.0, None);
}

#[when("the locale is resolved")]
fn resolve(world: &LocaleWorld) {
    let [explicit, environment, configuration] = world.overrides.borrow().clone();
    let selection = resolve_localizer(
        explicit.as_deref(),
        environment,
        configuration.as_deref(),
    );
    world.selection.borrow_mut().replace(selection);
}

#[then("messages are rendered in {locale} chosen by {source}")]
fn assert_choice(world: &LocaleWorld, locale: StepValue, source: StepSource) {
    let selection = world.selection();

    assert_eq!(selection.locale(), locale.as_ref());
    assert_eq!(selection.source(), source.0);
    assert_eq!(selection.used_fallback(), source.0 == LocaleSource::Fallback);
}

#[then("no override was skipped")]
fn assert_nothing_skipped(world: &LocaleWorld) {
    assert!(world.selection().skipped().is_empty());
}

#[then("the {value} requested by {source} was skipped")]
fn assert_skipped(world: &LocaleWorld, value: StepValue, source: StepSource) {
    let expected = (source.0, value.into_inner());

    assert!(
        world.selection().skipped().contains(&expected),
        "expected {expected:?} among {:?}",
        world.selection().skipped(),
    );
}

#[scenario("tests/features/locale_resolution.feature", index = 0)]
fn scenario_default(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 1)]
fn scenario_environment(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 2)]
fn scenario_configuration(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 3)]
fn scenario_command_line(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 4)]
fn scenario_blank(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 5)]
fn scenario_unsupported(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 6)]
fn scenario_region_variant(world: LocaleWorld) {
    let _ = world;
}
