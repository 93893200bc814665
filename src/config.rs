//! Workspace configuration loaded from `bindcheck.toml`.
//!
//! Settings are grouped by validator name so each validator owns its table
//! (for example `[binds_method]`). A missing file is not an error: every
//! field has a default, so a project without configuration checks with the
//! stock rules.

use bindcheck_common::i18n::normalise_locale;
use bindcheck_common::types::TypeHierarchy;
use camino::Utf8Path;
use log::debug;
use serde::Deserialize;

use crate::error::{BindcheckError, Result};

/// File name searched for when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bindcheck.toml";

/// Shared configuration for every validator.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfig {
    /// Preferred locale when neither the command line nor the environment
    /// chooses one. Blank values are ignored.
    pub locale: Option<String>,
    /// Settings for the `binds_method` validator.
    pub binds_method: binds_method::Config,
    /// Adjustments to the built-in type universe.
    pub hierarchy: HierarchyConfig,
}

impl SharedConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BindcheckError::Read`] when the file exists but cannot be
    /// read and [`BindcheckError::InvalidToml`] when it does not parse.
    pub fn load_from(path: &Utf8Path) -> Result<Self> {
        if !path.exists() {
            debug!(target: "bindcheck::config", "{path} not found; using defaults");
            return Ok(Self::default());
        }

        let source = std::fs::read_to_string(path).map_err(|source| BindcheckError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&source).map_err(|error| BindcheckError::InvalidToml {
            path: path.to_owned(),
            reason: error.to_string(),
        })
    }

    /// Loads configuration using the supplied loader.
    ///
    /// The `crate_name` names the table the caller reads, letting tests
    /// substitute a loader without touching the file system.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck::SharedConfig;
    ///
    /// let config = SharedConfig::load_with("binds_method", |_| SharedConfig::default());
    /// assert!(!config.binds_method.report_all_checked_throws);
    /// ```
    #[must_use]
    pub fn load_with<F>(crate_name: &str, loader: F) -> Self
    where
        F: FnOnce(&str) -> Self,
    {
        loader(crate_name)
    }

    /// Returns the configured locale override, if present.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }
}

/// Overrides for the type universe used during checks.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HierarchyConfig {
    /// Meta-annotations that mark an annotation as a qualifier. Empty keeps
    /// `javax.inject.Qualifier`.
    pub qualifier_markers: Vec<String>,
    /// Throwable roots whose descendants are unchecked. Empty keeps
    /// `java.lang.RuntimeException` and `java.lang.Error`.
    pub unchecked_roots: Vec<String>,
}

impl HierarchyConfig {
    /// Applies the non-empty overrides to `hierarchy`.
    pub fn apply(&self, hierarchy: &mut TypeHierarchy) {
        if !self.qualifier_markers.is_empty() {
            hierarchy.set_qualifier_markers(self.qualifier_markers.iter().map(String::as_str));
        }
        if !self.unchecked_roots.is_empty() {
            hierarchy.set_unchecked_roots(self.unchecked_roots.iter().map(String::as_str));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindcheck_common::types::{ExceptionClassifier, TypeRef};
    use camino::Utf8PathBuf;
    use rstest::rstest;

    #[rstest]
    fn defaults_keep_the_stock_rules() {
        let config = SharedConfig::default();

        assert!(!config.binds_method.report_all_checked_throws);
        assert!(config.hierarchy.qualifier_markers.is_empty());
        assert!(config.locale().is_none());
    }

    #[rstest]
    fn deserialises_overrides_from_toml() {
        let source = concat!(
            "[binds_method]\n",
            "report_all_checked_throws = true\n",
            "[hierarchy]\n",
            "unchecked_roots = [\"java.lang.Throwable\"]\n",
        );

        // Panic with the TOML parser's message so broken overrides are easy to debug.
        let config = toml::from_str::<SharedConfig>(source)
            .expect("expected configuration to parse successfully");

        assert!(config.binds_method.report_all_checked_throws);
        assert_eq!(config.hierarchy.unchecked_roots, ["java.lang.Throwable"]);
    }

    #[rstest]
    fn deserialises_locale_override() {
        let config = toml::from_str::<SharedConfig>("locale = \"cy\"\n")
            .expect("expected configuration to parse successfully");

        assert_eq!(config.locale(), Some("cy"));
    }

    #[rstest]
    fn trims_whitespace_only_locale_entries() {
        let config = toml::from_str::<SharedConfig>("locale = \"  \"\n")
            .expect("expected configuration to parse successfully");

        assert!(config.locale().is_none());
    }

    #[rstest]
    #[case::top_level("unexpected = true\n")]
    #[case::validator_table("[binds_method]\nmax_parameters = 2\n")]
    #[case::hierarchy_table("[hierarchy]\nboxing = true\n")]
    fn rejects_unknown_fields(#[case] source: &str) {
        let outcome: std::result::Result<SharedConfig, _> = toml::from_str(source);

        assert!(outcome.is_err(), "expected a parse error for {source:?}");
    }

    #[rstest]
    fn missing_files_yield_defaults() {
        let directory = tempfile::tempdir().expect("temporary directory");
        let path = Utf8PathBuf::from_path_buf(directory.path().join(DEFAULT_CONFIG_FILE))
            .expect("temporary paths are UTF-8");

        let config = SharedConfig::load_from(&path).expect("missing file is not an error");

        assert_eq!(config, SharedConfig::default());
    }

    #[rstest]
    fn invalid_files_name_the_path() {
        let directory = tempfile::tempdir().expect("temporary directory");
        let path = Utf8PathBuf::from_path_buf(directory.path().join(DEFAULT_CONFIG_FILE))
            .expect("temporary paths are UTF-8");
        std::fs::write(&path, "[binds_method]\nreport_all_checked_throws = \"yes\"\n")
            .expect("write configuration");

        let error = SharedConfig::load_from(&path).expect_err("value has the wrong type");

        assert!(matches!(error, BindcheckError::InvalidToml { .. }));
        assert!(error.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[rstest]
    fn hierarchy_overrides_replace_unchecked_roots() {
        let config = HierarchyConfig {
            qualifier_markers: Vec::new(),
            unchecked_roots: vec![String::from("java.lang.Exception")],
        };
        let mut hierarchy = TypeHierarchy::bootstrap();

        config.apply(&mut hierarchy);

        assert_eq!(
            hierarchy.is_unchecked(&TypeRef::declared("java.io.IOException")),
            Ok(true)
        );
        assert_eq!(
            hierarchy.is_unchecked(&TypeRef::declared("java.lang.Error")),
            Ok(false)
        );
    }

    #[rstest]
    fn load_with_passes_through_the_requested_crate() {
        fn stub_loader(crate_name: &str) -> SharedConfig {
            assert_eq!(crate_name, "binds_method");
            SharedConfig {
                locale: Some(String::from("cy")),
                ..SharedConfig::default()
            }
        }

        let config = SharedConfig::load_with("binds_method", stub_loader);

        assert_eq!(config.locale(), Some("cy"));
    }
}
