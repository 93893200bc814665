//! Configuration for the `[binds_method]` table.

use serde::Deserialize;

/// Options accepted under `[binds_method]`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// List every checked thrown type in the throws diagnostic instead of
    /// only the first. The rule still yields a single diagnostic.
    pub report_all_checked_throws: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_to_first_checked_type_only() {
        let config: Config = toml::from_str("").expect("empty table parses");
        assert!(!config.report_all_checked_throws);
    }

    #[rstest]
    fn reads_flag() {
        let config: Config =
            toml::from_str("report_all_checked_throws = true").expect("flag parses");
        assert!(config.report_all_checked_throws);
    }

    #[rstest]
    fn rejects_unknown_keys() {
        let outcome = toml::from_str::<Config>("max_parameters = 2");
        assert!(outcome.is_err());
    }
}
