//! Command-line interface for `bindcheck`.
//!
//! Argument definitions live here alongside [`run_check`] so the binary only
//! parses arguments and maps outcomes to exit codes.

use std::io::Write;

use bindcheck_common::i18n::get_localizer;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};

use crate::check::check_manifest;
use crate::config::{DEFAULT_CONFIG_FILE, SharedConfig};
use crate::error::{BindcheckError, Result};
use crate::manifest::Manifest;
use crate::report::{format_human, format_json};

/// Check `@Binds` declarations in dependency-injection modules.
#[derive(Parser, Debug)]
#[command(name = "bindcheck")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Check a manifest with the default configuration:\n",
    "    $ bindcheck check bindings.toml\n\n",
    "  Emit JSON using Welsh messages:\n",
    "    $ bindcheck check bindings.toml --format json --locale cy\n\n",
    "The locale may also be set with BINDCHECK_LOCALE or the `locale` key in ",
    "bindcheck.toml.",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate the @Binds methods described by a manifest.
    Check(CheckArgs),
}

/// Output formats for reports.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Compiler-style text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Declaration manifest to check.
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,

    /// Configuration file [default: bindcheck.toml beside the manifest].
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Locale for diagnostic messages, such as en-GB or cy.
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl CheckArgs {
    /// Returns the configuration path, defaulting to `bindcheck.toml` in the
    /// manifest's directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck::cli::{CheckArgs, Format};
    /// use camino::Utf8PathBuf;
    ///
    /// let args = CheckArgs {
    ///     manifest: Utf8PathBuf::from("project/bindings.toml"),
    ///     config: None,
    ///     locale: None,
    ///     format: Format::Text,
    /// };
    /// assert_eq!(args.config_path(), "project/bindcheck.toml");
    /// ```
    #[must_use]
    pub fn config_path(&self) -> Utf8PathBuf {
        self.config.clone().unwrap_or_else(|| {
            self.manifest
                .parent()
                .unwrap_or_else(|| Utf8Path::new(""))
                .join(DEFAULT_CONFIG_FILE)
        })
    }
}

/// Whether a completed check found problems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every method passed.
    Clean,
    /// At least one diagnostic was reported.
    Diagnostics,
}

/// Loads inputs, runs the check, and writes the report to `out`.
///
/// # Errors
///
/// Returns an error when configuration or the manifest cannot be loaded,
/// when validation cannot complete, or when the report cannot be written.
pub fn run_check(args: &CheckArgs, out: &mut dyn Write) -> Result<CheckOutcome> {
    let config = SharedConfig::load_from(&args.config_path())?;
    let manifest = Manifest::load(&args.manifest)?;
    let localizer = get_localizer("bindcheck", args.locale.as_deref(), config.locale());

    let report = check_manifest(&manifest, &config, localizer)?;

    let rendered = match args.format {
        Format::Text => format_human(&report),
        Format::Json => {
            let mut json = format_json(&report)?;
            json.push('\n');
            json
        }
    };
    out.write_all(rendered.as_bytes())
        .map_err(|source| BindcheckError::WriteFailed { source })?;

    Ok(if report.is_clean() {
        CheckOutcome::Clean
    } else {
        CheckOutcome::Diagnostics
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
