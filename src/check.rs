//! Run the validators over every declaration in a manifest.

use bindcheck_common::diagnostics::Diagnostic;
use bindcheck_common::i18n::Localizer;
use bindcheck_common::span::SourceSpan;
use bindcheck_common::types::TypeHierarchy;
use binds_method::{BindsMethodValidator, Capabilities};
use log::debug;

use crate::config::SharedConfig;
use crate::error::Result;
use crate::manifest::Manifest;

/// A diagnostic and the source span its location hint resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    /// The reported diagnostic.
    pub diagnostic: Diagnostic,
    /// Where the offending element was written, when the manifest says.
    pub span: Option<SourceSpan>,
}

impl From<Diagnostic> for Finding {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic,
            span: None,
        }
    }
}

/// Diagnostics produced for one validated method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodReport {
    /// `Type#method` name of the declaration.
    pub method: String,
    /// Findings in rule order; empty when the method is valid.
    pub findings: Vec<Finding>,
}

/// Outcome of checking a manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// One entry per `@Binds` method, in manifest order.
    pub methods: Vec<MethodReport>,
}

impl CheckReport {
    /// Returns `true` when no method produced a diagnostic.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.methods
            .iter()
            .all(|method| method.findings.is_empty())
    }

    /// Total number of diagnostics across all methods.
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.methods
            .iter()
            .map(|method| method.findings.len())
            .sum()
    }
}

/// Builds the type universe for `manifest` and validates each of its
/// `@Binds` methods.
///
/// # Errors
///
/// Returns an error when the manifest's types or declarations are malformed,
/// or when a declaration mentions a type the universe cannot resolve.
///
/// # Examples
///
/// ```
/// use bindcheck::check::check_manifest;
/// use bindcheck::manifest::Manifest;
/// use bindcheck::SharedConfig;
/// use bindcheck_common::i18n::Localizer;
///
/// let manifest = Manifest::default();
/// let report = check_manifest(&manifest, &SharedConfig::default(), Localizer::new(None))
///     .expect("an empty manifest checks cleanly");
/// assert!(report.is_clean());
/// ```
pub fn check_manifest(
    manifest: &Manifest,
    config: &SharedConfig,
    localizer: Localizer,
) -> Result<CheckReport> {
    let mut hierarchy = TypeHierarchy::bootstrap();
    config.hierarchy.apply(&mut hierarchy);
    manifest.extend_hierarchy(&mut hierarchy)?;

    let declarations = manifest.declarations()?;
    debug!(
        target: "bindcheck::check",
        "validating {} @Binds method(s)",
        declarations.len(),
    );

    let validator = BindsMethodValidator::new(Capabilities::from_universe(&hierarchy), localizer)
        .with_config(config.binds_method);

    let mut methods = Vec::with_capacity(declarations.len());
    for declaration in &declarations {
        let findings = validator
            .validate(declaration)?
            .into_iter()
            .map(|diagnostic| Finding {
                span: declaration.span_for(diagnostic.location()),
                diagnostic,
            })
            .collect();
        methods.push(MethodReport {
            method: declaration.display_name(),
            findings,
        });
    }
    Ok(CheckReport { methods })
}
