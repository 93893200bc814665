//! Output formatting for check reports.
//!
//! Reports render either as compiler-style text for people or as JSON for
//! scripts.

use bindcheck_common::span::{SourceLocation, SourceSpan};
use serde::Serialize;

use crate::check::{CheckReport, Finding, MethodReport};
use crate::error::{BindcheckError, Result};

/// Format a report for human-readable output.
///
/// # Examples
///
/// ```
/// use bindcheck::check::CheckReport;
/// use bindcheck::report::format_human;
///
/// let output = format_human(&CheckReport::default());
/// assert!(output.contains("No @Binds methods found"));
/// ```
#[must_use]
pub fn format_human(report: &CheckReport) -> String {
    if report.methods.is_empty() {
        return String::from("No @Binds methods found.\n");
    }

    let mut output = String::new();
    for method in &report.methods {
        for finding in &method.findings {
            push_finding(&mut output, &method.method, finding);
        }
    }

    let checked = report.methods.len();
    let count = report.diagnostic_count();
    if count == 0 {
        output.push_str(&format!(
            "Checked {checked} @Binds {}: no problems found.\n",
            plural(checked, "method", "methods"),
        ));
    } else {
        output.push_str(&format!(
            "Checked {checked} @Binds {}: {count} {}.\n",
            plural(checked, "method", "methods"),
            plural(count, "error", "errors"),
        ));
    }
    output
}

fn push_finding(output: &mut String, method: &str, finding: &Finding) {
    let diagnostic = &finding.diagnostic;
    output.push_str(&format!(
        "{}[{}]: {}\n",
        diagnostic.severity(),
        diagnostic.code(),
        diagnostic.message(),
    ));
    match finding.span {
        Some(span) => output.push_str(&format!(
            "  --> {method} ({}) at {span}\n",
            diagnostic.location()
        )),
        None => output.push_str(&format!("  --> {method} ({})\n", diagnostic.location())),
    }
    for note in diagnostic.notes() {
        output.push_str(&format!("  = note: {note}\n"));
    }
    for help in diagnostic.helps() {
        output.push_str(&format!("  = help: {help}\n"));
    }
    output.push('\n');
}

const fn plural(count: usize, one: &'static str, other: &'static str) -> &'static str {
    if count == 1 { one } else { other }
}

/// Format a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`BindcheckError::Serialise`] if serialisation fails.
///
/// # Examples
///
/// ```
/// use bindcheck::check::CheckReport;
/// use bindcheck::report::format_json;
///
/// let json = format_json(&CheckReport::default()).expect("report serialises");
/// assert!(json.contains("\"methods\""));
/// ```
pub fn format_json(report: &CheckReport) -> Result<String> {
    serde_json::to_string_pretty(&ReportJson::from_report(report))
        .map_err(|source| BindcheckError::Serialise { source })
}

/// JSON-serialisable representation of a report.
#[derive(Debug, Serialize)]
pub struct ReportJson {
    /// Whether every method passed.
    pub clean: bool,
    /// Total number of diagnostics.
    pub diagnostic_count: usize,
    /// Per-method results.
    pub methods: Vec<MethodJson>,
}

impl ReportJson {
    fn from_report(report: &CheckReport) -> Self {
        Self {
            clean: report.is_clean(),
            diagnostic_count: report.diagnostic_count(),
            methods: report.methods.iter().map(MethodJson::from_report).collect(),
        }
    }
}

/// JSON entry for one method.
#[derive(Debug, Serialize)]
pub struct MethodJson {
    /// `Type#method` name.
    pub method: String,
    /// Diagnostics reported for the method.
    pub diagnostics: Vec<DiagnosticJson>,
}

impl MethodJson {
    fn from_report(report: &MethodReport) -> Self {
        Self {
            method: report.method.clone(),
            diagnostics: report
                .findings
                .iter()
                .map(DiagnosticJson::from_finding)
                .collect(),
        }
    }
}

/// JSON entry for one diagnostic.
#[derive(Debug, Serialize)]
pub struct DiagnosticJson {
    /// Rule code, such as `binds_method::abstract`.
    pub code: String,
    /// `error` or `warning`.
    pub severity: String,
    /// Primary message.
    pub message: String,
    /// Element of the declaration the diagnostic points at.
    pub location: String,
    /// One-based line of the element, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// One-based column of the element, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    /// Supporting notes.
    pub notes: Vec<String>,
    /// Suggested fixes.
    pub helps: Vec<String>,
}

impl DiagnosticJson {
    fn from_finding(finding: &Finding) -> Self {
        let diagnostic = &finding.diagnostic;
        let start = finding.span.map(SourceSpan::start);
        Self {
            code: diagnostic.code().to_owned(),
            severity: diagnostic.severity().to_string(),
            message: diagnostic.message().to_owned(),
            location: diagnostic.location().to_string(),
            line: start.map(SourceLocation::line),
            column: start.map(SourceLocation::column),
            notes: diagnostic.notes().to_vec(),
            helps: diagnostic.helps().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindcheck_common::diagnostics::error_at;
    use bindcheck_common::span::LocationHint;
    use rstest::{fixture, rstest};

    #[fixture]
    fn report() -> CheckReport {
        CheckReport {
            methods: vec![
                MethodReport {
                    method: String::from("app.AppModule#bindText"),
                    findings: Vec::new(),
                },
                MethodReport {
                    method: String::from("app.AppModule#bindObject"),
                    findings: vec![Finding::from(
                        error_at(
                            "binds_method::arity",
                            "@Binds methods must have exactly one parameter",
                            LocationHint::Method,
                        )
                        .note("The method declares 2 parameters.")
                        .help("Declare a single parameter.")
                        .build(),
                    )],
                },
            ],
        }
    }

    #[rstest]
    fn human_output_lists_diagnostics(report: CheckReport) {
        let output = format_human(&report);

        assert!(output.contains(
            "error[binds_method::arity]: @Binds methods must have exactly one parameter\n"
        ));
        assert!(output.contains("  --> app.AppModule#bindObject (method)\n"));
        assert!(output.contains("  = note: The method declares 2 parameters.\n"));
        assert!(output.contains("  = help: Declare a single parameter.\n"));
        assert!(output.ends_with("Checked 2 @Binds methods: 1 error.\n"));
        assert!(!output.contains("bindText"));
    }

    #[rstest]
    fn human_output_for_clean_report() {
        let report = CheckReport {
            methods: vec![MethodReport {
                method: String::from("app.AppModule#bindText"),
                findings: Vec::new(),
            }],
        };

        assert_eq!(
            format_human(&report),
            "Checked 1 @Binds method: no problems found.\n"
        );
    }

    #[rstest]
    fn json_output_carries_every_field(report: CheckReport) {
        let json = format_json(&report).expect("report serialises");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["clean"], false);
        assert_eq!(value["diagnostic_count"], 1);
        let diagnostic = &value["methods"][1]["diagnostics"][0];
        assert_eq!(diagnostic["code"], "binds_method::arity");
        assert_eq!(diagnostic["severity"], "error");
        assert_eq!(diagnostic["location"], "method");
        assert_eq!(diagnostic["notes"][0], "The method declares 2 parameters.");
        assert!(diagnostic.get("line").is_none());
    }

    #[rstest]
    fn positions_are_rendered_when_known(mut report: CheckReport) {
        let span = SourceSpan::point(SourceLocation::new(12, 4));
        for finding in report.methods.iter_mut().flat_map(|method| &mut method.findings) {
            finding.span = Some(span);
        }

        let output = format_human(&report);
        let json = format_json(&report).expect("report serialises");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert!(output.contains("  --> app.AppModule#bindObject (method) at 12:4\n"));
        assert_eq!(value["methods"][1]["diagnostics"][0]["line"], 12);
        assert_eq!(value["methods"][1]["diagnostics"][0]["column"], 4);
    }
}
