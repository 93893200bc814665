//! `bindcheck` command-line entrypoint.
//!
//! Exit codes: 0 when every method passes, 1 when diagnostics were reported,
//! and 2 when the check could not run.

use std::io::Write;

use bindcheck::cli::{Cli, CheckOutcome, Command, run_check};
use bindcheck::error::Result;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = match &cli.command {
        Command::Check(args) => run_check(args, &mut stdout),
    };
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<CheckOutcome>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(CheckOutcome::Clean) => 0,
        Ok(CheckOutcome::Diagnostics) => 1,
        Err(err) => {
            write_stderr_line(stderr, format_args!("bindcheck: {err}"));
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                write_stderr_line(stderr, format_args!("  caused by: {cause}"));
                source = cause.source();
            }
            2
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindcheck::error::BindcheckError;
    use camino::Utf8PathBuf;
    use rstest::rstest;

    #[rstest]
    #[case::clean(CheckOutcome::Clean, 0)]
    #[case::diagnostics(CheckOutcome::Diagnostics, 1)]
    fn completed_checks_map_to_exit_codes(#[case] outcome: CheckOutcome, #[case] expected: i32) {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(outcome), &mut stderr);
        assert_eq!(exit_code, expected);
        assert!(stderr.is_empty());
    }

    #[test]
    fn errors_print_their_causes_and_return_two() {
        let err = BindcheckError::Read {
            path: Utf8PathBuf::from("bindings.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(exit_code, 2);

        let stderr_text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(stderr_text.contains("bindcheck: failed to read bindings.toml"));
        assert!(stderr_text.contains("caused by: no such file"));
    }
}
