use std::io::ErrorKind;
use std::path::Path;

use placelint_core::{parse_document_str, DocumentFormat, ParseError, Report, Validate};
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{InputFormat, OutputArgs};

#[derive(Serialize)]
struct ValidateResult {
    valid: bool,
    format: String,
    errors: Vec<String>,
    warnings: Vec<String>,
}

pub fn validate_cmd(path: &Path, input_format: Option<InputFormat>, output: OutputArgs) -> i32 {
    let content = match std::fs::read_to_string(path) {
        Ok(v) => v,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            print_error(
                output.format,
                output.quiet,
                &format!("file not found: {}", path.display()),
            );
            return exit_codes::INPUT_ERROR;
        }
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("failed to read {}: {e}", path.display()),
            );
            return exit_codes::INPUT_ERROR;
        }
    };

    let format = input_format
        .map(DocumentFormat::from)
        .unwrap_or_else(|| DocumentFormat::from_path(path));
    tracing::debug!(path = %path.display(), ?format, "validating place directory");

    let parsed = match parse_document_str(&content, format) {
        Ok(p) => p,
        Err(e) => {
            let message = match &e {
                ParseError::Toml(e) => format!("invalid TOML: {e}"),
                ParseError::Json(e) => format!("invalid JSON: {e}"),
                ParseError::Yaml(e) => format!("invalid YAML: {e}"),
            };
            print_error(output.format, output.quiet, &message);
            return exit_codes::INPUT_ERROR;
        }
    };

    let report = parsed.document.validate();
    match output.format {
        OutputFormat::Text => print_text_report(output.quiet, &report),
        OutputFormat::Json => {
            let result = ValidateResult {
                valid: report.is_valid(),
                format: format!("{:?}", parsed.format),
                errors: report.error_messages(),
                warnings: report.warning_messages(),
            };
            print_result(output.quiet, &result);
        }
    }

    if report.is_valid() {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    }
}

fn print_text_report(quiet: bool, report: &Report) {
    if quiet {
        return;
    }
    for warning in &report.warnings {
        println!("WARN: {warning}");
    }
    for error in &report.errors {
        println!("ERROR: {error}");
    }
    if report.is_valid() {
        println!("Validation passed with {} warning(s).", report.warnings.len());
    } else {
        println!(
            "Validation failed with {} error(s), {} warning(s).",
            report.errors.len(),
            report.warnings.len()
        );
    }
}
