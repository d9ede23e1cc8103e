use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Report, Violation};
use crate::value::Value;

use super::rules;

pub(crate) static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_\-]+$").expect("valid"));
pub(crate) static TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]-([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid")
});
pub(crate) static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid"));

pub struct Validator {
    errors: Vec<Violation>,
    warnings: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn finish(self) -> Report {
        tracing::debug!(
            errors = self.errors.len(),
            warnings = self.warnings.len(),
            "validation finished"
        );
        Report {
            errors: self.errors,
            warnings: self.warnings,
        }
    }

    pub fn validate_document(&mut self, doc: &Value) {
        rules::document::validate_document(self, doc);
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Violation::new(path, message));
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Violation::new(path, message));
    }
}
