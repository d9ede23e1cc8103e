mod rules;
mod validator;

use crate::error::Report;
use crate::value::Value;
use validator::Validator;

pub use rules::taxonomy::{resolve_allowed_types, FALLBACK_TYPES};

pub trait Validate {
    fn validate(&self) -> Report;
}

impl Validate for Value {
    fn validate(&self) -> Report {
        validate_document(self)
    }
}

/// Runs every rule over `doc` and returns all errors and warnings in discovery order.
///
/// Malformed data never aborts the run; the only early exit is a root that is
/// not a table.
pub fn validate_document(doc: &Value) -> Report {
    let mut v = Validator::new();
    v.validate_document(doc);
    v.finish()
}
