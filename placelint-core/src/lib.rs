#![forbid(unsafe_code)]

pub mod error;
pub mod parser;
pub mod validate;
pub mod value;

pub use crate::error::{ParseError, PlaceLintError, Report, ValidationError, Violation};
pub use crate::parser::{parse_document_str, DocumentFormat, ParsedDocument};
pub use crate::validate::{resolve_allowed_types, validate_document, Validate, FALLBACK_TYPES};
pub use crate::value::{Table, Value};

/// Parses `input` and validates it in one step.
///
/// The returned report only ever carries warnings; any error turns the whole
/// call into [`PlaceLintError::Validation`].
pub fn validate_str(input: &str, format: DocumentFormat) -> Result<Report, PlaceLintError> {
    let parsed = parse_document_str(input, format)?;
    Ok(parsed.document.validate().into_result()?)
}
