use crate::validate::rules::fields::{is_non_empty_string, is_valid_id};
use crate::validate::rules::registry::IdRegistry;
use crate::validate::validator::Validator;
use crate::value::Value;

pub(crate) fn validate_non_empty_string(v: &mut Validator, path: &str, value: Option<&Value>) {
    if !is_non_empty_string(value) {
        v.push(path, "must be a non-empty string");
    }
}

/// Checks the record id and registers it, even when its spelling is rejected,
/// so a malformed id that is reused still shows up as a duplicate.
pub(crate) fn validate_record_id(
    v: &mut Validator,
    path: &str,
    record: &Value,
    registry: &mut IdRegistry,
) {
    let id_path = format!("{path}.id");
    match record.get("id").and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => {
            if !is_valid_id(id) {
                v.push(id_path.as_str(), "use lowercase letters, digits, '_' or '-' only");
            }
            registry.track(v, id, &id_path);
        }
        _ => v.push(id_path, "must be a non-empty string"),
    }
}

pub(crate) fn validate_position_present(v: &mut Validator, path: &str, record: &Value) {
    let has_address = record.get("address").is_some();
    let has_coordinates = record.get("lat").is_some() && record.get("long").is_some();
    if !has_address && !has_coordinates {
        v.push(path, "requires address or lat/long");
    }
}

pub(crate) fn validate_optional_string(v: &mut Validator, path: &str, value: Option<&Value>) {
    if let Some(value) = value {
        if value.as_str().is_none() {
            v.push(path, "must be a string");
        }
    }
}

pub(crate) fn validate_optional_number(v: &mut Validator, path: &str, value: Option<&Value>) {
    if let Some(value) = value {
        if !value.is_number() {
            v.push(path, "must be a number");
        }
    }
}
