use std::collections::BTreeSet;

use crate::validate::rules::common::{
    validate_non_empty_string, validate_optional_string, validate_position_present,
    validate_record_id,
};
use crate::validate::rules::fields::validate_lat_long;
use crate::validate::rules::hours::{validate_holiday_hours_table, validate_hours_table};
use crate::validate::rules::registry::IdRegistry;
use crate::validate::validator::Validator;
use crate::value::Value;

/// A business `type` is either one label or a list of them.
enum TypeField<'a> {
    Single(&'a str),
    Many(&'a [Value]),
}

impl<'a> TypeField<'a> {
    fn from_value(value: Option<&'a Value>) -> Option<Self> {
        match value? {
            Value::String(s) => Some(TypeField::Single(s)),
            Value::Array(items) => Some(TypeField::Many(items)),
            _ => None,
        }
    }

    /// `None` entries mark list items that are not strings.
    fn labels(&self) -> Vec<Option<&'a str>> {
        match self {
            TypeField::Single(s) => vec![Some(*s)],
            TypeField::Many(items) => items.iter().map(Value::as_str).collect(),
        }
    }
}

pub(crate) fn validate_business(
    v: &mut Validator,
    record: &Value,
    idx: usize,
    allowed_types: &BTreeSet<String>,
    registry: &mut IdRegistry,
) {
    let path = format!("businesses[{idx}]");
    if record.as_table().is_none() {
        v.push(path, "must be a table");
        return;
    }

    validate_record_id(v, &path, record, registry);
    validate_non_empty_string(v, &format!("{path}.name"), record.get("name"));
    validate_types(v, &format!("{path}.type"), record.get("type"), allowed_types);
    validate_position_present(v, &path, record);
    validate_optional_string(v, &format!("{path}.phone"), record.get("phone"));
    validate_optional_string(v, &format!("{path}.description"), record.get("description"));
    validate_lat_long(v, &path, record);

    if let Some(hours) = record.get("hours") {
        validate_hours_table(v, &format!("{path}.hours"), hours);
    }
    if let Some(holiday_hours) = record.get("holiday_hours") {
        validate_holiday_hours_table(v, &format!("{path}.holiday_hours"), holiday_hours);
    }
}

fn validate_types(
    v: &mut Validator,
    path: &str,
    value: Option<&Value>,
    allowed_types: &BTreeSet<String>,
) {
    let labels = TypeField::from_value(value)
        .map(|t| t.labels())
        .unwrap_or_default();
    if labels.is_empty() {
        v.push(path, "must be a string or non-empty array");
        return;
    }
    for label in labels {
        let Some(label) = label else {
            v.push(path, "type values must be strings");
            break;
        };
        if !allowed_types.contains(label) {
            v.push(path, format!("unsupported type '{label}'"));
        }
    }
}
