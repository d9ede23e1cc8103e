use crate::validate::rules::fields::{is_iso_date, validate_time_range};
use crate::validate::validator::Validator;
use crate::value::Value;

pub(crate) const DAY_KEYS: [&str; 8] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "default",
];

pub(crate) fn validate_hours_table(v: &mut Validator, path: &str, hours: &Value) {
    let Some(hours) = hours.as_table() else {
        v.push(path, "hours must be a table");
        return;
    };
    for (day, value) in hours {
        let dpath = format!("{path}.{day}");
        if !DAY_KEYS.contains(&day.as_str()) {
            v.push(dpath, "invalid day name");
            continue;
        }
        validate_hours_value(v, &dpath, value);
    }
}

pub(crate) fn validate_holiday_hours_table(v: &mut Validator, path: &str, holiday_hours: &Value) {
    let Some(holiday_hours) = holiday_hours.as_table() else {
        v.push(path, "holiday_hours must be a table");
        return;
    };
    for (date, value) in holiday_hours {
        let dpath = format!("{path}.{date}");
        if !is_iso_date(date) {
            v.push(dpath, "holiday date must be YYYY-MM-DD");
            continue;
        }
        validate_hours_value(v, &dpath, value);
    }
}

fn validate_hours_value(v: &mut Validator, path: &str, value: &Value) {
    match value.as_str() {
        Some(range) => validate_time_range(v, path, range),
        None => v.push(path, "hours must be a string"),
    }
}
