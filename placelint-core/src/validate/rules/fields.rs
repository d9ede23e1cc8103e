use chrono::NaiveDate;

use crate::validate::validator::{Validator, ID_RE, ISO_DATE_RE, TIME_RANGE_RE};
use crate::value::Value;

/// Literal accepted in place of a time range for a day with no opening hours.
pub(crate) const CLOSED: &str = "Closed";

pub(crate) fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

pub(crate) fn is_valid_id(id: &str) -> bool {
    ID_RE.is_match(id)
}

/// Strict `YYYY-MM-DD`: zero-padded and a real calendar day.
pub(crate) fn is_iso_date(s: &str) -> bool {
    ISO_DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Accepts `Closed` or `HH:MM-HH:MM` where the range opens strictly before it
/// closes. Ranges that cross midnight cannot be expressed.
pub(crate) fn validate_time_range(v: &mut Validator, path: &str, value: &str) {
    if value == CLOSED {
        return;
    }
    let parsed = if TIME_RANGE_RE.is_match(value) {
        value
            .split_once('-')
            .and_then(|(start, end)| Some((clock_minutes(start)?, clock_minutes(end)?)))
    } else {
        None
    };
    match parsed {
        None => v.push(path, "expected 'HH:MM-HH:MM' or 'Closed'"),
        Some((start, end)) if start >= end => v.push(path, "start time must be before end time"),
        Some(_) => {}
    }
}

fn clock_minutes(s: &str) -> Option<u32> {
    let (h, m) = s.split_once(':')?;
    Some(h.parse::<u32>().ok()? * 60 + m.parse::<u32>().ok()?)
}

/// Range-checks `lat`/`long` on a record. Nothing happens when both are absent;
/// one missing or either non-numeric yields a single error at `path`.
pub(crate) fn validate_lat_long(v: &mut Validator, path: &str, record: &Value) {
    let (lat, long) = match (record.get("lat"), record.get("long")) {
        (None, None) => return,
        (lat, long) => (lat.and_then(Value::as_f64), long.and_then(Value::as_f64)),
    };
    let (Some(lat), Some(long)) = (lat, long) else {
        v.push(path, "lat/long must be numbers");
        return;
    };
    if !(-90.0..=90.0).contains(&lat) {
        v.push(format!("{path}.lat"), "lat out of range (-90 to 90)");
    }
    if !(-180.0..=180.0).contains(&long) {
        v.push(format!("{path}.long"), "long out of range (-180 to 180)");
    }
}

/// `[[lat, long], [lat, long]]` with numeric corners.
pub(crate) fn is_bounds(value: &Value) -> bool {
    match value.as_array() {
        Some(corners) if corners.len() == 2 => corners.iter().all(|corner| {
            matches!(corner.as_array(), Some(pair) if pair.len() == 2 && pair.iter().all(Value::is_number))
        }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_range_errors(value: &str) -> Vec<String> {
        let mut v = Validator::new();
        validate_time_range(&mut v, "hours.monday", value);
        v.finish().errors.into_iter().map(|e| e.message).collect()
    }

    #[test]
    fn time_range_accepts_closed_and_daytime_ranges() {
        assert!(time_range_errors("Closed").is_empty());
        assert!(time_range_errors("08:00-18:00").is_empty());
        assert!(time_range_errors("00:00-23:59").is_empty());
    }

    #[test]
    fn time_range_rejects_inverted_and_empty_ranges() {
        assert_eq!(time_range_errors("18:00-08:00"), ["start time must be before end time"]);
        assert_eq!(time_range_errors("09:30-09:30"), ["start time must be before end time"]);
    }

    #[test]
    fn time_range_rejects_malformed_text() {
        for bad in ["closed", "8:00-18:00", "24:00-25:00", "08:60-09:00", "08:00 - 18:00", "08:00-18:00\n", ""] {
            assert_eq!(
                time_range_errors(bad),
                ["expected 'HH:MM-HH:MM' or 'Closed'"],
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn iso_dates_must_be_real_padded_days() {
        assert!(is_iso_date("2024-02-29"));
        assert!(is_iso_date("2024-12-25"));
        assert!(!is_iso_date("2023-02-29"));
        assert!(!is_iso_date("2024-02-30"));
        assert!(!is_iso_date("2024-1-05"));
        assert!(!is_iso_date("20240105"));
        assert!(!is_iso_date("2024-ab-05"));
    }

    #[test]
    fn ids_are_lowercase_slugs() {
        assert!(is_valid_id("coffee_shop-2"));
        assert!(!is_valid_id("Coffee"));
        assert!(!is_valid_id("coffee shop"));
        assert!(!is_valid_id("café"));
    }

    #[test]
    fn bounds_need_two_numeric_pairs() {
        let good: Value = serde_json::from_str("[[37.6, -122.6], [37.8, -122.4]]").unwrap();
        let short: Value = serde_json::from_str("[[37.6, -122.6]]").unwrap();
        let text: Value = serde_json::from_str(r#"[["a", "b"], [1, 2]]"#).unwrap();
        assert!(is_bounds(&good));
        assert!(!is_bounds(&short));
        assert!(!is_bounds(&text));
    }
}
