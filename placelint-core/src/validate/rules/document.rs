use crate::validate::rules::common::{validate_non_empty_string, validate_optional_number};
use crate::validate::rules::fields::is_bounds;
use crate::validate::rules::registry::IdRegistry;
use crate::validate::rules::{business, location, taxonomy};
use crate::validate::validator::Validator;
use crate::value::Value;

pub(crate) fn validate_document(v: &mut Validator, doc: &Value) {
    if doc.as_table().is_none() {
        v.push("data", "root must be a table");
        return;
    }

    let allowed_types = taxonomy::resolve_allowed_types(doc);

    validate_non_empty_string(v, "title", doc.get("title"));
    validate_map_defaults(v, doc.get("map_defaults"));

    let businesses = collection(v, doc, "businesses");
    let locations = collection(v, doc, "locations");

    // Businesses go first: the earlier declaration is the one duplicates point back to.
    let mut registry = IdRegistry::default();
    for (idx, record) in businesses.iter().enumerate() {
        business::validate_business(v, record, idx, &allowed_types, &mut registry);
    }
    for (idx, record) in locations.iter().enumerate() {
        location::validate_location(v, record, idx, &mut registry);
    }

    if businesses.is_empty() {
        v.warn("businesses", "no businesses listed");
    }
    if locations.is_empty() {
        v.warn("locations", "no locations listed");
    }
}

fn validate_map_defaults(v: &mut Validator, map_defaults: Option<&Value>) {
    let map_defaults = match map_defaults {
        None => {
            v.warn("map_defaults", "missing map_defaults");
            return;
        }
        Some(m @ Value::Table(_)) => m,
        Some(_) => {
            v.push("map_defaults", "must be a table");
            return;
        }
    };

    for key in ["lat", "long", "zoom"] {
        let path = format!("map_defaults.{key}");
        match map_defaults.get(key) {
            None => v.push(path, "is required"),
            Some(value) if !value.is_number() => v.push(path, "must be a number"),
            Some(_) => {}
        }
    }
    validate_optional_number(v, "map_defaults.min_zoom", map_defaults.get("min_zoom"));
    if let Some(bounds) = map_defaults.get("max_bounds") {
        if !is_bounds(bounds) {
            v.push("map_defaults.max_bounds", "must be [[lat, long], [lat, long]]");
        }
    }
}

/// Missing collections read as empty; present but non-array ones are an error and also read as empty.
fn collection<'a>(v: &mut Validator, doc: &'a Value, key: &str) -> &'a [Value] {
    match doc.get(key) {
        None => &[],
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => {
            v.push(key, "must be an array");
            &[]
        }
    }
}
