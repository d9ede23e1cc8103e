use crate::validate::rules::common::{
    validate_non_empty_string, validate_optional_number, validate_position_present,
    validate_record_id,
};
use crate::validate::rules::fields::validate_lat_long;
use crate::validate::rules::registry::IdRegistry;
use crate::validate::validator::Validator;
use crate::value::Value;

pub(crate) fn validate_location(
    v: &mut Validator,
    record: &Value,
    idx: usize,
    registry: &mut IdRegistry,
) {
    let path = format!("locations[{idx}]");
    if record.as_table().is_none() {
        v.push(path, "must be a table");
        return;
    }

    validate_record_id(v, &path, record, registry);
    validate_non_empty_string(v, &format!("{path}.name"), record.get("name"));
    validate_position_present(v, &path, record);
    validate_lat_long(v, &path, record);
    validate_optional_number(v, &format!("{path}.zoom"), record.get("zoom"));
}
