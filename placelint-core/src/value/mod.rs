//! Format-independent document tree handed to the validator.
//!
//! Every front-end (TOML, JSON, YAML) deserializes straight into [`Value`], so
//! the rules only ever match on these tags and never on a parser's own types.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// Key order follows the source document.
pub type Table = IndexMap<String, Value>;

/// Field name the `toml` deserializer uses to smuggle date/time values through serde.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Datetime(String),
    Array(Vec<Value>),
    Table(Table),
    Null,
}

impl Value {
    /// Looks up `key` in a table. Missing keys and explicit nulls both read as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Table(t) => match t.get(key) {
                Some(Value::Null) | None => None,
                Some(v) => Some(v),
            },
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Booleans are never numbers, even in formats that store them as integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Datetime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
            Value::Null => "null",
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any document value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v)
            .map(Value::Integer)
            .unwrap_or(Value::Float(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = Table::new();
        while let Some(key) = map.next_key::<String>()? {
            if key == TOML_DATETIME_KEY && table.is_empty() {
                let raw = map.next_value::<String>()?;
                return Ok(Value::Datetime(raw));
            }
            let value = map.next_value::<Value>()?;
            table.insert(key, value);
        }
        Ok(Value::Table(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_are_not_numbers() {
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Boolean(true));
        assert!(!v.is_number());
        assert_eq!(v.as_f64(), None);
    }

    #[test]
    fn toml_datetimes_are_not_strings() {
        let v: Value = toml::from_str("opened = 2024-05-01").unwrap();
        let opened = v.get("opened").unwrap();
        assert_eq!(opened, &Value::Datetime("2024-05-01".to_string()));
        assert_eq!(opened.as_str(), None);
    }

    #[test]
    fn table_keys_keep_document_order() {
        let v: Value = toml::from_str("zeta = 1\nalpha = 2\nmid = 3").unwrap();
        let keys: Vec<&str> = v.as_table().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn null_reads_as_absent() {
        let v: Value = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert!(v.get("phone").is_none());
        assert!(v.as_table().unwrap().contains_key("phone"));
    }

    #[test]
    fn oversized_unsigned_integers_become_floats() {
        let v: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(v, Value::Float(_)));
    }
}
