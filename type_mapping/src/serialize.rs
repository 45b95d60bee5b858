//! Serialization utilities
//!
//! This module provides conversion between serde data, JSON
//! and plain field values.

use crate::tag::{ScalarKind, TypeTag};
use crate::types::{Record, Value};
use serde::Serialize;

/// Convert the listed fields of serializable data to a field record
///
/// Fields with a tag are converted by that tag; fields without one fall
/// back to [`from_json`]. Fields not listed are left out.
pub fn serialize_to_record<T, K>(data: &T, fields: &[(K, Option<TypeTag>)]) -> Record
where
    T: Serialize,
    K: AsRef<str>,
{
    let mut record = Record::new();

    // Serialize to JSON first, then convert each field
    if let Ok(serde_json::Value::Object(mut map)) = serde_json::to_value(data) {
        for (field, tag) in fields {
            let field = field.as_ref();
            if let Some(value) = map.remove(field) {
                let value = match tag {
                    Some(tag) => from_json_tagged(value, tag),
                    None => from_json(value),
                };
                record.insert(field.to_string(), value);
            }
        }
    }

    record
}

/// Convert a JSON value into the plain value a field of `tag` holds
///
/// Values that do not fit the tag are converted untyped.
pub fn from_json_tagged(value: serde_json::Value, tag: &TypeTag) -> Value {
    use serde_json::Value as Json;

    match (tag, value) {
        (_, Json::Null) => Value::Null,
        (TypeTag::Optional(inner), value) => from_json_tagged(value, inner),
        (TypeTag::Scalar(kind), value) => scalar_from_json(*kind, value),
        (TypeTag::List(inner), Json::Array(items)) => Value::List(
            items
                .into_iter()
                .map(|item| from_json_tagged(item, inner))
                .collect(),
        ),
        (TypeTag::Set(inner), Json::Array(items)) => {
            Value::set(items.into_iter().map(|item| from_json_tagged(item, inner)))
        }
        (TypeTag::Dictionary(inner), Json::Object(map)) => Value::Dictionary(
            map.into_iter()
                .map(|(key, value)| (key, from_json_tagged(value, inner)))
                .collect(),
        ),
        (_, value) => from_json(value),
    }
}

fn scalar_from_json(kind: ScalarKind, value: serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match (kind, value) {
        (ScalarKind::Int, Json::Number(n)) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => from_json(Json::Number(n)),
        },
        (ScalarKind::Float, Json::Number(n)) => Value::Float(n.as_f64().unwrap_or_default() as f32),
        (ScalarKind::Double, Json::Number(n)) => Value::Double(n.as_f64().unwrap_or_default()),
        (ScalarKind::String, Json::String(s)) => Value::String(s),
        (ScalarKind::Bool, Json::Bool(b)) => Value::Bool(b),
        (ScalarKind::Date, Json::String(s)) => match chrono::DateTime::parse_from_rfc3339(&s) {
            Ok(dt) => Value::Date(dt.with_timezone(&chrono::Utc)),
            Err(_) => Value::String(s),
        },
        (ScalarKind::Uuid, Json::String(s)) => match uuid::Uuid::parse_str(&s) {
            Ok(id) => Value::Uuid(id),
            Err(_) => Value::String(s),
        },
        (_, value) => from_json(value),
    }
}

/// Convert a JSON value into a plain value
pub fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::String(s) => {
            // Try to parse as RFC3339 timestamp first
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                Value::Date(dt.with_timezone(&chrono::Utc))
            } else {
                Value::String(s)
            }
        }
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Double(n.as_f64().unwrap_or_default())
            }
        }
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

/// Convert a plain value into JSON for export
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Value::from(f64::from(*f)),
        Value::Double(d) => serde_json::Value::from(*d),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Date(dt) => serde_json::Value::String(dt.to_rfc3339()),
        Value::Uuid(id) => serde_json::Value::String(id.to_string()),
        Value::List(items) | Value::Set(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect())
        }
        Value::Dictionary(map) | Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        id: uuid::Uuid,
        count: i64,
        label: String,
        weight: f32,
        ratio: f64,
        created: String,
        tags: Vec<String>,
        note: Option<String>,
        scratch: bool,
    }

    fn sample() -> Sample {
        Sample {
            id: uuid::Uuid::nil(),
            count: 3,
            label: "2024-01-01T00:00:00Z".to_string(),
            weight: 1.5,
            ratio: 0.5,
            created: "2024-01-01T00:00:00Z".to_string(),
            tags: vec!["a".to_string(), "a".to_string()],
            note: None,
            scratch: true,
        }
    }

    fn tagged(field: &str, tag: &str) -> (String, Option<TypeTag>) {
        (field.to_string(), Some(TypeTag::parse(tag).unwrap()))
    }

    #[test]
    fn test_record_follows_field_tags() {
        let fields = [
            tagged("id", "uuid"),
            tagged("count", "int"),
            tagged("label", "string"),
            tagged("weight", "float"),
            tagged("ratio", "double"),
            tagged("created", "date"),
            tagged("tags", "string<>"),
            tagged("note", "string?"),
        ];
        let record = serialize_to_record(&sample(), &fields);

        assert_eq!(record["id"], Value::Uuid(uuid::Uuid::nil()));
        assert_eq!(record["count"], Value::Int(3));
        // A date-looking string stays a string under a string tag
        assert_eq!(record["label"], Value::from("2024-01-01T00:00:00Z"));
        assert_eq!(record["weight"], Value::Float(1.5));
        assert_eq!(record["ratio"], Value::Double(0.5));
        assert!(matches!(record["created"], Value::Date(_)));
        assert_eq!(record["tags"], Value::set(["a"]));
        assert_eq!(record["note"], Value::Null);
        assert!(!record.contains_key("scratch"));
    }

    #[test]
    fn test_untagged_fields_use_json_shape() {
        let fields = [("count", None), ("created", None), ("tags", None)];
        let record = serialize_to_record(&sample(), &fields);

        assert_eq!(record["count"], Value::Int(3));
        assert!(matches!(record["created"], Value::Date(_)));
        assert_eq!(record["tags"], Value::list(["a", "a"]));
    }

    #[test]
    fn test_mismatched_value_falls_back() {
        let tag = TypeTag::parse("uuid").unwrap();
        assert_eq!(from_json_tagged(json!("not-a-uuid"), &tag), Value::from("not-a-uuid"));
        assert_eq!(from_json_tagged(json!(7), &tag), Value::Int(7));

        let tag = TypeTag::parse("int{}").unwrap();
        assert_eq!(
            from_json_tagged(json!({ "one": 1 }), &tag),
            Value::dictionary([("one", Value::Int(1))])
        );
    }

    #[test]
    fn test_non_object_serializes_to_empty_record() {
        assert!(serialize_to_record::<_, &str>(&42, &[("count", None)]).is_empty());
    }

    #[test]
    fn test_to_json() {
        let value = Value::dictionary([("n", Value::Int(1)), ("s", Value::set(["a", "a"]))]);
        assert_eq!(to_json(&value), json!({ "n": 1, "s": ["a"] }));
        assert_eq!(to_json(&Value::Null), json!(null));
    }
}
