//! Integration tests for struct models using the derive macro
//!
//! Tests the tags derived from Rust field types, explicit tags, skipped
//! fields and the records produced from model values.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::{BTreeSet, HashMap};
use tagschema::prelude::*;
use uuid::Uuid;

/// Model covering every scalar kind and collection
#[model]
#[schema(name = "Inventory")]
pub struct Inventory {
    pub id: Uuid,
    pub title: String,
    pub count: i32,
    pub weight: f32,
    pub price: f64,
    pub active: bool,
    pub extra: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub note: Option<String>,
    pub items: Vec<Item>,
    pub stock: HashMap<String, i64>,
    pub labels: BTreeSet<String>,
    pub history: Option<Vec<i64>>,
}

#[model]
pub struct Item {
    pub name: String,

    #[field(type = "Inventory?")]
    pub owner: Option<String>,

    pub quantity: u64,
    pub grade: char,

    #[field(skip)]
    pub cached_total: u32,
}

#[test]
fn test_derived_tags() {
    let schema = Inventory::schema();
    assert_eq!(schema.name(), Some("Inventory"));

    let expected = [
        ("id", "uuid"),
        ("title", "string"),
        ("count", "int"),
        ("weight", "float"),
        ("price", "double"),
        ("active", "bool"),
        ("extra", "mixed"),
        ("created_at", "date"),
        ("note", "string?"),
        ("items", "Item[]"),
        ("stock", "int{}"),
        ("labels", "string<>"),
        ("history", "int[]?"),
    ];
    for (field, tag) in expected {
        assert_eq!(schema.get(field), Some(tag), "tag of {}", field);
    }
    assert_eq!(schema.len(), expected.len());
}

#[test]
fn test_field_order_is_declaration_order() {
    let fields: Vec<&str> = Inventory::field_tags().into_iter().map(|(f, _)| f).collect();
    assert_eq!(fields.first(), Some(&"id"));
    assert_eq!(fields.last(), Some(&"history"));
}

#[test]
fn test_name_defaults_to_struct_ident() {
    assert_eq!(Item::model_name(), "Item");
}

#[test]
fn test_explicit_and_skipped_fields() {
    let schema = Item::schema();
    assert_eq!(schema.get("owner"), Some("Inventory?"));
    assert!(!schema.contains("cached_total"));
    assert_eq!(
        schema.to_json(),
        json!({
            "name": "Item",
            "properties": {
                "name": "string",
                "owner": "Inventory?",
                "quantity": "int",
                "grade": "string"
            }
        })
    );
}

#[test]
fn test_record_leaves_out_skipped_fields() {
    let item = Item {
        name: "bolt".to_string(),
        owner: None,
        quantity: u64::from(u32::MAX) + 1,
        grade: 'A',
        cached_total: 12,
    };

    let record = item.to_record();
    assert_eq!(record.get("name"), Some(&Value::from("bolt")));
    assert_eq!(record.get("owner"), Some(&Value::Null));
    assert_eq!(record.get("quantity"), Some(&Value::Int(4_294_967_296)));
    assert_eq!(record.get("grade"), Some(&Value::from("A")));
    assert!(!record.contains_key("cached_total"));
}

#[test]
fn test_record_values_follow_field_tags() {
    let id = Uuid::new_v4();
    let created_at = DateTime::parse_from_rfc3339("2024-05-01T08:30:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let inventory = Inventory {
        id,
        title: "2024-01-01T00:00:00Z".to_string(),
        count: 4,
        weight: 2.5,
        price: 9.75,
        created_at,
        labels: ["b", "a"].into_iter().map(String::from).collect(),
        ..Inventory::default()
    };

    let record = inventory.to_record();
    assert_eq!(record.get("id"), Some(&Value::Uuid(id)));
    // A string field holding a timestamp stays a string
    assert_eq!(record.get("title"), Some(&Value::from("2024-01-01T00:00:00Z")));
    assert_eq!(record.get("count"), Some(&Value::Int(4)));
    assert_eq!(record.get("weight"), Some(&Value::Float(2.5)));
    assert_eq!(record.get("price"), Some(&Value::Double(9.75)));
    assert_eq!(record.get("created_at"), Some(&Value::Date(created_at)));
    assert_eq!(record.get("labels"), Some(&Value::set(["a", "b"])));
    assert_eq!(record.get("note"), Some(&Value::Null));
    assert_eq!(record.get("history"), Some(&Value::Null));
}

#[test]
fn test_model_reference_in_factory() {
    let shelf = ModelClass::builder()
        .name("Shelf")
        .field("contents", TYPES.list(TypeRef::model::<Inventory>()).unwrap())
        .field("featured", TYPES.optional().set(deferred!(model Item)).unwrap())
        .build()
        .unwrap();

    assert_eq!(shelf.schema().get("contents"), Some("Inventory[]"));
    assert_eq!(shelf.schema().get("featured"), Some("Item<>?"));
}
