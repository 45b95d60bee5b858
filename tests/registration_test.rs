//! Integration tests for model registration and schema export
//!
//! Tests the TagSchema coordinator end to end: class building with the
//! configured validation, two-phase linking and JSON export.

use serde_json::json;
use tagschema::prelude::*;

#[model]
#[schema(name = "Tag")]
pub struct Tag {
    pub label: String,
    pub color: Option<String>,
}

fn person(schemas: &TagSchema) -> ModelClass {
    schemas
        .class_builder("Person")
        .field("name", TYPES.string())
        .field("age", TYPES.optional().int())
        .field("tags", TYPES.set(TypeRef::model::<Tag>()).unwrap())
        .deferred_field("friends", || TYPES.list(TypeRef::named("Person")))
        .build()
        .unwrap()
}

#[test]
fn test_materialized_instance() {
    let schemas = TagSchema::new(AppConfig::default()).unwrap();
    let person = person(&schemas);

    let mut instance = person.instantiate();
    assert!(instance.is_materialized());
    assert_eq!(instance.get("name"), Some(&Value::from("")));
    assert_eq!(instance.get("age"), Some(&Value::Int(0)));
    assert_eq!(instance.get("friends"), Some(&Value::List(vec![])));

    // Running materialization again finds nothing to do
    assert_eq!(materialize(&mut instance), 0);
    assert_eq!(instance.schema(), person.schema());
}

#[test]
fn test_link_and_export() {
    let mut schemas = TagSchema::new(AppConfig::default()).unwrap();
    let person = person(&schemas);

    schemas.register_class(&person).unwrap();
    schemas.register_model::<Tag>().unwrap();
    assert_eq!(schemas.model_names(), vec!["Person", "Tag"]);

    assert_eq!(
        schemas.export_value().unwrap(),
        json!([
            {
                "name": "Person",
                "properties": {
                    "age": "int?",
                    "friends": "Person[]",
                    "name": "string",
                    "tags": "Tag<>"
                }
            },
            {
                "name": "Tag",
                "properties": { "color": "string?", "label": "string" }
            }
        ])
    );
}

#[test]
fn test_export_formatting_follows_config() {
    let mut config = AppConfig::default();
    config.export.pretty = false;
    let mut schemas = TagSchema::new(config).unwrap();
    schemas.register_model::<Tag>().unwrap();

    let compact = schemas.export_json().unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(
        compact,
        r#"[{"name":"Tag","properties":{"color":"string?","label":"string"}}]"#
    );
}

#[test]
fn test_missing_reference_fails_link() {
    let mut schemas = TagSchema::new(AppConfig::default()).unwrap();
    let person = person(&schemas);
    schemas.register_class(&person).unwrap();

    match schemas.link() {
        Err(TagSchemaError::Schema(SchemaError::UnknownModel { target, .. })) => {
            assert_eq!(target, "Tag")
        }
        other => panic!("expected UnknownModel, got {:?}", other),
    }
}

#[test]
fn test_dangling_references_from_config() {
    let config =
        AppConfig::from_toml_str("[registry]\nallow_dangling_references = true\n").unwrap();
    let mut schemas = TagSchema::new(config).unwrap();
    let person = person(&schemas);
    schemas.register_class(&person).unwrap();

    assert_eq!(schemas.link().unwrap().len(), 1);
}

#[test]
fn test_duplicate_registration() {
    let mut schemas = TagSchema::new(AppConfig::default()).unwrap();
    schemas.register_model::<Tag>().unwrap();
    assert!(matches!(
        schemas.register_model::<Tag>(),
        Err(TagSchemaError::Schema(SchemaError::DuplicateModel(_)))
    ));
}

#[test]
fn test_configured_name_limits() {
    let config = AppConfig::from_toml_str("[validation]\nmax_field_name_length = 4\n").unwrap();
    let schemas = TagSchema::new(config).unwrap();

    let result = schemas
        .class_builder("Short")
        .field("too_long", TYPES.int())
        .build();
    assert!(matches!(result, Err(SchemaError::InvalidIdentifier(_))));
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = AppConfig::default();
    config.validation.max_model_name_length = 100;
    assert!(matches!(
        TagSchema::new(config),
        Err(TagSchemaError::Config(_))
    ));
}

#[test]
fn test_export_without_path() {
    let schemas = TagSchema::new(AppConfig::default()).unwrap();
    assert!(matches!(
        schemas.export(),
        Err(TagSchemaError::ExportPathNotConfigured)
    ));
}

#[test]
fn test_export_to_file() {
    let path = std::env::temp_dir().join(format!("tagschema_export_{}.json", std::process::id()));
    let mut config = AppConfig::default();
    config.export.output_path = Some(path.display().to_string());

    let mut schemas = TagSchema::new(config).unwrap();
    schemas.register_model::<Tag>().unwrap();
    schemas.export().unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written[0]["name"], json!("Tag"));
    std::fs::remove_file(&path).unwrap();
}
