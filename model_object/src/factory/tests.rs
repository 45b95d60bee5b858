//! Type factory tests
//!
//! Tag and default behaviour of every constructor.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;
use type_mapping::{CollectionKind, ScalarKind, Value};

use super::{TYPES, TypeFactory, TypeKind};
use crate::errors::SchemaError;
use crate::type_ref::TypeRef;

// ========================================
// Scalars
// ========================================

#[test]
fn test_scalar_tags_and_zero_defaults() {
    let cases = [
        (TYPES.int(), "int", Value::Int(0)),
        (TYPES.float(), "float", Value::Float(0.0)),
        (TYPES.double(), "double", Value::Double(0.0)),
        (TYPES.string(), "string", Value::String(String::new())),
        (TYPES.bool(), "bool", Value::Bool(false)),
        (TYPES.mixed(), "mixed", Value::Null),
    ];

    for (descriptor, tag, default) in cases {
        assert_eq!(descriptor.type_tag(), tag);
        assert_eq!(descriptor.default_value(), &default, "zero value of {}", tag);
        assert!(!descriptor.is_optional());
    }
}

#[test]
fn test_scalar_explicit_defaults() {
    assert_eq!(TYPES.int_with(3).default_value(), &Value::Int(3));
    assert_eq!(TYPES.float_with(1.5).default_value(), &Value::Float(1.5));
    assert_eq!(TYPES.double_with(2.25).default_value(), &Value::Double(2.25));
    assert_eq!(TYPES.string_with("hi").default_value(), &Value::from("hi"));
    assert_eq!(TYPES.bool_with(true).default_value(), &Value::Bool(true));
    assert_eq!(TYPES.mixed_with(7_i64).default_value(), &Value::Int(7));
}

#[test]
fn test_supplemental_scalars() {
    assert_eq!(TYPES.date().type_tag(), "date");
    assert_eq!(TYPES.uuid().type_tag(), "uuid");
    assert_eq!(
        TYPES.uuid().default_value(),
        &Value::Uuid(uuid::Uuid::nil())
    );

    let now = chrono::Utc::now();
    assert_eq!(TYPES.date_with(now).default_value(), &Value::Date(now));
}

// ========================================
// Collections
// ========================================

#[test]
fn test_collection_sigils() {
    let element = TypeRef::named("Person");
    assert_eq!(TYPES.list(element.clone()).unwrap().type_tag(), "Person[]");
    assert_eq!(
        TYPES.dictionary(element.clone()).unwrap().type_tag(),
        "Person{}"
    );
    assert_eq!(TYPES.set(element).unwrap().type_tag(), "Person<>");
}

#[test]
fn test_collection_of_descriptors_and_kinds() {
    assert_eq!(TYPES.list(TYPES.int()).unwrap().type_tag(), "int[]");
    assert_eq!(
        TYPES.dictionary(ScalarKind::Mixed).unwrap().type_tag(),
        "mixed{}"
    );
    assert_eq!(TYPES.set(ScalarKind::String).unwrap().type_tag(), "string<>");

    // The element keeps its own optional suffix inside the sigil
    assert_eq!(
        TYPES.list(TYPES.optional().int()).unwrap().type_tag(),
        "int?[]"
    );
}

#[test]
fn test_collection_defaults() {
    assert_eq!(
        TYPES.list(ScalarKind::Int).unwrap().default_value(),
        &Value::List(vec![])
    );
    assert_eq!(
        TYPES.dictionary(ScalarKind::Int).unwrap().default_value(),
        &Value::Dictionary(BTreeMap::new())
    );
    assert_eq!(
        TYPES.set(ScalarKind::Int).unwrap().default_value(),
        &Value::Set(vec![])
    );

    let ints = TYPES.list_with(TYPES.int(), [1_i64, 2, 3]).unwrap();
    assert_eq!(ints.default_value(), &Value::list([1_i64, 2, 3]));

    let set = TYPES.set_with(ScalarKind::String, ["a", "b", "a"]).unwrap();
    assert_eq!(set.default_value(), &Value::set(["a", "b"]));

    let dict = TYPES
        .dictionary_with(ScalarKind::Int, BTreeMap::from([("one", 1_i64)]))
        .unwrap();
    assert_eq!(
        dict.default_value(),
        &Value::dictionary([("one", Value::Int(1))])
    );
}

#[test]
fn test_nested_collections() {
    let nested = TYPES.list(TYPES.dictionary(ScalarKind::Int).unwrap()).unwrap();
    assert_eq!(nested.type_tag(), "int{}[]");
}

// ========================================
// Optional mode
// ========================================

#[test]
fn test_optional_appends_single_suffix() {
    let optional = TYPES.optional();
    assert!(optional.is_optional());
    assert_eq!(optional.string().type_tag(), "string?");
    assert_eq!(optional.optional().string().type_tag(), "string?");
    assert_eq!(
        optional.list(ScalarKind::String).unwrap().type_tag(),
        "string[]?"
    );
    assert_eq!(optional.optional(), optional);
}

#[test]
fn test_optional_keeps_defaults() {
    assert_eq!(
        TYPES.optional().string().default_value(),
        &Value::String(String::new())
    );
    assert_eq!(TYPES.optional().int_with(5).default_value(), &Value::Int(5));
}

#[test]
fn test_required_factory_is_default() {
    assert_eq!(TypeFactory::default(), TYPES);
    assert!(!TYPES.is_optional());
}

// ========================================
// Deferred references
// ========================================

#[test]
fn test_deferred_element_resolved_by_factory_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let element = TypeRef::deferred(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        TypeRef::named("SelfClass")
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let descriptor = TYPES.list(element).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(descriptor.type_tag(), "SelfClass[]");
}

// ========================================
// Kind-keyed construction
// ========================================

#[test]
fn test_construct_by_kind_name() {
    for kind in ScalarKind::ALL {
        let descriptor = TYPES.construct_named(kind.keyword(), None).unwrap();
        assert_eq!(descriptor.type_tag(), kind.keyword());
        assert_eq!(descriptor.default_value(), &kind.zero_value());
    }

    for kind in CollectionKind::ALL {
        let descriptor = TYPES
            .optional()
            .construct_named(kind.keyword(), Some(TypeRef::named("Person")))
            .unwrap();
        assert_eq!(descriptor.type_tag(), format!("Person{}?", kind.sigil()));
    }
}

#[test]
fn test_construct_errors() {
    assert_eq!(
        TYPES.construct_named("decimal", None),
        Err(SchemaError::UnknownKind("decimal".to_string()))
    );
    assert_eq!(
        TYPES.construct(TypeKind::Collection(CollectionKind::List), None),
        Err(SchemaError::MissingElementType("list".to_string()))
    );
    assert_eq!(
        TYPES.construct(
            TypeKind::Scalar(ScalarKind::Int),
            Some(TypeRef::named("Person"))
        ),
        Err(SchemaError::UnexpectedElementType("int".to_string()))
    );
}

#[test]
fn test_kind_round_trips_through_name() {
    let kind: TypeKind = "dictionary".parse().unwrap();
    assert_eq!(kind, TypeKind::Collection(CollectionKind::Dictionary));
    assert_eq!(kind.to_string(), "dictionary");
}

// ========================================
// Unresolvable element types
// ========================================

#[test]
fn test_plain_object_literal_is_unresolvable() {
    let literal = json!({ "size": 3 });

    for result in [
        TYPES.list(literal.clone()),
        TYPES.dictionary(literal.clone()),
        TYPES.set(literal.clone()),
        TYPES.optional().list(literal),
    ] {
        match result {
            Err(SchemaError::UnresolvableType { value }) => assert!(value.contains("size")),
            other => panic!("expected UnresolvableType, got {:?}", other),
        }
    }
}
