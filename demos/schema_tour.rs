//! # Schema Tour
//!
//! This demo walks through the main ways of declaring models:
//! - Runtime classes built from the type factory
//! - Optional fields and collections
//! - Self and forward references
//! - Struct models using the `#[model]` derive
//! - Linking and exporting the registered schemas

use tagschema::prelude::*;

/// Struct model; tags come from the Rust field types
#[model]
#[schema(name = "Dog")]
pub struct Dog {
    pub name: String,

    /// Maps to `int?`
    pub age: Option<i64>,

    /// Back-reference to the owners, declared with an explicit tag
    #[field(type = "Person[]")]
    pub owners: Vec<String>,

    /// Never persisted
    #[field(skip)]
    pub last_walked_minutes: u32,
}

fn main() -> anyhow::Result<()> {
    println!("🏷️  tagschema tour");
    println!("==================");

    let mut schemas = TagSchema::new(AppConfig::default())?;

    // Runtime class with defaults, an optional field and a self-reference
    let person = schemas
        .class_builder("Person")
        .field("name", TYPES.string())
        .field("visits", TYPES.int_with(1))
        .field("nickname", TYPES.optional().string())
        .field("dogs", TYPES.list(deferred!(model Dog))?)
        .deferred_field("friends", || TYPES.set(TypeRef::named("Person")))
        .field("preferences", TYPES.dictionary(ScalarKind::Mixed)?)
        .plain_field("session_counter", 0_i64)
        .build()?;

    println!("\n📐 Person schema:");
    for (field, tag) in &person.schema().properties {
        println!("   {:<12} {}", field, tag);
    }

    let mut instance = person.instantiate();
    if let Some(visits) = instance.get_mut("visits") {
        *visits = Value::Int(2);
    }
    println!("\n📦 Persisted values of a fresh Person:");
    for (field, value) in instance.persisted_record() {
        println!("   {:<12} {:?}", field, value);
    }

    // Two-phase registration: order does not matter
    schemas.register_class(&person)?;
    schemas.register_model::<Dog>()?;

    let dog = Dog {
        name: "Rex".to_string(),
        age: Some(4),
        ..Dog::default()
    };
    println!("\n🐕 Dog record: {:?}", dog.to_record());

    println!("\n🔗 Linked models: {:?}", schemas.model_names());
    println!("\n📄 Exported schema:\n{}", schemas.export_json()?);

    // A reference to a model nobody registered is caught at link time
    let mut dangling = TagSchema::new(AppConfig::default())?;
    let orphan = dangling
        .class_builder("Orphan")
        .field("parent", TYPES.optional().list(dangling.reference("Missing"))?)
        .build()?;
    dangling.register_class(&orphan)?;
    if let Err(e) = dangling.link() {
        println!("\n⚠️  Expected link failure: {}", e);
    }

    Ok(())
}
