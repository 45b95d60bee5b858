//! Trait definitions
//!
//! Schema description of a statically declared model.

use serde::Serialize;
use type_mapping::{Record, TypeTag, serialize_to_record};

use crate::schema::SchemaMap;

/// Schema metadata of a model struct
///
/// This trait should be derived using the `#[model]` attribute macro, which
/// also adds the serde derives `to_record` relies on.
///
/// Recommended usage:
/// ```ignore
/// use model_derive::model;
///
/// #[model]
/// #[schema(name = "Person")]
/// pub struct Person {
///     pub name: String,
///     pub age: Option<i64>,
///
///     #[field(type = "Person[]")]
///     pub friends: Vec<String>,
///
///     #[field(skip)]
///     pub scratch: u32,
/// }
/// ```
pub trait SchemaModel {
    /// Model name the schema is registered under
    fn model_name() -> &'static str;

    /// `(field, tag)` pairs of the persisted fields, in declaration order
    fn field_tags() -> Vec<(&'static str, String)>;

    fn schema() -> SchemaMap {
        let mut schema = SchemaMap::named(Self::model_name());
        for (field, tag) in Self::field_tags() {
            schema.insert(field, tag);
        }
        schema
    }

    /// Persisted field values, converted by each field's tag
    ///
    /// Skipped fields are left out.
    fn to_record(&self) -> Record
    where
        Self: Serialize + Sized,
    {
        let fields: Vec<(&'static str, Option<TypeTag>)> = Self::field_tags()
            .into_iter()
            .map(|(field, tag)| (field, TypeTag::parse(&tag).ok()))
            .collect();
        serialize_to_record(self, &fields)
    }
}
