//! Unified type mapping between Rust types and the object schema grammar
//! This crate provides the tag grammar and plain values used across the tagschema ecosystem

pub mod mapping;
pub mod serialize;
pub mod tag;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use mapping::{UnmappedTypeError, checked_type_tag, rust_type_to_type_tag, split_generic};
pub use serialize::{from_json, from_json_tagged, serialize_to_record, to_json};
pub use tag::{CollectionKind, ScalarKind, TagParseError, TypeTag};
pub use types::{Record, Value};
pub use validate::{is_valid_object_name, is_valid_type_tag};
