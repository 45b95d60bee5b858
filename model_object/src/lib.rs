//! Model Object - schema declaration core for tagschema
//!
//! This crate provides the type factory, the type reference resolver, schema
//! materialization, model classes and the two-phase model registry.

pub mod descriptor;
pub mod errors;
pub mod factory;
pub mod instance;
pub mod model_class;
pub mod prelude;
pub mod registry;
pub mod schema;
pub mod traits;
pub mod type_ref;
pub mod validation;

pub use descriptor::TypeDescriptor;
pub use errors::SchemaError;
pub use factory::{TYPES, TypeFactory, TypeKind};
pub use instance::{Materialized, ModelInstance, Slot, materialize, materialize_template};
pub use model_class::{FieldSpec, ModelClass, ModelClassBuilder, build_model_class};
pub use registry::{ModelRegistry, RegistryOptions};
pub use schema::SchemaMap;
pub use traits::*;
pub use type_ref::{DeferredRef, TypeRef, name_from_source, resolve};
pub use validation::{ValidatedFieldName, ValidatedModelName, ValidationError};

pub use type_mapping::{CollectionKind, Record, ScalarKind, TypeTag, Value};
