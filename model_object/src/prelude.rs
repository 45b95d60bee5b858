//! Convenience re-exports for common model-object usage

// Type declaration
pub use crate::factory::{TYPES, TypeFactory, TypeKind};
pub use crate::descriptor::TypeDescriptor;
pub use crate::type_ref::TypeRef;
pub use crate::deferred;

// Models
pub use crate::instance::{ModelInstance, materialize};
pub use crate::model_class::{FieldSpec, ModelClass};
pub use crate::registry::{ModelRegistry, RegistryOptions};
pub use crate::schema::SchemaMap;
pub use crate::traits::SchemaModel;

// Error types
pub use crate::errors::SchemaError;

// Validation
pub use crate::validation::{ValidatedFieldName, ValidatedModelName, ValidationError};

// Values
pub use type_mapping::{ScalarKind, Value};
