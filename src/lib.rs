//! # tagschema
//!
//! Declarative object-model schemas built from per-field type descriptors.
//! Fields are declared through the type factory, materialized to their
//! defaults, and described by a `name -> tag` schema map in the grammar the
//! object database understands (`int`, `string?`, `Person[]`, `mixed{}`, `Tag<>`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tagschema::prelude::*;
//!
//! #[model]
//! #[schema(name = "Dog")]
//! pub struct Dog {
//!     pub name: String,
//!     pub age: Option<i64>,
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut schemas = TagSchema::new(AppConfig::default())?;
//!
//!     let person = schemas
//!         .class_builder("Person")
//!         .field("name", TYPES.string())
//!         .field("dogs", TYPES.list(TypeRef::model::<Dog>())?)
//!         .field("nickname", TYPES.optional().string())
//!         .build()?;
//!
//!     schemas.register_class(&person)?;
//!     schemas.register_model::<Dog>()?;
//!
//!     let instance = person.instantiate();
//!     assert_eq!(instance.get("nickname"), Some(&Value::from("")));
//!
//!     println!("{}", schemas.export_json()?);
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod export;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::TagSchema;
pub use errors::TagSchemaError;
pub use export::schemas_to_json;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, ExportConfig, RegistryConfig, ValidationConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use model_derive;
pub use model_object;
pub use type_mapping;
