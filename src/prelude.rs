//! Convenience re-exports for common tagschema usage
//!
//! This prelude module re-exports the most commonly used items from the tagschema
//! workspace, making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use tagschema::prelude::*;
//!
//! let label = TYPES.optional().string();
//! assert_eq!(label.type_tag(), "string?");
//! ```

// Core tagschema components
pub use crate::core::TagSchema;
pub use crate::errors::TagSchemaError;
pub use crate::export::schemas_to_json;

// Re-export centralized config
pub use config::{AppConfig, ExportConfig, RegistryConfig, ValidationConfig};

// Re-export commonly used model-object types for convenience
pub use model_object::prelude::*;

// Re-export model_object module for macro-generated code
pub use model_object;

// Re-export model derive for model creation
pub use model_derive::{SchemaModel, model};

// Common external dependencies
pub use anyhow;
pub use serde::{Deserialize, Serialize};
