//! Error types for the tagschema crate
//!
//! This module contains all error types that can be returned by TagSchema operations.

use config::ConfigError;
use model_object::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagSchemaError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No export output_path configured")]
    ExportPathNotConfigured,
}
