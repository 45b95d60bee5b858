use thiserror::Error;
use type_mapping::TagParseError;

use crate::validation::ValidationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Could not determine type of {value}")]
    UnresolvableType { value: String },

    #[error("Deferred type reference failed: {0}")]
    DeferredResolution(String),

    #[error("Unknown type kind: {0}")]
    UnknownKind(String),

    #[error("Type kind '{0}' requires an element type")]
    MissingElementType(String),

    #[error("Type kind '{0}' does not take an element type")]
    UnexpectedElementType(String),

    #[error("Invalid type tag: {0}")]
    InvalidTypeTag(#[from] TagParseError),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ValidationError),

    #[error("Duplicate field '{field}' in model {model}")]
    DuplicateField { model: String, field: String },

    #[error("Model already declared: {0}")]
    DuplicateModel(String),

    #[error("Model schema must have a name to be registered")]
    UnnamedModel,

    #[error("Field '{field}' of model {model} references unknown model {target}")]
    UnknownModel {
        model: String,
        field: String,
        target: String,
    },
}
