//! Validation module
//!
//! This module validates model and field names before they reach a schema.

use std::fmt;
use type_mapping::{CollectionKind, ScalarKind};

/// Validation errors for schema identifiers
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name contains invalid characters (only alphanumeric and underscore allowed)
    InvalidCharacters(String),
    /// Name is too long for the object store
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },
    /// Name is empty
    Empty,
    /// Name starts with invalid character (must start with letter or underscore)
    InvalidStartCharacter(String),
    /// Name collides with a type keyword or an instance member
    ReservedName(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidCharacters(name) => {
                write!(
                    f,
                    "Invalid characters in name '{}': only letters, digits and underscores allowed",
                    name
                )
            }
            ValidationError::TooLong {
                name,
                length,
                max_length,
            } => {
                write!(
                    f,
                    "Name '{}' is too long: {} characters (max {})",
                    name, length, max_length
                )
            }
            ValidationError::Empty => {
                write!(f, "Name cannot be empty")
            }
            ValidationError::InvalidStartCharacter(name) => {
                write!(f, "Name '{}' must start with a letter or underscore", name)
            }
            ValidationError::ReservedName(name) => {
                write!(f, "Name '{}' is reserved", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Common validation logic for schema identifiers
fn validate_identifier(name: &str, max_length: usize) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }

    if name.len() > max_length {
        return Err(ValidationError::TooLong {
            name: name.to_string(),
            length: name.len(),
            max_length,
        });
    }

    let first_char = name.chars().next().ok_or(ValidationError::Empty)?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(ValidationError::InvalidStartCharacter(name.to_string()));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidCharacters(name.to_string()));
    }

    Ok(())
}

/// A validated model name that can appear as an object reference in a tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedModelName(String);

impl ValidatedModelName {
    /// Object store limit for class names
    pub const MAX_LENGTH: usize = 57;

    /// Create a new validated model name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::with_max_length(name, Self::MAX_LENGTH)
    }

    /// Validate against a tighter length limit, capped at MAX_LENGTH
    pub fn with_max_length(name: &str, max_length: usize) -> Result<Self, ValidationError> {
        validate_identifier(name, max_length.min(Self::MAX_LENGTH))?;

        // A model named after a type keyword would make its tags ambiguous
        if ScalarKind::from_keyword(name).is_some()
            || CollectionKind::ALL.iter().any(|kind| kind.keyword() == name)
        {
            return Err(ValidationError::ReservedName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated field name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedFieldName(String);

impl ValidatedFieldName {
    pub const MAX_LENGTH: usize = 63;

    /// Instance members a declared field may not shadow
    const RESERVED: &'static [&'static str] = &["schema"];

    /// Create a new validated field name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::with_max_length(name, Self::MAX_LENGTH)
    }

    pub fn with_max_length(name: &str, max_length: usize) -> Result<Self, ValidationError> {
        validate_identifier(name, max_length.min(Self::MAX_LENGTH))?;

        if Self::RESERVED.contains(&name) {
            return Err(ValidationError::ReservedName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
