//! Validation utilities for type mapping
//!
//! This module provides validation functions
//! for tag strings and the names inside them.

use crate::tag::TypeTag;

/// Check if a name can be used as an object reference inside a tag
pub fn is_valid_object_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Check if a string follows the canonical tag grammar
pub fn is_valid_type_tag(tag: &str) -> bool {
    TypeTag::parse(tag).is_ok()
}
