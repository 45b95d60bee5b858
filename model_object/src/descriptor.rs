//! Type descriptor module
//!
//! A descriptor stands in for a field value between declaration and
//! materialization. Users never observe one on a built instance.

use type_mapping::tag::OPTIONAL_SUFFIX;
use type_mapping::{TagParseError, TypeTag, Value};

/// Schema type, optionality and default value of one declared field
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    base: String,
    optional: bool,
    default: Value,
}

impl TypeDescriptor {
    /// A trailing optional suffix on `base` is moved into `optional`
    pub fn new(base: impl Into<String>, optional: bool, default: Value) -> Self {
        let mut base = base.into();
        let required_len = base.trim_end_matches(OPTIONAL_SUFFIX).len();
        let suffixed = required_len < base.len();
        base.truncate(required_len);

        Self {
            base,
            optional: optional || suffixed,
            default,
        }
    }

    /// Full schema tag; the base never carries the suffix
    pub fn type_tag(&self) -> String {
        if self.optional {
            format!("{}{}", self.base, OPTIONAL_SUFFIX)
        } else {
            self.base.clone()
        }
    }

    pub fn base_tag(&self) -> &str {
        &self.base
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn into_default(self) -> Value {
        self.default
    }

    /// Structured form of `type_tag`
    pub fn tag(&self) -> Result<TypeTag, TagParseError> {
        TypeTag::parse(&self.type_tag())
    }
}
