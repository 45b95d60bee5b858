//! Schema tag grammar
//!
//! This module parses and produces the canonical type tag strings
//! consumed by the object database at model registration time:
//!
//! ```text
//! scalar      int | float | double | string | bool | mixed | date | uuid
//! object      <ModelName>
//! list        <tag>[]
//! dictionary  <tag>{}
//! set         <tag><>
//! optional    <tag>?
//! ```

use crate::types::Value;
use crate::validate::is_valid_object_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Suffix marking a tag as optional
pub const OPTIONAL_SUFFIX: char = '?';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagParseError {
    #[error("Type tag cannot be empty")]
    Empty,

    #[error("Type tag '{0}' is optional more than once")]
    DoubleOptional(String),

    #[error("Type tag '{0}' has a collection sigil but no element type")]
    MissingElement(String),

    #[error("Invalid object name '{0}' in type tag")]
    InvalidObjectName(String),
}

/// Primitive kinds understood by the object schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Int,
    Float,
    Double,
    String,
    Bool,
    Mixed,
    Date,
    Uuid,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 8] = [
        ScalarKind::Int,
        ScalarKind::Float,
        ScalarKind::Double,
        ScalarKind::String,
        ScalarKind::Bool,
        ScalarKind::Mixed,
        ScalarKind::Date,
        ScalarKind::Uuid,
    ];

    /// Schema keyword for this kind
    pub fn keyword(self) -> &'static str {
        match self {
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::Mixed => "mixed",
            ScalarKind::Date => "date",
            ScalarKind::Uuid => "uuid",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Value a field of this kind holds when no default was given
    pub fn zero_value(self) -> Value {
        match self {
            ScalarKind::Int => Value::Int(0),
            ScalarKind::Float => Value::Float(0.0),
            ScalarKind::Double => Value::Double(0.0),
            ScalarKind::String => Value::String(String::new()),
            ScalarKind::Bool => Value::Bool(false),
            ScalarKind::Mixed => Value::Null,
            ScalarKind::Date => Value::Date(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH),
            ScalarKind::Uuid => Value::Uuid(uuid::Uuid::nil()),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Collection kinds and their sigils
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    List,
    Dictionary,
    Set,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::List,
        CollectionKind::Dictionary,
        CollectionKind::Set,
    ];

    pub fn sigil(self) -> &'static str {
        match self {
            CollectionKind::List => "[]",
            CollectionKind::Dictionary => "{}",
            CollectionKind::Set => "<>",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            CollectionKind::List => "list",
            CollectionKind::Dictionary => "dictionary",
            CollectionKind::Set => "set",
        }
    }

    /// Empty container used when no default was given
    pub fn empty_value(self) -> Value {
        match self {
            CollectionKind::List => Value::List(Vec::new()),
            CollectionKind::Dictionary => Value::Dictionary(Default::default()),
            CollectionKind::Set => Value::Set(Vec::new()),
        }
    }

    /// Append this kind's sigil to an element tag
    pub fn wrap(self, element_tag: &str) -> String {
        format!("{}{}", element_tag, self.sigil())
    }
}

/// Structured form of a type tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Scalar(ScalarKind),
    Object(String),
    List(Box<TypeTag>),
    Dictionary(Box<TypeTag>),
    Set(Box<TypeTag>),
    Optional(Box<TypeTag>),
}

impl TypeTag {
    /// Parse a canonical tag string
    pub fn parse(tag: &str) -> Result<Self, TagParseError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(TagParseError::Empty);
        }

        if let Some(inner) = tag.strip_suffix(OPTIONAL_SUFFIX) {
            // The suffix applies once, to the whole tag
            if inner.ends_with(OPTIONAL_SUFFIX) {
                return Err(TagParseError::DoubleOptional(tag.to_string()));
            }
            return Ok(TypeTag::Optional(Box::new(Self::parse_required(inner, tag)?)));
        }

        Self::parse_required(tag, tag)
    }

    fn parse_required(tag: &str, whole: &str) -> Result<Self, TagParseError> {
        for kind in CollectionKind::ALL {
            if let Some(element) = tag.strip_suffix(kind.sigil()) {
                if element.is_empty() {
                    return Err(TagParseError::MissingElement(whole.to_string()));
                }
                let element = Box::new(Self::parse(element)?);
                return Ok(match kind {
                    CollectionKind::List => TypeTag::List(element),
                    CollectionKind::Dictionary => TypeTag::Dictionary(element),
                    CollectionKind::Set => TypeTag::Set(element),
                });
            }
        }

        if let Some(kind) = ScalarKind::from_keyword(tag) {
            return Ok(TypeTag::Scalar(kind));
        }

        if !is_valid_object_name(tag) {
            return Err(TagParseError::InvalidObjectName(tag.to_string()));
        }
        Ok(TypeTag::Object(tag.to_string()))
    }

    /// Wrap in an optional marker; already optional tags are returned unchanged
    pub fn optional(self) -> Self {
        match self {
            TypeTag::Optional(_) => self,
            other => TypeTag::Optional(Box::new(other)),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeTag::Optional(_))
    }

    /// Names of every model class reachable through this tag
    pub fn referenced_models(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_models(&mut names);
        names
    }

    fn collect_models<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeTag::Scalar(_) => {}
            TypeTag::Object(name) => names.push(name),
            TypeTag::List(inner)
            | TypeTag::Dictionary(inner)
            | TypeTag::Set(inner)
            | TypeTag::Optional(inner) => inner.collect_models(names),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Scalar(kind) => write!(f, "{}", kind),
            TypeTag::Object(name) => f.write_str(name),
            TypeTag::List(inner) => write!(f, "{}{}", inner, CollectionKind::List.sigil()),
            TypeTag::Dictionary(inner) => {
                write!(f, "{}{}", inner, CollectionKind::Dictionary.sigil())
            }
            TypeTag::Set(inner) => write!(f, "{}{}", inner, CollectionKind::Set.sigil()),
            TypeTag::Optional(inner) => write!(f, "{}{}", inner, OPTIONAL_SUFFIX),
        }
    }
}

impl FromStr for TypeTag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        for kind in ScalarKind::ALL {
            assert_eq!(TypeTag::parse(kind.keyword()), Ok(TypeTag::Scalar(kind)));
        }
    }

    #[test]
    fn test_parse_collections_and_optional() {
        let tag = TypeTag::parse("string[]?").unwrap();
        assert_eq!(
            tag,
            TypeTag::Optional(Box::new(TypeTag::List(Box::new(TypeTag::Scalar(
                ScalarKind::String
            )))))
        );

        let tag = TypeTag::parse("mixed{}").unwrap();
        assert_eq!(
            tag,
            TypeTag::Dictionary(Box::new(TypeTag::Scalar(ScalarKind::Mixed)))
        );

        let tag = TypeTag::parse("string<>").unwrap();
        assert_eq!(tag, TypeTag::Set(Box::new(TypeTag::Scalar(ScalarKind::String))));
    }

    #[test]
    fn test_parse_nested_optional_element() {
        let tag = TypeTag::parse("int?[]").unwrap();
        assert!(!tag.is_optional());
        assert_eq!(tag.to_string(), "int?[]");
    }

    #[test]
    fn test_display_is_canonical() {
        for text in ["int", "MyClass[]", "Person{}?", "uuid<>", "int?[]", "date"] {
            assert_eq!(TypeTag::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(TypeTag::parse(""), Err(TagParseError::Empty));
        assert!(matches!(
            TypeTag::parse("int??"),
            Err(TagParseError::DoubleOptional(_))
        ));
        assert!(matches!(
            TypeTag::parse("[]"),
            Err(TagParseError::MissingElement(_))
        ));
        assert!(matches!(
            TypeTag::parse("my-class"),
            Err(TagParseError::InvalidObjectName(_))
        ));
    }

    #[test]
    fn test_optional_is_idempotent() {
        let tag = TypeTag::Scalar(ScalarKind::Int).optional().optional();
        assert_eq!(tag.to_string(), "int?");
    }

    #[test]
    fn test_referenced_models() {
        let tag = TypeTag::parse("Person[]?").unwrap();
        assert_eq!(tag.referenced_models(), vec!["Person"]);
        assert!(TypeTag::parse("int{}").unwrap().referenced_models().is_empty());
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(ScalarKind::Int.zero_value(), Value::Int(0));
        assert_eq!(ScalarKind::String.zero_value(), Value::String(String::new()));
        assert_eq!(ScalarKind::Bool.zero_value(), Value::Bool(false));
        assert_eq!(ScalarKind::Mixed.zero_value(), Value::Null);
    }
}
