//! Type factory
//!
//! Fields are declared by calling a factory method per field. Each call
//! returns a [`TypeDescriptor`] carrying the schema tag and the default the
//! field will hold once materialized:
//!
//! ```rust
//! use model_object::{TYPES, ScalarKind};
//!
//! let count = TYPES.int_with(3);
//! let label = TYPES.optional().string();
//! let tags = TYPES.set(ScalarKind::String).unwrap();
//!
//! assert_eq!(count.type_tag(), "int");
//! assert_eq!(label.type_tag(), "string?");
//! assert_eq!(tags.type_tag(), "string<>");
//! ```

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use type_mapping::{CollectionKind, ScalarKind, Value};
use uuid::Uuid;

use crate::descriptor::TypeDescriptor;
use crate::errors::SchemaError;
use crate::type_ref::{TypeRef, resolve};

/// The required-mode factory users declare fields with
pub const TYPES: TypeFactory = TypeFactory::required();

/// Every kind the factory can construct, keyed by its schema keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar(ScalarKind),
    Collection(CollectionKind),
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Scalar(kind) => kind.keyword(),
            TypeKind::Collection(kind) => kind.keyword(),
        }
    }
}

impl FromStr for TypeKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = ScalarKind::from_keyword(s) {
            return Ok(TypeKind::Scalar(kind));
        }
        CollectionKind::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .map(TypeKind::Collection)
            .ok_or_else(|| SchemaError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Factory of type descriptors, in required or optional mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeFactory {
    optional: bool,
}

impl TypeFactory {
    pub const fn required() -> Self {
        Self { optional: false }
    }

    /// Factory whose descriptors are all optional; calling this again changes nothing
    pub const fn optional(self) -> Self {
        Self { optional: true }
    }

    pub const fn is_optional(self) -> bool {
        self.optional
    }

    fn tagged(self, base: impl Into<String>, default: Value) -> TypeDescriptor {
        TypeDescriptor::new(base, self.optional, default)
    }

    pub fn scalar(self, kind: ScalarKind) -> TypeDescriptor {
        self.tagged(kind.keyword(), kind.zero_value())
    }

    pub fn scalar_with(self, kind: ScalarKind, default: impl Into<Value>) -> TypeDescriptor {
        self.tagged(kind.keyword(), default.into())
    }

    pub fn int(self) -> TypeDescriptor {
        self.scalar(ScalarKind::Int)
    }

    pub fn int_with(self, default: i64) -> TypeDescriptor {
        self.scalar_with(ScalarKind::Int, default)
    }

    pub fn float(self) -> TypeDescriptor {
        self.scalar(ScalarKind::Float)
    }

    pub fn float_with(self, default: f32) -> TypeDescriptor {
        self.scalar_with(ScalarKind::Float, default)
    }

    pub fn double(self) -> TypeDescriptor {
        self.scalar(ScalarKind::Double)
    }

    pub fn double_with(self, default: f64) -> TypeDescriptor {
        self.scalar_with(ScalarKind::Double, default)
    }

    pub fn string(self) -> TypeDescriptor {
        self.scalar(ScalarKind::String)
    }

    pub fn string_with(self, default: impl Into<String>) -> TypeDescriptor {
        self.scalar_with(ScalarKind::String, default.into())
    }

    pub fn bool(self) -> TypeDescriptor {
        self.scalar(ScalarKind::Bool)
    }

    pub fn bool_with(self, default: bool) -> TypeDescriptor {
        self.scalar_with(ScalarKind::Bool, default)
    }

    /// Untyped field; defaults to no value
    pub fn mixed(self) -> TypeDescriptor {
        self.scalar(ScalarKind::Mixed)
    }

    pub fn mixed_with(self, default: impl Into<Value>) -> TypeDescriptor {
        self.scalar_with(ScalarKind::Mixed, default)
    }

    pub fn date(self) -> TypeDescriptor {
        self.scalar(ScalarKind::Date)
    }

    pub fn date_with(self, default: DateTime<Utc>) -> TypeDescriptor {
        self.scalar_with(ScalarKind::Date, default)
    }

    pub fn uuid(self) -> TypeDescriptor {
        self.scalar(ScalarKind::Uuid)
    }

    pub fn uuid_with(self, default: Uuid) -> TypeDescriptor {
        self.scalar_with(ScalarKind::Uuid, default)
    }

    /// Collection descriptor; the element reference is resolved by this call
    pub fn collection(
        self,
        kind: CollectionKind,
        element: impl Into<TypeRef>,
        default: Value,
    ) -> Result<TypeDescriptor, SchemaError> {
        let element_tag = resolve(&element.into())?;
        Ok(self.tagged(kind.wrap(&element_tag), default))
    }

    pub fn list(self, element: impl Into<TypeRef>) -> Result<TypeDescriptor, SchemaError> {
        self.collection(CollectionKind::List, element, CollectionKind::List.empty_value())
    }

    pub fn list_with<I, T>(
        self,
        element: impl Into<TypeRef>,
        default: I,
    ) -> Result<TypeDescriptor, SchemaError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.collection(CollectionKind::List, element, Value::list(default))
    }

    pub fn dictionary(self, value: impl Into<TypeRef>) -> Result<TypeDescriptor, SchemaError> {
        self.collection(
            CollectionKind::Dictionary,
            value,
            CollectionKind::Dictionary.empty_value(),
        )
    }

    pub fn dictionary_with<K, T>(
        self,
        value: impl Into<TypeRef>,
        default: BTreeMap<K, T>,
    ) -> Result<TypeDescriptor, SchemaError>
    where
        K: Into<String>,
        T: Into<Value>,
    {
        self.collection(
            CollectionKind::Dictionary,
            value,
            Value::dictionary(default),
        )
    }

    pub fn set(self, element: impl Into<TypeRef>) -> Result<TypeDescriptor, SchemaError> {
        self.collection(CollectionKind::Set, element, CollectionKind::Set.empty_value())
    }

    /// Set descriptor; duplicate defaults are dropped
    pub fn set_with<I, T>(
        self,
        element: impl Into<TypeRef>,
        default: I,
    ) -> Result<TypeDescriptor, SchemaError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.collection(CollectionKind::Set, element, Value::set(default))
    }

    /// Kind-keyed constructor with the zero default for that kind
    pub fn construct(
        self,
        kind: TypeKind,
        element: Option<TypeRef>,
    ) -> Result<TypeDescriptor, SchemaError> {
        match (kind, element) {
            (TypeKind::Scalar(scalar), None) => Ok(self.scalar(scalar)),
            (TypeKind::Scalar(scalar), Some(_)) => {
                Err(SchemaError::UnexpectedElementType(scalar.keyword().to_string()))
            }
            (TypeKind::Collection(collection), Some(element)) => {
                self.collection(collection, element, collection.empty_value())
            }
            (TypeKind::Collection(collection), None) => {
                Err(SchemaError::MissingElementType(collection.keyword().to_string()))
            }
        }
    }

    /// Same as [`TypeFactory::construct`], with the kind given by name
    pub fn construct_named(
        self,
        kind: &str,
        element: Option<TypeRef>,
    ) -> Result<TypeDescriptor, SchemaError> {
        self.construct(kind.parse()?, element)
    }
}
