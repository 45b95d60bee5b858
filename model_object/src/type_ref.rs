//! Type references and their resolution to tag names
//!
//! Collection constructors accept anything that can name a type: a model
//! class, a bare scalar kind, another descriptor, or a deferred supplier
//! for classes that are not available yet (self and forward references).

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use type_mapping::{ScalarKind, is_valid_object_name};

use crate::descriptor::TypeDescriptor;
use crate::errors::SchemaError;
use crate::traits::SchemaModel;

/// Zero-argument supplier behind a deferred reference
pub type TypeSupplier = Arc<dyn Fn() -> Result<TypeRef, SchemaError> + Send + Sync>;

/// A reference whose target is only looked up when a tag is needed
#[derive(Clone)]
pub struct DeferredRef {
    supplier: TypeSupplier,
    source: Option<Cow<'static, str>>,
}

impl DeferredRef {
    pub fn invoke(&self) -> Result<TypeRef, SchemaError> {
        (self.supplier)()
    }

    /// Source text of the supplier, when it was captured
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl fmt::Debug for DeferredRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredRef")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Anything a collection constructor can take as its element type
#[derive(Debug, Clone)]
pub enum TypeRef {
    /// A model class, by its declared name
    Named(String),
    /// A bare scalar kind, e.g. passing `mixed` itself as the element type
    Kind(ScalarKind),
    /// A value whose name comes from the class it was built from
    Instance(Option<String>),
    Descriptor(Box<TypeDescriptor>),
    Deferred(DeferredRef),
    /// A plain value with no name, rendered for diagnostics
    Anonymous(String),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Reference a statically declared model
    pub fn model<T: SchemaModel>() -> Self {
        TypeRef::Named(T::model_name().to_string())
    }

    pub fn deferred<F>(supplier: F) -> Self
    where
        F: Fn() -> TypeRef + Send + Sync + 'static,
    {
        Self::try_deferred(move || Ok(supplier()))
    }

    /// Deferred reference whose supplier may fail, e.g. a binding that is not set yet
    pub fn try_deferred<F>(supplier: F) -> Self
    where
        F: Fn() -> Result<TypeRef, SchemaError> + Send + Sync + 'static,
    {
        TypeRef::Deferred(DeferredRef {
            supplier: Arc::new(supplier),
            source: None,
        })
    }

    /// Attach supplier source text used when the supplier fails
    pub fn with_source(self, source: impl Into<Cow<'static, str>>) -> Self {
        match self {
            TypeRef::Deferred(deferred) => TypeRef::Deferred(DeferredRef {
                source: Some(source.into()),
                ..deferred
            }),
            other => other,
        }
    }

    pub fn resolve(&self) -> Result<String, SchemaError> {
        resolve(self)
    }
}

impl From<TypeDescriptor> for TypeRef {
    fn from(descriptor: TypeDescriptor) -> Self {
        TypeRef::Descriptor(Box::new(descriptor))
    }
}

impl From<ScalarKind> for TypeRef {
    fn from(kind: ScalarKind) -> Self {
        TypeRef::Kind(kind)
    }
}

impl From<serde_json::Value> for TypeRef {
    fn from(value: serde_json::Value) -> Self {
        TypeRef::Anonymous(value.to_string())
    }
}

/// Resolve a reference to the tag string naming it
///
/// Deferred suppliers are invoked here, never earlier. A supplier that
/// fails falls back to the name found in its source text.
pub fn resolve(type_ref: &TypeRef) -> Result<String, SchemaError> {
    match type_ref {
        TypeRef::Deferred(deferred) => {
            match deferred.invoke().and_then(|target| resolve(&target)) {
                Ok(name) => Ok(name),
                Err(err) => match deferred.source().and_then(name_from_source) {
                    Some(name) => {
                        tracing::debug!(
                            "Deferred type reference failed ({}), using '{}' from its source",
                            err,
                            name
                        );
                        Ok(name)
                    }
                    None => Err(err),
                },
            }
        }
        TypeRef::Named(name) if !name.is_empty() => Ok(name.clone()),
        TypeRef::Kind(kind) => Ok(kind.keyword().to_string()),
        TypeRef::Instance(Some(name)) if !name.is_empty() => Ok(name.clone()),
        TypeRef::Descriptor(descriptor) => Ok(descriptor.type_tag()),
        other => {
            let value = format!("{:?}", other);
            tracing::warn!(value = %value, "Could not determine type");
            Err(SchemaError::UnresolvableType { value })
        }
    }
}

/// Best-effort recovery of a model name from supplier source text
///
/// This only reads text: a quoted name wins, otherwise the last identifier
/// after the closure header is taken. It can be fooled by any expression
/// that does not end in the target's name.
pub fn name_from_source(source: &str) -> Option<String> {
    let body = source.rsplit("||").next().unwrap_or(source).trim();

    let candidate = match body.find('"') {
        Some(start) => {
            let rest = &body[start + 1..];
            &rest[..rest.find('"')?]
        }
        None => body
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|token| !token.is_empty())
            .last()?,
    };

    is_valid_object_name(candidate).then(|| candidate.to_string())
}

/// Build a deferred [`TypeRef`] that records its own source text
///
/// ```ignore
/// deferred!(model Person);                       // a SchemaModel type
/// deferred!(TypeRef::named("Person"));           // anything Into<TypeRef>
/// deferred!(fallible lookup("Person"));          // Result<impl Into<TypeRef>, SchemaError>
/// ```
#[macro_export]
macro_rules! deferred {
    (model $target:ty) => {
        $crate::TypeRef::deferred(|| $crate::TypeRef::model::<$target>())
            .with_source(stringify!($target))
    };
    (fallible $target:expr) => {
        $crate::TypeRef::try_deferred(move || ($target).map($crate::TypeRef::from))
            .with_source(stringify!($target))
    };
    ($target:expr) => {
        $crate::TypeRef::deferred(move || $crate::TypeRef::from($target))
            .with_source(stringify!($target))
    };
}
