//! Model class builder
//!
//! Collects `(name, descriptor)` pairs once, computes the class-level schema
//! at build time and stamps out materialized instances from the template.
//!
//! ```rust
//! use model_object::{ModelClass, TYPES};
//! use type_mapping::Value;
//!
//! let class = ModelClass::builder()
//!     .name("Counter")
//!     .field("count", TYPES.int_with(3))
//!     .field("label", TYPES.optional().string())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(class.schema().get("label"), Some("string?"));
//!
//! let instance = class.instantiate();
//! assert_eq!(instance.get("count"), Some(&Value::Int(3)));
//! ```

use std::collections::HashSet;
use std::fmt;

use type_mapping::Value;

use crate::descriptor::TypeDescriptor;
use crate::errors::SchemaError;
use crate::instance::{ModelInstance, Slot, materialize_template};
use crate::schema::SchemaMap;
use crate::type_ref::TypeRef;
use crate::validation::{ValidatedFieldName, ValidatedModelName};

/// Supplier of a descriptor, invoked at build time
pub type DescriptorSupplier = Box<dyn Fn() -> Result<TypeDescriptor, SchemaError> + Send + Sync>;

/// How a field is declared on a class
pub enum FieldSpec {
    Descriptor(TypeDescriptor),
    /// For fields whose type names a class that does not exist yet
    Deferred(DescriptorSupplier),
    /// Ordinary non-persisted field
    Plain(Value),
}

impl FieldSpec {
    pub fn deferred<F>(supplier: F) -> Self
    where
        F: Fn() -> Result<TypeDescriptor, SchemaError> + Send + Sync + 'static,
    {
        FieldSpec::Deferred(Box::new(supplier))
    }

    fn into_slot(self) -> Result<Slot, SchemaError> {
        match self {
            FieldSpec::Descriptor(descriptor) => Ok(Slot::Tagged(descriptor)),
            FieldSpec::Deferred(supplier) => supplier().map(Slot::Tagged),
            FieldSpec::Plain(value) => Ok(Slot::Plain(value)),
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpec::Descriptor(descriptor) => {
                f.debug_tuple("Descriptor").field(descriptor).finish()
            }
            FieldSpec::Deferred(_) => f.write_str("Deferred(..)"),
            FieldSpec::Plain(value) => f.debug_tuple("Plain").field(value).finish(),
        }
    }
}

impl From<TypeDescriptor> for FieldSpec {
    fn from(descriptor: TypeDescriptor) -> Self {
        FieldSpec::Descriptor(descriptor)
    }
}

impl From<Value> for FieldSpec {
    fn from(value: Value) -> Self {
        FieldSpec::Plain(value)
    }
}

#[derive(Debug)]
pub struct ModelClassBuilder {
    name: Option<String>,
    fields: Vec<(String, FieldSpec)>,
    validate_names: bool,
    max_model_name_length: usize,
    max_field_name_length: usize,
}

impl Default for ModelClassBuilder {
    fn default() -> Self {
        Self {
            name: None,
            fields: Vec::new(),
            validate_names: true,
            max_model_name_length: ValidatedModelName::MAX_LENGTH,
            max_field_name_length: ValidatedFieldName::MAX_LENGTH,
        }
    }
}

impl ModelClassBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, declaration: impl Into<FieldSpec>) -> Self {
        self.fields.push((name.into(), declaration.into()));
        self
    }

    /// Field whose descriptor is produced by `supplier` when the class is built
    pub fn deferred_field<F>(self, name: impl Into<String>, supplier: F) -> Self
    where
        F: Fn() -> Result<TypeDescriptor, SchemaError> + Send + Sync + 'static,
    {
        self.field(name, FieldSpec::deferred(supplier))
    }

    /// Non-persisted field, copied into every instance as-is
    pub fn plain_field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field(name, FieldSpec::Plain(value.into()))
    }

    pub fn validate_names(mut self, validate: bool) -> Self {
        self.validate_names = validate;
        self
    }

    pub fn name_limits(
        mut self,
        max_model_name_length: usize,
        max_field_name_length: usize,
    ) -> Self {
        self.max_model_name_length = max_model_name_length;
        self.max_field_name_length = max_field_name_length;
        self
    }

    /// Resolve every field and compute the class schema
    pub fn build(self) -> Result<ModelClass, SchemaError> {
        if self.validate_names {
            if let Some(name) = &self.name {
                ValidatedModelName::with_max_length(name, self.max_model_name_length)?;
            }
        }

        let mut seen = HashSet::new();
        let mut template = Vec::with_capacity(self.fields.len());
        for (field, declaration) in self.fields {
            if self.validate_names {
                ValidatedFieldName::with_max_length(&field, self.max_field_name_length)?;
            }
            if !seen.insert(field.clone()) {
                return Err(SchemaError::DuplicateField {
                    model: self.name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
                    field,
                });
            }
            template.push((field, declaration.into_slot()?));
        }

        let schema = materialize_template(self.name.as_deref(), &template).schema;
        tracing::debug!(
            "Built model class {} with {} persisted field(s)",
            self.name.as_deref().unwrap_or("<unnamed>"),
            schema.len()
        );

        Ok(ModelClass {
            name: self.name,
            template,
            schema,
        })
    }
}

/// A built class: a field template plus its static schema
#[derive(Debug, Clone, PartialEq)]
pub struct ModelClass {
    name: Option<String>,
    template: Vec<(String, Slot)>,
    schema: SchemaMap,
}

impl ModelClass {
    pub fn builder() -> ModelClassBuilder {
        ModelClassBuilder::new()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Class-level schema, fixed when the class was built
    pub fn schema(&self) -> &SchemaMap {
        &self.schema
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.template.iter().map(|(name, _)| name.as_str())
    }

    pub fn descriptor(&self, field: &str) -> Option<&TypeDescriptor> {
        self.template
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, slot)| match slot {
                Slot::Tagged(descriptor) => Some(descriptor),
                Slot::Plain(_) => None,
            })
    }

    /// New instance with every declared field holding its default
    pub fn instantiate(&self) -> ModelInstance {
        ModelInstance::from_materialized(
            self.name.clone(),
            materialize_template(self.name.as_deref(), &self.template),
        )
    }
}

impl From<&ModelClass> for TypeRef {
    fn from(class: &ModelClass) -> Self {
        match &class.name {
            Some(name) => TypeRef::Named(name.clone()),
            None => TypeRef::Anonymous(format!("{:?}", class.schema)),
        }
    }
}

/// Build a class from a name and field specs in one call
pub fn build_model_class<I, K>(name: Option<&str>, fields: I) -> Result<ModelClass, SchemaError>
where
    I: IntoIterator<Item = (K, FieldSpec)>,
    K: Into<String>,
{
    let builder = fields
        .into_iter()
        .fold(ModelClassBuilder::new(), |builder, (field, declaration)| {
            builder.field(field, declaration)
        });

    match name {
        Some(name) => builder.name(name).build(),
        None => builder.build(),
    }
}
