//! Model registry
//!
//! Registration happens in two phases. Models are declared first, in any
//! order, and may reference each other by name. `link` then checks every
//! object reference against the declared set and hands back the schemas.

use std::collections::HashMap;

use crate::errors::SchemaError;
use crate::model_class::ModelClass;
use crate::schema::SchemaMap;
use crate::traits::SchemaModel;
use crate::type_ref::TypeRef;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Replace an earlier declaration with the same name instead of failing
    pub allow_redefinition: bool,
    /// Skip the unknown-model check at link time
    pub allow_dangling_references: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    options: RegistryOptions,
    schemas: Vec<SchemaMap>,
    index: HashMap<String, usize>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Declare a schema; the first phase of registration
    pub fn declare_schema(&mut self, schema: SchemaMap) -> Result<(), SchemaError> {
        let name = schema.name().ok_or(SchemaError::UnnamedModel)?.to_string();

        match self.index.get(&name) {
            Some(&position) if self.options.allow_redefinition => {
                tracing::debug!("Redefining model {}", name);
                self.schemas[position] = schema;
            }
            Some(_) => return Err(SchemaError::DuplicateModel(name)),
            None => {
                self.index.insert(name, self.schemas.len());
                self.schemas.push(schema);
            }
        }
        Ok(())
    }

    pub fn declare_class(&mut self, class: &ModelClass) -> Result<(), SchemaError> {
        self.declare_schema(class.schema().clone())
    }

    pub fn declare_model<T: SchemaModel>(&mut self) -> Result<(), SchemaError> {
        self.declare_schema(T::schema())
    }

    /// Reference to a model that may not be declared yet; checked by `link`
    pub fn reference(&self, name: impl Into<String>) -> TypeRef {
        TypeRef::Named(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SchemaMap> {
        self.index.get(name).map(|&position| &self.schemas[position])
    }

    /// Declared model names in declaration order
    pub fn model_names(&self) -> Vec<&str> {
        self.schemas.iter().filter_map(SchemaMap::name).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Check every tag and object reference; the second phase of registration
    pub fn link(&self) -> Result<Vec<SchemaMap>, SchemaError> {
        for schema in &self.schemas {
            let model = schema.name().unwrap_or_default();
            for (field, tag) in schema.parsed_properties()? {
                if self.options.allow_dangling_references {
                    continue;
                }
                if let Some(target) = tag
                    .referenced_models()
                    .into_iter()
                    .find(|target| !self.contains(target))
                {
                    return Err(SchemaError::UnknownModel {
                        model: model.to_string(),
                        field: field.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        tracing::debug!("Linked {} model schema(s)", self.schemas.len());
        Ok(self.schemas.clone())
    }
}
