//! Core TagSchema functionality
//!
//! This module contains the TagSchema coordinator, which applies the
//! application configuration to class building and model registration.

use model_object::{
    ModelClass, ModelClassBuilder, ModelRegistry, RegistryOptions, SchemaMap, SchemaModel,
    TypeRef,
};

use crate::errors::TagSchemaError;
use config::AppConfig;

/// Main TagSchema coordinator that owns the model registry
#[derive(Debug, Clone)]
pub struct TagSchema {
    config: AppConfig,
    registry: ModelRegistry,
}

impl TagSchema {
    /// Create new TagSchema from a validated configuration
    pub fn new(config: AppConfig) -> Result<Self, TagSchemaError> {
        config.validate()?;

        let registry = ModelRegistry::with_options(RegistryOptions {
            allow_redefinition: config.registry.allow_redefinition,
            allow_dangling_references: config.registry.allow_dangling_references,
        });

        Ok(Self { config, registry })
    }

    /// Create TagSchema from `$TAGSCHEMA_CONFIG` or `./tagschema.toml`
    pub fn from_env() -> Result<Self, TagSchemaError> {
        Self::new(AppConfig::load()?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Class builder carrying the configured name validation
    pub fn class_builder(&self, name: impl Into<String>) -> ModelClassBuilder {
        let validation = &self.config.validation;
        ModelClass::builder()
            .name(name)
            .validate_names(validation.validate_names)
            .name_limits(
                validation.max_model_name_length,
                validation.max_field_name_length,
            )
    }

    /// Register a built model class
    pub fn register_class(&mut self, class: &ModelClass) -> Result<(), TagSchemaError> {
        self.registry.declare_class(class)?;
        crate::debug_log!("Registered model class {:?}", class.name());
        Ok(())
    }

    /// Register a model struct deriving SchemaModel
    pub fn register_model<T: SchemaModel>(&mut self) -> Result<(), TagSchemaError> {
        self.registry.declare_model::<T>()?;
        crate::debug_log!("Registered model {}", T::model_name());
        Ok(())
    }

    /// Register a schema map produced elsewhere
    pub fn register_schema(&mut self, schema: SchemaMap) -> Result<(), TagSchemaError> {
        self.registry.declare_schema(schema)?;
        Ok(())
    }

    /// Reference to a model that may be registered later
    pub fn reference(&self, name: impl Into<String>) -> TypeRef {
        self.registry.reference(name)
    }

    /// Check all references between registered models
    pub fn link(&self) -> Result<Vec<SchemaMap>, TagSchemaError> {
        let schemas = self.registry.link()?;
        crate::trace_log!("Linked models: {:?}", self.model_names());
        Ok(schemas)
    }

    /// List all registered model names
    pub fn model_names(&self) -> Vec<&str> {
        self.registry.model_names()
    }
}

impl Default for TagSchema {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            registry: ModelRegistry::new(),
        }
    }
}
