//! Schema map module
//!
//! The name -> tag description of a model, in the shape the object
//! database expects at registration time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use type_mapping::TypeTag;

use crate::errors::SchemaError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl SchemaMap {
    /// Create an unnamed, empty schema
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            properties: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Record a property tag, returning the tag it replaced
    pub fn insert(&mut self, field: impl Into<String>, tag: impl Into<String>) -> Option<String> {
        self.properties.insert(field.into(), tag.into())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.properties.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.properties.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Parse every property tag
    pub fn parsed_properties(&self) -> Result<Vec<(&str, TypeTag)>, SchemaError> {
        let mut parsed = Vec::with_capacity(self.properties.len());
        for (field, tag) in &self.properties {
            parsed.push((field.as_str(), TypeTag::parse(tag)?));
        }
        Ok(parsed)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
