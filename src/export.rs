//! Schema export functionality
//!
//! This module renders linked schemas as the JSON document handed to the
//! object database at registration time.

use std::path::Path;

use model_object::SchemaMap;

use crate::core::TagSchema;
use crate::errors::TagSchemaError;

/// Render schemas as a JSON array
pub fn schemas_to_json(schemas: &[SchemaMap], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(schemas)
    } else {
        serde_json::to_string(schemas)
    }
}

impl TagSchema {
    /// Link and export every registered schema as a JSON value
    pub fn export_value(&self) -> Result<serde_json::Value, TagSchemaError> {
        Ok(serde_json::to_value(self.link()?)?)
    }

    /// Link and export every registered schema, pretty-printed per `[export]`
    pub fn export_json(&self) -> Result<String, TagSchemaError> {
        let schemas = self.link()?;
        Ok(schemas_to_json(&schemas, self.config().export.pretty)?)
    }

    /// Write the exported schemas to a file
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TagSchemaError> {
        let json = self.export_json()?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!(
            "Exported {} schema(s) to {}",
            self.model_names().len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Write the exported schemas to the configured `output_path`
    pub fn export(&self) -> Result<(), TagSchemaError> {
        let path = self
            .config()
            .export
            .output_path
            .clone()
            .ok_or(TagSchemaError::ExportPathNotConfigured)?;
        self.export_to_file(path)
    }
}
