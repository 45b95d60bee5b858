//! # Configuration Management for tagschema
//!
//! This crate provides the configuration structures for model registration,
//! name validation and schema export.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{AppConfig, RegistryConfig};
//!
//! let config = AppConfig {
//!     registry: RegistryConfig::new(false, true),
//!     ..AppConfig::default()
//! };
//! assert!(config.registry.allow_dangling_references);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [registry]
//! allow_redefinition = false
//! allow_dangling_references = false
//!
//! [validation]
//! validate_names = true
//! max_model_name_length = 57
//! max_field_name_length = 63
//!
//! [export]
//! pretty = true
//! output_path = "schema.json"
//! ```
//!
//! Every section and key is optional; missing values take their defaults.
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from $TAGSCHEMA_CONFIG or ./tagschema.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./tagschema.toml";
const CONFIG_PATH_VAR: &str = "TAGSCHEMA_CONFIG";

/// Object store limit for class names
pub const MAX_MODEL_NAME_LENGTH: usize = 57;
/// Object store limit for property names
pub const MAX_FIELD_NAME_LENGTH: usize = 63;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub registry: RegistryConfig,
    pub validation: ValidationConfig,
    pub export: ExportConfig,
}

/// Model registry configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub allow_redefinition: bool,
    pub allow_dangling_references: bool,
}

/// Name validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub validate_names: bool,
    pub max_model_name_length: usize,
    pub max_field_name_length: usize,
}

/// Schema export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub pretty: bool,
    pub output_path: Option<String>,
}

impl AppConfig {
    /// Load configuration from the TOML file named in .env or the default path
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let validation = &self.validation;
        if validation.max_model_name_length == 0
            || validation.max_model_name_length > MAX_MODEL_NAME_LENGTH
        {
            return Err(ConfigError::Invalid(format!(
                "Validation max_model_name_length must be between 1 and {}",
                MAX_MODEL_NAME_LENGTH
            )));
        }
        if validation.max_field_name_length == 0
            || validation.max_field_name_length > MAX_FIELD_NAME_LENGTH
        {
            return Err(ConfigError::Invalid(format!(
                "Validation max_field_name_length must be between 1 and {}",
                MAX_FIELD_NAME_LENGTH
            )));
        }

        if let Some(path) = &self.export.output_path {
            if path.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Export output_path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl RegistryConfig {
    pub fn new(allow_redefinition: bool, allow_dangling_references: bool) -> Self {
        Self {
            allow_redefinition,
            allow_dangling_references,
        }
    }
}

impl ValidationConfig {
    pub fn new(
        validate_names: bool,
        max_model_name_length: usize,
        max_field_name_length: usize,
    ) -> Self {
        Self {
            validate_names,
            max_model_name_length,
            max_field_name_length,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new(true, MAX_MODEL_NAME_LENGTH, MAX_FIELD_NAME_LENGTH)
    }
}

impl ExportConfig {
    pub fn new(pretty: bool, output_path: Option<String>) -> Self {
        Self {
            pretty,
            output_path,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(true, None)
    }
}
