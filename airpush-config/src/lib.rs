//! Configuration for Airpush payload assembly.
//!
//! Settings can come from `AIRPUSH_*` environment variables (a `.env` file
//! in the working directory is honored), or from a TOML/JSON file.
//!
//! ```
//! use airpush_config::PayloadConfig;
//!
//! let config = PayloadConfig::from_toml_str(
//!     r#"
//!     max_payload_bytes = 4096
//!     default_device_types = ["ios", "android"]
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.max_payload_bytes, Some(4096));
//! ```
//!
//! # Environment Variables
//!
//! - `AIRPUSH_MAX_PAYLOAD_BYTES` - Reject request bodies larger than this
//! - `AIRPUSH_DEVICE_TYPES` - Comma-separated default device types

pub mod env;
pub mod error;
pub mod loader;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Settings consumed when a push request body is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// Upper bound on the serialized request body, in bytes.
    pub max_payload_bytes: Option<usize>,
    /// Device types used when a request does not name its own.
    pub default_device_types: Vec<String>,
}

impl PayloadConfig {
    /// Create an unrestricted configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body size limit.
    pub fn with_max_payload_bytes(mut self, limit: usize) -> Self {
        self.max_payload_bytes = Some(limit);
        self
    }

    /// Set the fallback device types.
    pub fn with_default_device_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_device_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Load from `AIRPUSH_*` environment variables and `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&EnvLoader::airpush().load_with_dotenv()?)
    }

    /// Build from already-collected variables (prefix stripped, lowercase keys).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = vars.get("max_payload_bytes") {
            let limit = raw.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                key: "max_payload_bytes".to_string(),
                value: raw.clone(),
            })?;
            config.max_payload_bytes = Some(limit);
        }

        if let Some(raw) = vars.get("device_types") {
            config.default_device_types = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let value = ConfigLoader::auto(path)?.load_file(path)?;
        Self::from_value(value)
    }

    /// Parse TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_value(ConfigLoader::new(FileFormat::Toml).parse(content)?)
    }

    /// Parse JSON content.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_value(ConfigLoader::new(FileFormat::Json).parse(content)?)
    }

    fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings for values no request could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.max_payload_bytes == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_payload_bytes must be greater than zero".to_string(),
            ));
        }
        if self.default_device_types.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "default_device_types cannot contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}
