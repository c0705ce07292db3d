//! # Runtime Configuration
//!
//! Loaded once at startup from a TOML file. Every field has a default, so an
//! empty document is a valid configuration.
//!
//! ```toml
//! [render]
//! kind_attribute = "data-obj-name"
//! id_attribute = "data-id"
//!
//! [build]
//! strict_elements = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Top-level runtime configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Render pass settings.
    pub render: RenderConfig,
    /// Declaration builder settings.
    pub build: BuildConfig,
}

impl RuntimeConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid for this schema.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded runtime config from {}", path.display());
        Ok(config)
    }
}

/// Names used when tagging render targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Attribute that receives the object kind (`Group`, `Layer`, ...).
    pub kind_attribute: String,
    /// Attribute that receives the object's resolved id.
    pub id_attribute: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            kind_attribute: "data-obj-name".to_owned(),
            id_attribute: "data-id".to_owned(),
        }
    }
}

/// Declaration builder behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Fail on unknown element kinds instead of skipping them.
    pub strict_elements: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            strict_elements: true,
        }
    }
}
