//! Conversion settings.
//!
//! # Example YAML
//!
//! ```yaml
//! tag_key: canonical
//! fill_fallbacks: true
//! disabled_fallbacks:
//!   - white
//! warn_unmapped: false
//! ```
//!
//! Every key is optional and falls back to [`ConvertConfig::default`].

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};
use crate::scheme::fallback_group_names;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Tag directive key read from schema fields.
    pub tag_key: String,
    /// Fill absent canonical colors from their fallback groups.
    pub fill_fallbacks: bool,
    /// Fallback groups to skip, by name.
    pub disabled_fallbacks: Vec<String>,
    /// Log destination fields left unmapped as warnings rather than debug.
    pub warn_unmapped: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            tag_key: "canonical".to_string(),
            fill_fallbacks: true,
            disabled_fallbacks: Vec::new(),
            warn_unmapped: true,
        }
    }
}

impl ConvertConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](FormatError::Io) if the file cannot be read, or
    /// [`Yaml`](FormatError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Rejects an empty tag key and unknown fallback group names.
    ///
    /// ```
    /// use hueport_formats::ConvertConfig;
    ///
    /// assert!(ConvertConfig::default().validate().is_ok());
    ///
    /// let config = ConvertConfig {
    ///     disabled_fallbacks: vec!["ultraviolet".into()],
    ///     ..ConvertConfig::default()
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.tag_key.trim().is_empty() {
            return Err(FormatError::InvalidConfig("tag_key cannot be empty".into()));
        }
        if let Some(unknown) = self
            .disabled_fallbacks
            .iter()
            .find(|name| !fallback_group_names().any(|known| known == name.as_str()))
        {
            return Err(FormatError::InvalidConfig(format!(
                "unknown fallback group: {unknown}"
            )));
        }
        Ok(())
    }

    /// Returns `true` unless the group is listed in `disabled_fallbacks`.
    pub fn is_fallback_enabled(&self, group: &str) -> bool {
        !self.disabled_fallbacks.iter().any(|name| name == group)
    }
}
