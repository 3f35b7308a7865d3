//! Config loading and validation.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{PageError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PageError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load an explicitly requested file, or `pagesmith.yaml` if present,
    /// or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => {
                debug!("no {} found; using defaults", DEFAULT_CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are ignored; an empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| PageError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PageError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// - `max_attempts` and `max_passes` must be positive
    /// - `template_extension` must be non-empty with no leading dot
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(PageError::UserError(
                "config validation failed: max_attempts must be greater than 0".to_string(),
            ));
        }

        if self.max_passes == 0 {
            return Err(PageError::UserError(
                "config validation failed: max_passes must be greater than 0".to_string(),
            ));
        }

        if self.template_extension.is_empty() {
            return Err(PageError::UserError(
                "config validation failed: template_extension must be non-empty".to_string(),
            ));
        }
        if self.template_extension.starts_with('.') {
            return Err(PageError::UserError(format!(
                "config validation failed: template_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.template_extension,
                self.template_extension.trim_start_matches('.')
            )));
        }

        Ok(())
    }
}
