//! Config loading, validation, and override operations.

use super::model::Config;
use crate::error::{Result, TylerError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TylerError::UserError)` - The file could not be read
    /// * `Err(TylerError::ConfigError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TylerError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| TylerError::ConfigError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| TylerError::ConfigError(format!("failed to serialize config: {}", e)))
    }

    /// Validate config values.
    ///
    /// Every obstacle conversion rule must have a non-empty find pattern of
    /// non-empty signatures and one replacement ID per found tile.
    pub fn validate(&self) -> Result<()> {
        for (i, rule) in self.obstacle_conversions.iter().enumerate() {
            rule.validate().map_err(|e| match e {
                TylerError::ConfigError(msg) => {
                    TylerError::ConfigError(format!("obstacle_conversions[{}]: {}", i, msg))
                }
                other => other,
            })?;
        }

        Ok(())
    }

    /// Replace level metadata with any values given on the command line.
    pub fn apply_overrides(
        &mut self,
        name: Option<String>,
        author: Option<String>,
        license: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(license) = license {
            self.license = license;
        }
    }
}
