//! Report configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for recommendation listings and strategy comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Recommendations shown per user in listings
    pub top_k: usize,
    /// On integer graphs, only users whose id is a multiple of this are sampled
    pub sample_every: u64,
    /// Evaluate users on the rayon thread pool
    pub parallel: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            sample_every: 1000,
            parallel: true,
        }
    }
}

impl ReportConfig {
    /// Read a YAML file; missing keys take their defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> ConfigResult<Self> {
        let config: ReportConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".to_string()));
        }
        if self.sample_every == 0 {
            return Err(ConfigError::Invalid("sample_every must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.top_k, 10);
        assert_eq!(config.sample_every, 1000);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let config = ReportConfig::from_yaml_str("top_k: 5\n").unwrap();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.sample_every, 1000);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ReportConfig::from_yaml_str("top_k: 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ReportConfig::from_yaml_str("sample_every: 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ReportConfig::from_yaml_str("top_k: [1, 2]\n"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
