//! Configuration with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// VSM configuration: built-in defaults, then the global user config
/// file, then environment variables, each layer taking precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format when --format is not given
    pub default_format: Option<String>,

    /// Decimal places for human-readable numbers
    pub decimals: Option<u8>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order.
    pub fn load() -> Self {
        let mut config = Config::default();

        // Global user config (~/.config/vsm/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // Environment variables
        if let Ok(format) = std::env::var("VSM_FORMAT") {
            config.default_format = Some(format);
        }
        if let Ok(decimals) = std::env::var("VSM_DECIMALS") {
            if let Ok(d) = decimals.parse() {
                config.decimals = Some(d);
            }
        }

        config
    }

    /// Path to the global config file.
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "vsm")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Config) {
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.decimals.is_some() {
            self.decimals = other.decimals;
        }
    }

    /// Decimal places for formatted numbers.
    pub fn decimals(&self) -> u8 {
        self.decimals.unwrap_or(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.decimals(), 2);
        assert!(config.default_format.is_none());
    }

    #[test]
    fn test_merge_precedence() {
        let mut base = Config {
            default_format: Some("yaml".to_string()),
            decimals: None,
        };
        base.merge(Config {
            default_format: None,
            decimals: Some(3),
        });
        assert_eq!(base.default_format.as_deref(), Some("yaml"));
        assert_eq!(base.decimals(), 3);
    }

    #[test]
    fn test_config_yaml_shape() {
        let parsed: Config = serde_yml::from_str("default_format: json\ndecimals: 4\n").unwrap();
        assert_eq!(parsed.default_format.as_deref(), Some("json"));
        assert_eq!(parsed.decimals(), 4);
    }
}
