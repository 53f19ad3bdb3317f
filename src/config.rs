//! TOML configuration for [`EventManager`](crate::EventManager).
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! queue_capacity = 1024
//!
//! [logging]
//! enabled = true
//! format = "json"
//! level = "info"
//! categories = ["keyboard", "mouse"]
//! ```

use crate::category::Category;
use crate::error::Result;
use crate::queue::DEFAULT_QUEUE_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Capacity of the queue created by the manager.
    pub queue_capacity: usize,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            logging: LoggingConfig::default(),
        }
    }
}

/// Settings for the [`Logger`](crate::logger::Logger) listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub format: LogFormat,
    pub level: LogLevel,
    /// Categories to log. Empty logs everything.
    pub categories: Vec<Category>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            format: LogFormat::Text,
            level: LogLevel::Debug,
            categories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_text_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.queue_capacity, DEFAULT_QUEUE_CAPACITY);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn parses_full_document() {
        let config = Config::from_toml_str(
            r#"
            queue_capacity = 16

            [logging]
            enabled = true
            format = "json"
            level = "warn"
            categories = ["keyboard", "user"]
            "#,
        )
        .unwrap();

        assert_eq!(config.queue_capacity, 16);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.categories, vec![Category::Keyboard, Category::User]);
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(matches!(Config::from_toml_str("queue_size = 3"), Err(Error::Config(_))));
        assert!(matches!(
            Config::from_toml_str("[logging]\nformat = \"xml\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn toml_text_parses_back_to_the_same_config() {
        let mut config = Config::default();
        config.logging.enabled = true;
        config.logging.categories = vec![Category::Gamepad];
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("gamepad"));
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/nonexistent/evdispatch.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
