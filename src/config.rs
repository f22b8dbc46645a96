//! Top-level application configuration.
//!
//! Configuration is stored in `.taskdeck/config.yaml` and includes:
//! - Which task source to page through (a local YAML file or an HTTP endpoint)
//! - Paging and prefetch settings for the task list
//! - Search debounce and display preferences

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskdeckError};
use crate::paths::{default_tasks_path, taskdeck_root};

/// Keys accepted by `taskdeck config get/set`
pub const VALID_KEYS: &[&str] = &[
    "source.kind",
    "source.path",
    "source.base_url",
    "source.timeout_secs",
    "page_size",
    "prefetch_rows",
    "search_debounce_ms",
    "dark_mode",
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where tasks are loaded from
    #[serde(default)]
    pub source: SourceConfig,

    /// Number of tasks requested per page (default: 20)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Start loading the next page when the selection is this many rows from
    /// the end of the loaded tasks (default: 3)
    #[serde(default = "default_prefetch_rows")]
    pub prefetch_rows: usize,

    /// Delay after the last keystroke before a search is applied (default: 300)
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Dark terminal palette (default: true)
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_page_size() -> usize {
    20
}

fn default_prefetch_rows() -> usize {
    3
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_dark_mode() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            page_size: default_page_size(),
            prefetch_rows: default_prefetch_rows(),
            search_debounce_ms: default_search_debounce_ms(),
            dark_mode: default_dark_mode(),
        }
    }
}

/// Supported task source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    File,
    Http,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::File => write!(f, "file"),
            SourceKind::Http => write!(f, "http"),
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = TaskdeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "file" => Ok(SourceKind::File),
            "http" => Ok(SourceKind::Http),
            _ => Err(TaskdeckError::Config(format!(
                "unknown source kind '{}', expected 'file' or 'http'",
                s
            ))),
        }
    }
}

/// Task source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// Task file for the `file` source (default: `.taskdeck/tasks.yaml`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Base URL for the `http` source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds for the `http` source (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            path: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Task file path, falling back to the default location
    pub fn tasks_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_tasks_path)
    }

    /// Request timeout for remote fetches
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        taskdeck_root().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            TaskdeckError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TaskdeckError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            TaskdeckError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Reject values the task list cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(TaskdeckError::Config(
                "page_size must be greater than 0".to_string(),
            ));
        }
        if self.source.kind == SourceKind::Http && self.source.base_url.is_none() {
            return Err(TaskdeckError::Config(
                "source.base_url is required when source.kind is 'http'".to_string(),
            ));
        }
        Ok(())
    }

    /// API token for the HTTP source, read from the environment only
    pub fn api_token() -> Option<SecretString> {
        env::var("TASKDECK_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(SecretString::from)
    }

    /// Get a config value by dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "source.kind" => self.source.kind.to_string(),
            "source.path" => self.source.tasks_path().display().to_string(),
            "source.base_url" => self.source.base_url.clone().unwrap_or_default(),
            "source.timeout_secs" => self.source.timeout_secs.to_string(),
            "page_size" => self.page_size.to_string(),
            "prefetch_rows" => self.prefetch_rows.to_string(),
            "search_debounce_ms" => self.search_debounce_ms.to_string(),
            "dark_mode" => self.dark_mode.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a config value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "source.kind" => self.source.kind = value.parse()?,
            "source.path" => self.source.path = Some(PathBuf::from(value)),
            "source.base_url" => {
                url::Url::parse(value)?;
                self.source.base_url = Some(value.to_string());
            }
            "source.timeout_secs" => self.source.timeout_secs = parse_number(key, value)?,
            "page_size" => self.page_size = parse_number(key, value)?,
            "prefetch_rows" => self.prefetch_rows = parse_number(key, value)?,
            "search_debounce_ms" => self.search_debounce_ms = parse_number(key, value)?,
            "dark_mode" => {
                self.dark_mode = value.parse().map_err(|_| {
                    TaskdeckError::Config(format!("dark_mode must be true or false, got '{value}'"))
                })?
            }
            _ => return Err(unknown_key(key)),
        }
        self.validate()
    }
}

/// Redacting wrapper so tokens never end up in logs
pub struct RedactedToken<'a>(pub &'a SecretString);

impl fmt::Debug for RedactedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.0.expose_secret().len();
        write!(f, "[REDACTED; {len} chars]")
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| TaskdeckError::Config(format!("{key} must be a number, got '{value}'")))
}

fn unknown_key(key: &str) -> TaskdeckError {
    TaskdeckError::Config(format!(
        "unknown config key '{}', valid keys: {}",
        key,
        VALID_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.prefetch_rows, 3);
        assert_eq!(config.search_debounce_ms, 300);
        assert!(config.dark_mode);
        assert_eq!(config.source.kind, SourceKind::File);
        assert_eq!(config.source.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml_ng::from_str("page_size: 5\n").unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.source.timeout_secs, 30);
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let mut config = Config::default();
        config.set("page_size", "50").unwrap();
        config.set("dark_mode", "false").unwrap();
        assert_eq!(config.get("page_size").unwrap(), "50");
        assert_eq!(config.get("dark_mode").unwrap(), "false");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("page_size", "lots").is_err());
        assert!(config.set("source.base_url", "not a url").is_err());
        assert!(config.set("nope", "1").is_err());
        assert!(config.get("nope").is_err());
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let mut config = Config::default();
        assert!(config.set("page_size", "0").is_err());
    }

    #[test]
    fn test_http_source_requires_base_url() {
        let mut config = Config::default();
        assert!(config.set("source.kind", "http").is_err());

        let mut config = Config::default();
        config
            .set("source.base_url", "https://tasks.example.com/api")
            .unwrap();
        config.set("source.kind", "http").unwrap();
        assert_eq!(config.source.kind, SourceKind::Http);
    }

    #[test]
    #[serial]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var("TASKDECK_ROOT", dir.path().join(".taskdeck")) };

        let mut config = Config::default();
        config.set("prefetch_rows", "7").unwrap();
        config.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.prefetch_rows, 7);

        unsafe { std::env::remove_var("TASKDECK_ROOT") };
    }

    #[test]
    #[serial]
    fn test_load_missing_returns_default() {
        let dir = TempDir::new().unwrap();
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var("TASKDECK_ROOT", dir.path().join("missing")) };

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.page_size, 20);

        unsafe { std::env::remove_var("TASKDECK_ROOT") };
    }

    #[test]
    #[serial]
    fn test_api_token_from_env() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var("TASKDECK_API_TOKEN", "abc123") };
        let token = Config::api_token().unwrap();
        assert_eq!(token.expose_secret(), "abc123");
        assert_eq!(
            format!("{:?}", RedactedToken(&token)),
            "[REDACTED; 6 chars]"
        );

        unsafe { std::env::set_var("TASKDECK_API_TOKEN", "") };
        assert!(Config::api_token().is_none());
        unsafe { std::env::remove_var("TASKDECK_API_TOKEN") };
    }
}
