//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Where sentence content is loaded from (directory or URL)
//! - Number of curriculum days
//! - The kana type a fresh letters deck starts on
//!
//! Configuration is stored at `~/.config/kanadeck/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use super::data_dir;
use crate::content::KanaType;
use crate::error::{ConfigError, Result};

/// Sentence content location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Local directory or `http(s)://` base URL.
    #[serde(default = "default_source")]
    pub source: String,
    /// Relative path of one day's file; every `{N}` becomes the day number.
    #[serde(default = "default_path_template")]
    pub path_template: String,
    #[serde(default = "default_days")]
    pub days: u32,
}

/// Study session defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub default_kana: KanaType,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/kanadeck/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub study: StudyConfig,
}

fn default_source() -> String {
    "data/curriculum".into()
}
fn default_path_template() -> String {
    "day{N}/data{N}.json".into()
}
fn default_days() -> u32 {
    40
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            path_template: default_path_template(),
            days: default_days(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) => return Err(invalid("not a leaf key".into())),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Location of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Check the values the content loader and day picker rely on.
    ///
    /// Returns the offending key with the error.
    fn validate(&self) -> std::result::Result<(), (&'static str, String)> {
        let content = &self.content;
        if content.source.trim().is_empty() {
            return Err(("content.source", "must name a directory or URL".into()));
        }
        if content.source.starts_with("http://") || content.source.starts_with("https://") {
            let url = Url::parse(&content.source)
                .map_err(|e| ("content.source", e.to_string()))?;
            if url.host_str().map_or(true, str::is_empty) {
                return Err(("content.source", "URL has no host".into()));
            }
        }
        if !content.path_template.contains("{N}") {
            return Err(("content.path_template", "must contain {N}".into()));
        }
        if content.days == 0 {
            return Err(("content.days", "must be at least 1".into()));
        }
        Ok(())
    }

    /// Load from disk or create the default file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Self = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                cfg.validate()
                    .map_err(|(key, message)| ConfigError::LoadFailed {
                        path,
                        message: format!("{key} {message}"),
                    })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.clone(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and save. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()?;
        Ok(())
    }

    /// Update a value in memory only.
    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated
            .validate()
            .map_err(|(field, message)| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{field} {message}"),
            })?;
        *self = updated;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }
}
