//! Configuration parsing and management.

use crate::render::SyncGroup;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the codetabs.yml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tabs: TabsConfig,

    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub javadoc: JavadocConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Sync group used by containers that do not name their own
    #[serde(default = "default_group")]
    pub group: SyncGroup,

    /// Append the selection sync script to pages that contain tabs
    #[serde(default = "default_true")]
    pub inject_script: bool,
}

fn default_group() -> SyncGroup {
    SyncGroup::new("codeLanguage")
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    String::from("InspiredGitHub")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JavadocConfig {
    #[serde(default = "default_javadoc_base_url")]
    pub base_url: String,
}

fn default_javadoc_base_url() -> String {
    String::from("https://www.javadoc.io/static/io.github.autoparams/autoparams")
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            group: default_group(),
            inject_script: true,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            theme: default_theme(),
        }
    }
}

impl Default for JavadocConfig {
    fn default() -> Self {
        Self {
            base_url: default_javadoc_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Get a nested config value using dotted path (e.g., "tabs.group")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["tabs", "group"] => self.tabs.group.key().map(str::to_string),
            ["tabs", "inject_script"] => Some(self.tabs.inject_script.to_string()),
            ["highlight", "enabled"] => Some(self.highlight.enabled.to_string()),
            ["highlight", "theme"] => Some(self.highlight.theme.clone()),
            ["javadoc", "base_url"] => Some(self.javadoc.base_url.clone()),
            _ => None,
        }
    }
}
