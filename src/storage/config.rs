//! Configuration handling for the agenda tool
//!
//! Configuration is read from `agenda.toml` (found by walking up from the
//! current directory) and `~/.config/agenda/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dialect::StyleTable;

/// File name of the local configuration
pub const LOCAL_CONFIG_FILE: &str = "agenda.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for HTML rendering
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Class string overrides per node type
    pub style: StyleTable,

    /// Wrap rendered HTML in a single document `<div>`
    pub wrap_document: bool,
}

/// Settings for regenerating cached documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackfillConfig {
    /// Extension of the cached document written next to each agenda file
    pub output_extension: String,
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            output_extension: "md".to_string(),
        }
    }
}

/// Local configuration (`agenda.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocalConfig {
    pub render: RenderConfig,
    pub backfill: BackfillConfig,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Combined configuration (global + local)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub local: LocalConfig,
    pub global: GlobalConfig,
    /// Path of the local config file, if one was found
    pub local_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let local_path = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_local_config(&dir));

        let local = match &local_path {
            Some(path) => Self::load_local(path)?,
            None => LocalConfig::default(),
        };

        Ok(Self {
            local,
            global,
            local_path,
        })
    }

    /// Loads configuration from an explicit local config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let local = Self::load_local(path)?;

        Ok(Self {
            local,
            global,
            local_path: Some(path.to_path_buf()),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "agenda", "agenda").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads and validates a local config file
    fn load_local(path: &Path) -> Result<LocalConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: LocalConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse local config")?;

        config.validate()?;
        Ok(config)
    }

    /// Finds `agenda.toml` in `start` or one of its parents
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(LOCAL_CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the style table used for HTML output
    pub fn styles(&self) -> &StyleTable {
        &self.local.render.style
    }
}

impl LocalConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let ext = self.backfill.output_extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "backfill.output_extension must be a plain file extension, got '{}'",
                self.backfill.output_extension
            )));
        }
        if matches!(ext, "json" | "yaml" | "yml") {
            return Err(ConfigError::Invalid(format!(
                "backfill.output_extension '{}' would overwrite agenda input files",
                ext
            )));
        }
        Ok(())
    }
}
