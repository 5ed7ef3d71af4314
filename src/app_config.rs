use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Where the active dataset comes from
    #[serde(default)]
    pub dataset: DatasetSource,

    /// Playback timing and preload settings
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Source of the gloss-to-clip dataset
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase", tag = "type", content = "value")]
pub enum DatasetSource {
    /// Small built-in dataset, useful for smoke tests
    #[default]
    Bundled,
    /// Local JSON dataset definition
    File(PathBuf),
    /// Remote JSON dataset endpoint
    Url(String),
    /// Directory of clip files, file stem = gloss
    Dir(PathBuf),
}

/// Playback timing and preload settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Pause between consecutive clips, in milliseconds
    #[serde(default = "default_inter_clip_delay_ms")]
    pub inter_clip_delay_ms: u64,

    /// Backoff before skipping a failed clip, in milliseconds
    #[serde(default = "default_error_skip_delay_ms")]
    pub error_skip_delay_ms: u64,

    /// Simulated clip duration for the CLI sink, in milliseconds
    #[serde(default = "default_clip_duration_ms")]
    pub clip_duration_ms: u64,

    /// Whether to warm the clip cache ahead of playback
    #[serde(default = "default_preload")]
    pub preload: bool,
}

fn default_inter_clip_delay_ms() -> u64 {
    300
}

fn default_error_skip_delay_ms() -> u64 {
    500
}

fn default_clip_duration_ms() -> u64 {
    1200
}

fn default_preload() -> bool {
    true
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            inter_clip_delay_ms: default_inter_clip_delay_ms(),
            error_skip_delay_ms: default_error_skip_delay_ms(),
            clip_duration_ms: default_clip_duration_ms(),
            preload: default_preload(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetSource::default(),
            playback: PlaybackConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Per-user config location, when the platform provides one
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("signflow").join("conf.json"))
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if self.playback.clip_duration_ms == 0 {
            return Err(anyhow!("clip_duration_ms must be greater than 0"));
        }
        if let DatasetSource::Url(url) = &self.dataset {
            url::Url::parse(url).with_context(|| format!("Invalid dataset URL: {}", url))?;
        }
        Ok(())
    }
}
