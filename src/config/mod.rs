//! Configuration management for termfolio
//!
//! Supports configuration via:
//! 1. Config file (~/.config/termfolio/config.toml)
//! 2. Environment variables (TERMFOLIO_THEME, TERMFOLIO_PROFILE, TERMFOLIO_STATE, NO_COLOR)
//! 3. CLI arguments (override file/env settings)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::state::FileStateStore;
use crate::theme::ThemeName;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session settings
    pub shell: ShellSettings,

    /// Profile source
    pub profile: ProfileSettings,

    /// Persisted theme state
    pub state: StateSettings,

    /// Terminal output
    pub display: DisplaySettings,
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Theme used when nothing is persisted
    pub default_theme: String,

    /// Fixed seed for `8ball` answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            default_theme: ThemeName::Dark.to_string(),
            seed: None,
        }
    }
}

/// Profile settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    /// TOML profile replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// State file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSettings {
    pub path: PathBuf,
}

impl Default for StateSettings {
    fn default() -> Self {
        Self {
            path: FileStateStore::default_path(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Emit colors; plain text when false
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Get default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termfolio")
            .join("config.toml")
    }

    /// Load config from default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_path())
    }

    /// Load config from specific path
    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default().with_env_overrides());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config.with_env_overrides())
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(theme) = lookup("TERMFOLIO_THEME") {
            self.shell.default_theme = theme;
        }
        if let Some(path) = lookup("TERMFOLIO_PROFILE") {
            self.profile.path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("TERMFOLIO_STATE") {
            self.state.path = PathBuf::from(path);
        }
        // any value, even empty, disables color
        if lookup("NO_COLOR").is_some() {
            self.display.color = false;
        }
        self
    }

    /// Save config to default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path())
    }

    /// Save config to specific path
    pub fn save_to(&self, path: PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_theme()?;
        if let Some(path) = &self.profile.path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.clone()));
            }
        }
        Ok(())
    }

    /// Parsed default theme; the gated theme cannot be a default
    pub fn default_theme(&self) -> Result<ThemeName, ConfigError> {
        let name = &self.shell.default_theme;
        match name.parse::<ThemeName>() {
            Ok(theme) if !theme.is_gated() => Ok(theme),
            _ => Err(ConfigError::Invalid(format!("unknown default theme '{}'", name))),
        }
    }

    /// Generate example config content
    pub fn example() -> String {
        let example = Config::default();
        toml::to_string_pretty(&example).unwrap_or_default()
    }
}

/// Builder for creating Config programmatically
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn default_theme(mut self, theme: ThemeName) -> Self {
        self.config.shell.default_theme = theme.to_string();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.shell.seed = Some(seed);
        self
    }

    pub fn profile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.profile.path = Some(path.into());
        self
    }

    pub fn state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.state.path = path.into();
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.config.display.color = color;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
