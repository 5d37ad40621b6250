//! Configuration for ttyprompt.
//!
//! This module provides TOML configuration file loading from
//! `~/.ttyprompt/config.toml`.
//!
//! # Configuration File
//!
//! ```toml
//! # Color output: auto, always, never
//! # "auto" disables colors when stdout is not a terminal
//! colors = "auto"
//!
//! # Terminal control binary
//! stty = "/bin/stty"
//!
//! # Override or add color presets
//! [presets]
//! red = "\u001b[0;91m"
//! orange = "\u001b[38;5;208m"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::tty::stty::DEFAULT_STTY_PATH;

/// When to emit color escape sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether colors are on, given whether the output is a terminal
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color output mode
    pub colors: ColorMode,
    /// Path to the `stty` binary
    pub stty: String,
    /// Preset overrides, name -> escape sequence
    pub presets: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: ColorMode::Auto,
            stty: DEFAULT_STTY_PATH.to_string(),
            presets: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Self {
        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(content) => match Self::parse(&content) {
                        Ok(config) => return config,
                        Err(e) => warn!(path = %path.display(), "ignoring invalid config: {}", e),
                    },
                    Err(e) => warn!(path = %path.display(), "cannot read config: {}", e),
                }
            }
        }
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), String> {
        if let Some(path) = Self::get_config_path() {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .map_err(|e| format!("Failed to create config directory: {}", e))?;
            }
            let content = toml::to_string_pretty(self)
                .map_err(|e| format!("Failed to serialize config: {}", e))?;
            fs::write(&path, content)
                .map_err(|e| format!("Failed to write config: {}", e))?;
            Ok(())
        } else {
            Err("Could not determine config path".to_string())
        }
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }
}

/// `~/.ttyprompt`
pub fn config_dir() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".ttyprompt"))
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
