//! # Configuration Manager Module
//!
//! ## Purpose
//! Keeps the user defaults of the mechanism tools in one place: which mechanism serves
//! as the default source of transport data, whether existing transport data should be
//! overwritten by default, and the logging level.
//!
//! ## Architecture
//! - **ToolsConfig**: Serializable configuration structure
//! - **ConfigManager**: Loading, validation and persistence of the configuration
//! - **Global Access**: `OnceLock<Mutex<_>>` singleton with closure based accessors
//! - **Configuration File**: JSON file (mechtools_config.json)
//!
//! ## Configuration Format
//! ```json
//! {
//!   "default_reference": "gri30.json",
//!   "overwrite": false,
//!   "log_level": "info"
//! }
//! ```
//!
//! ## Usage
//! ```rust, ignore
//! use mechtools::config_manager::with_config_manager;
//!
//! let config = with_config_manager(|manager| manager.get_config().clone());
//! let result = copy_transport_with_config(&gas, &config)?;
//! ```

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock};

pub const DEFAULT_CONFIG_FILE: &str = "mechtools_config.json";

/// User defaults of the mechanism tools.
///
/// # Fields
/// * `default_reference` - Path to the mechanism transport data is taken from
/// * `overwrite` - Replace transport data species already have
/// * `log_level` - One of "off", "error", "warn", "info", "debug", "trace"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub default_reference: Option<String>,
    pub overwrite: bool,
    pub log_level: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_reference: None,
            overwrite: false,
            log_level: "info".to_string(),
        }
    }
}

impl ToolsConfig {
    /// log level from the configuration, `Info` if the string is not a level name
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

/// Loads, updates and saves the tools configuration.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: ToolsConfig,
    config_file: String,
}

impl ConfigManager {
    /// Creates a manager backed by `mechtools_config.json` in the current directory.
    /// A missing or invalid file gives the default configuration.
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let config = Self::load_config(config_file).unwrap_or_default();
        Self {
            config,
            config_file: config_file.to_string(),
        }
    }

    fn load_config(config_file: &str) -> Result<ToolsConfig, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: ToolsConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(ToolsConfig::default())
        }
    }

    /// Writes the current configuration to the config file.
    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    pub fn get_config(&self) -> &ToolsConfig {
        &self.config
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn default_reference(&self) -> Option<&str> {
        self.config.default_reference.as_deref()
    }

    /// Sets the default reference mechanism. The file must exist.
    pub fn set_default_reference(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            self.config.default_reference = Some(path.to_string());
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("File does not exist: {}", path).into())
        }
    }

    pub fn set_overwrite(&mut self, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
        self.config.overwrite = overwrite;
        self.save_config()
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<(), Box<dyn std::error::Error>> {
        if LevelFilter::from_str(level).is_err() {
            return Err(format!("Unknown log level: {}", level).into());
        }
        self.config.log_level = level.to_lowercase();
        self.save_config()
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config = ToolsConfig::default();
        self.save_config()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CONFIG_MANAGER: OnceLock<Mutex<ConfigManager>> = OnceLock::new();

/// Lock on the global configuration manager.
/// A poisoned lock is recovered, the configuration has no invariants a panic could break.
pub fn get_config_manager() -> MutexGuard<'static, ConfigManager> {
    GLOBAL_CONFIG_MANAGER
        .get_or_init(|| Mutex::new(ConfigManager::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn with_config_manager<F, R>(f: F) -> R
where
    F: FnOnce(&ConfigManager) -> R,
{
    let manager = get_config_manager();
    f(&manager)
}

pub fn with_config_manager_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut ConfigManager) -> R,
{
    let mut manager = get_config_manager();
    f(&mut manager)
}
