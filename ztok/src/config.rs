//! Configuration module for the ztok CLI.
//!
//! This module finds and loads the configuration settings for the
//! ztok application.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{Result, ToolError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ztok.toml";

/// Fallback job count when the CPU count does not fit.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Settings for the `tokens` command.
    #[serde(default)]
    pub output: OutputConfig,

    /// Settings for the `check` command.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Token dump options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format for token streams.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the line-offset table after each file.
    #[serde(default)]
    pub show_line_table: bool,
}

/// Check command options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files scanned in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,

    /// Treat overflowing number literals as failures.
    #[serde(default)]
    pub deny_overflow: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
            deny_overflow: false,
        }
    }
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/ztok/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ToolError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        if config.check.jobs == 0 {
            return Err(ToolError::Config("check.jobs must be at least 1".to_string()));
        }

        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("ztok").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ztok").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
