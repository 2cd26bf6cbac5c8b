//! Configuration management for Trawl.
//!
//! Configuration is stored in TOML format in a platform-appropriate
//! location. The directory can be overridden with the `TRAWL_CONFIG_DIR`
//! environment variable, falling back to the conventional per-user config
//! directory.

use crate::error::{Result, TrawlError};
use crate::patterns::PatternSet;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "TRAWL_CONFIG_DIR";

/// Main configuration structure for Trawl.
///
/// ## Example Configuration File (trawl.toml)
///
/// ```toml
/// [filter]
/// patterns = ["**", "!**/.git", "!**/.git/**"]
///
/// [output]
/// sort = true
/// absolute = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default pattern set applied when none is given on the command line
    pub filter: FilterConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Default filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Patterns matched when the command line supplies none
    pub patterns: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            patterns: vec![
                "**".to_string(),
                "!**/.git".to_string(),
                "!**/.git/**".to_string(),
            ],
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sort enumerated paths before printing
    pub sort: bool,

    /// Resolve patterns to absolute form before matching
    pub absolute: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            sort: true,
            absolute: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default config if no config file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        info!(path = %path.display(), "Loading configuration");
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| TrawlError::config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "Saving configuration");
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TrawlError::config(format!("failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    ///
    /// `TRAWL_CONFIG_DIR` takes precedence over the platform config
    /// directory.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("trawl.toml"))
    }

    /// The configured pattern set.
    pub fn pattern_set(&self) -> PatternSet {
        PatternSet::new(self.filter.patterns.iter().map(String::as_str))
    }

    fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        let dirs = ProjectDirs::from("", "", "trawl")
            .ok_or_else(|| TrawlError::config("could not determine config directory"))?;
        Ok(dirs.config_dir().to_path_buf())
    }
}
