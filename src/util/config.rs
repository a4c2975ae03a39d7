//! Configuration file support for packmap.
//!
//! packmap reads two configuration file locations:
//! - Global: `~/.packmap/config.toml` - User-wide defaults
//! - Project: `.packmap/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default name of the package mapping file.
pub const DEFAULT_PACKAGES_FILE: &str = ".packages";

/// packmap configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mapping file used when `--packages` is not given
    pub packages_file: Option<PathBuf>,

    /// Settings for `packmap rewrite`
    pub write: WriteConfig,
}

/// Settings for writing mapping files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    /// Write locations relative to the mapping file's directory (default: true)
    pub relative: Option<bool>,

    /// Comment block written instead of the generated header
    pub comment: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.packages_file.is_some() {
            self.packages_file = other.packages_file;
        }
        if other.write.relative.is_some() {
            self.write.relative = other.write.relative;
        }
        if other.write.comment.is_some() {
            self.write.comment = other.write.comment;
        }
    }

    /// The mapping file to use when none is given on the command line.
    pub fn packages_file(&self) -> PathBuf {
        self.packages_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PACKAGES_FILE))
    }

    /// Whether rewritten files use relative locations.
    pub fn write_relative(&self) -> bool {
        self.write.relative.unwrap_or(true)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.packmap/config.toml)
/// 2. Global config (~/.packmap/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global packmap config directory (~/.packmap).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".packmap"))
}

/// Get the global config path (~/.packmap/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.packmap/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".packmap").join("config.toml")
}
