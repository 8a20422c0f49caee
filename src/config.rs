//! Configuration module for EXPer
//!
//! Implements a small configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Project config (./exper.toml)
//! 3. User config (~/.config/nier-exper/config.toml)
//! 4. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExperError, ExperResult};

/// File name of the project-level config
pub const PROJECT_CONFIG: &str = "exper.toml";

/// EXPer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default slot file to patch when none is given on the command line
    #[serde(default)]
    pub slot: Option<PathBuf>,

    /// Back up the slot before patching (default: true)
    #[serde(default = "default_backup")]
    pub backup: bool,
}

fn default_backup() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot: None,
            backup: default_backup(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the defaults; malformed TOML is an error.
    pub fn load(path: &Path) -> ExperResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ExperError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path of the user-level config file, if a config directory exists
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nier-exper").join("config.toml"))
    }

    /// Resolve configuration from the standard locations
    ///
    /// Project config wins over user config; both fall back to defaults
    /// when absent.
    pub fn resolve() -> ExperResult<Self> {
        let project = PathBuf::from(PROJECT_CONFIG);
        if project.exists() {
            return Self::load(&project);
        }

        if let Some(user) = Self::user_config_path() {
            if user.exists() {
                return Self::load(&user);
            }
        }

        Ok(Self::default())
    }
}
