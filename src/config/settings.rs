//! Settings file (topofetch.toml) parsing
//!
//! The settings file is optional. Values not present fall back to the
//! compiled-in defaults; command-line flags override both.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{defaults, urls};
use crate::error::SettingsError;

/// Root of the settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Fetch configuration
    #[serde(default)]
    pub fetch: FetchSettings,
}

/// The `[fetch]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchSettings {
    /// Base URL of the upstream data directory
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Dataset version, substituted into the grid file name
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory that receives downloaded files
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Stop at the first failed transfer instead of attempting every step
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_base_url() -> String {
    urls::TOPO_BASE_URL.to_string()
}

fn default_version() -> String {
    defaults::DEFAULT_VERSION.to_string()
}

fn default_target() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_TARGET_DIR)
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            target: default_target(),
            fail_fast: false,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load `topofetch.toml` from `dir`, falling back to defaults if absent
    pub fn load_or_default(dir: &Path) -> Result<Self, SettingsError> {
        let path = dir.join(defaults::SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| SettingsError::Read {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Self::from_toml(&path, &content)
    }
}
