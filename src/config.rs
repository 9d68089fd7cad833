use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ColorFallbacks;
use crate::error::Result;
use crate::presentation::{IconFillMode, StartIndex};

/// File name searched for in the working directory
pub const CONFIG_FILE_NAME: &str = "recap.toml";

/// Represents the complete configuration for recap.
///
/// Contains where release notes live, how unresolvable colors are shown,
/// and the presentation defaults handed to the UI.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub resources: ResourcesConfig,

    #[serde(default)]
    pub colors: ColorFallbacks,

    #[serde(default)]
    pub presentation: PresentationConfig,
}

/// Returns the default resource directory (the working directory).
fn default_resource_directory() -> PathBuf {
    PathBuf::from(".")
}

/// Returns the default resource name.
fn default_resource_name() -> String {
    "Releases".to_string()
}

/// Where release-notes resources are looked up.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResourcesConfig {
    #[serde(default = "default_resource_directory")]
    pub directory: PathBuf,

    /// Resource loaded when none is named on the command line
    #[serde(default = "default_resource_name")]
    pub default_name: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        ResourcesConfig {
            directory: default_resource_directory(),
            default_name: default_resource_name(),
        }
    }
}

/// Presentation defaults. Only carried through; recap does not render.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationConfig {
    #[serde(default)]
    pub icon_fill_mode: IconFillMode,

    #[serde(default)]
    pub start_index: StartIndex,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Location of the per-user configuration file, if the platform has one
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recap").join(CONFIG_FILE_NAME))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `recap.toml` in current directory
/// 3. `recap/recap.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(path) = user_config_path().filter(|path| path.exists()) {
        fs::read_to_string(path)?
    } else {
        debug!("No {} found, using default config", CONFIG_FILE_NAME);
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}
