//! Bridge configuration
//!
//! Loaded once, in `JNI_OnLoad`, from the TOML file named by
//! `UNIBRIDGE_CONFIG`. Every field has a default that matches the shipped
//! Java plugin, so a missing file is not an error.
//!
//! ```toml
//! java_class = "com/ground_up_software/bridge/CBridgePlugin"
//! render_update_method = "RenderUpdateBridgePlugins"
//! log_level = "debug"
//! log_tag = "Bridge"
//! ```

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use loader::{config_path, CONFIG_ENV_VAR};

/// Java class receiving render updates, in JNI slash form
pub const DEFAULT_JAVA_CLASS: &str = "com/ground_up_software/bridge/CBridgePlugin";

/// Static `()V` method called on every render update
pub const DEFAULT_RENDER_UPDATE_METHOD: &str = "RenderUpdateBridgePlugins";

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Reload requested but `UNIBRIDGE_CONFIG` is not set
    #[error("No config path - set UNIBRIDGE_CONFIG")]
    NoConfigPath,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Class holding the render update method, e.g. `com/example/Plugin`
    pub java_class: String,

    /// Static `()V` method invoked for render event code 2
    pub render_update_method: String,

    /// Default log filter; `RUST_LOG` takes precedence on desktop
    pub log_level: String,

    /// Android logcat tag
    pub log_tag: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            java_class: DEFAULT_JAVA_CLASS.to_string(),
            render_update_method: DEFAULT_RENDER_UPDATE_METHOD.to_string(),
            log_level: "debug".to_string(),
            log_tag: "Bridge".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Load from `UNIBRIDGE_CONFIG`, falling back to defaults.
    ///
    /// Unset variable or missing file gives the defaults; a file that
    /// exists but fails to parse is an error.
    pub fn load() -> ConfigResult<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                tracing::debug!("Config file {:?} not found, using defaults", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded bridge config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to file, creating parent directories
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved bridge config to {:?}", path);
        Ok(())
    }

    /// Reload from `UNIBRIDGE_CONFIG`
    pub fn reload(&mut self) -> ConfigResult<()> {
        let path = config_path().ok_or(ConfigError::NoConfigPath)?;
        *self = Self::load_from(&path)?;
        tracing::debug!("Reloaded bridge config from {:?}", path);
        Ok(())
    }
}
