//! Config path resolution
//!
//! The bridge is loaded from an APK, so there is no stable directory next
//! to the library. The config file location is taken from the environment.

use std::path::PathBuf;

/// Environment variable holding the config file path
pub const CONFIG_ENV_VAR: &str = "UNIBRIDGE_CONFIG";

/// Returns the config path from `UNIBRIDGE_CONFIG`, if set and non-empty
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
