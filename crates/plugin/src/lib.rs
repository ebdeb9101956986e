//! unibridge - Native Bridge Library
//!
//! This crate compiles to `libunibridge.so`, loaded by both the JVM
//! (`System.loadLibrary`) and Unity's native plugin host. It owns the single
//! [`Bridge`] context and exposes the C ABI entry points in [`ffi`].

pub mod ffi;
mod logging;

use std::sync::LazyLock;

use unibridge_core::{Bridge, BridgeConfig};

static BRIDGE: LazyLock<Bridge> = LazyLock::new(|| {
    let (config, config_error) = match BridgeConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (BridgeConfig::default(), Some(e)),
    };

    logging::init(&config);
    if let Some(e) = config_error {
        tracing::error!("Failed to load bridge config, using defaults: {}", e);
    }

    Bridge::new(config)
});

/// Tests that drive the shared bridge run one at a time
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

/// The process-wide bridge, built on first use by whichever entry point runs first
pub fn bridge() -> &'static Bridge {
    &BRIDGE
}
