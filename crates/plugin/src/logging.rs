//! Logging setup
//!
//! Desktop builds use a `tracing_subscriber` fmt layer. On Android there is
//! no stdout, so `tracing` falls back to its `log` integration and
//! `android_logger` writes to logcat under the configured tag.

use unibridge_core::BridgeConfig;

#[cfg(not(target_os = "android"))]
pub fn init(config: &BridgeConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(target_os = "android")]
pub fn init(config: &BridgeConfig) {
    let level = config
        .log_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Debug);

    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(config.log_tag.as_str())
            .with_max_level(level),
    );
}
