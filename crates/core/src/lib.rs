//! unibridge Core - Bridge Context
//!
//! This crate holds the logic behind every exported entry point:
//! - [`relay`] - forwarding Java messages to the managed deliverer
//! - [`render`] - render-thread event codes and the cached Java target
//! - [`config`] - TOML configuration
//! - [`bridge`] - the [`Bridge`] context tying them to the graphics device
//!
//! # Re-exports
//!
//! - [`sdk`] - Unity plugin ABI types
//! - [`engine`] - Interface loading and graphics device state

pub use unibridge_engine as engine;
pub use unibridge_sdk as sdk;

pub mod bridge;
pub mod config;
pub mod relay;
pub mod render;

pub use bridge::Bridge;
pub use config::{BridgeConfig, ConfigError, ConfigResult};
pub use relay::{MessageRelay, RelayError};
pub use render::{JavaRenderTarget, RenderDispatcher, RenderError, RenderEvent, RenderTarget};
