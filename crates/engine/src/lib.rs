//! unibridge Engine - Unity Interface Loading and Graphics Device State
//!
//! This crate handles:
//! - Fetching `IUnityGraphics` from the `IUnityInterfaces` registry
//! - Tracking the graphics device lifecycle and active renderer
//!
//! # Architecture
//!
//! `UnityPluginLoad` passes its registry to [`loader::load_graphics`]; the
//! resulting interface is handed to [`GraphicsDevice::attach`], which
//! registers for device events and captures the current renderer.
//!
//! # Thread Safety
//!
//! Device events arrive on Unity's render thread while other entry points
//! run on Java threads. [`GraphicsDevice`] keeps the interface behind a lock
//! and the renderer in an atomic.

pub mod error;
pub mod graphics;
pub mod loader;

#[cfg(test)]
pub(crate) mod testing;

pub use error::InterfaceError;
pub use graphics::{GraphicsDevice, GraphicsState};
pub use loader::{load_graphics, InterfaceRegistry};
