//! unibridge SDK - Unity Native Plugin Type Definitions
//!
//! This crate mirrors the parts of Unity's native plugin headers
//! (`IUnityInterface.h`, `IUnityGraphics.h`) the bridge needs.
//! It has no dependencies.
//!
//! # Modules
//!
//! - [`interfaces`] - `#[repr(C)]` interface tables and callback signatures
//! - [`guids`] - Interface GUIDs for `IUnityInterfaces::GetInterface`
//! - [`graphics`] - Renderer and device event enums

pub mod graphics;
pub mod guids;
pub mod interfaces;

pub use graphics::*;
pub use guids::INTERFACE_GUIDS;
pub use interfaces::*;
