//! C ABI entry points
//!
//! - [`java_exports`] - `JNI_OnLoad` and the `CBridgePlugin` native methods
//! - [`unity_exports`] - `UnityPluginLoad` / `UnityPluginUnload` and the
//!   callbacks handed to the engine

// Symbol names are fixed by the JNI and Unity loaders
#![allow(non_snake_case)]

pub mod java_exports;
pub mod unity_exports;
