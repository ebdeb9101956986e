//! Error types for Unity interface loading

use unibridge_sdk::UnityInterfaceGUID;

/// Error type for interface loading operations
#[derive(Debug, thiserror::Error)]
pub enum InterfaceError {
    /// `UnityPluginLoad` was given a null registry
    #[error("IUnityInterfaces pointer is null")]
    NullRegistry,

    /// Registry returned null for the requested interface
    #[error("Interface not provided by engine: {name} ({high:016X}-{low:016X})", high = .guid.high, low = .guid.low)]
    NotFound {
        name: &'static str,
        guid: UnityInterfaceGUID,
    },
}
