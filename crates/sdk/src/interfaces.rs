//! Unity native plugin interface tables
//!
//! Unity hands plugins C structs of function pointers. These are laid out
//! exactly as in `IUnityInterface.h` and `IUnityGraphics.h` so a pointer
//! received from the engine can be dereferenced directly.
//!
//! Every function in these tables uses `UNITY_INTERFACE_API`, which is
//! `__stdcall` on 32-bit Windows and the platform C convention elsewhere;
//! `extern "system"` matches both.

use std::ffi::{c_char, c_int};

/// Opaque base type of every Unity interface
#[repr(C)]
pub struct IUnityInterface {
    _opaque: [u8; 0],
}

/// 128-bit interface identifier, split in two halves as in `UnityInterfaceGUID`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnityInterfaceGUID {
    pub high: u64,
    pub low: u64,
}

impl UnityInterfaceGUID {
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }
}

/// Interface registry passed to `UnityPluginLoad`
#[repr(C)]
pub struct IUnityInterfaces {
    /// Look up an interface by GUID; null if the engine does not provide it
    pub get_interface: unsafe extern "system" fn(guid: UnityInterfaceGUID) -> *mut IUnityInterface,

    /// Register an interface for other plugins
    pub register_interface:
        unsafe extern "system" fn(guid: UnityInterfaceGUID, ptr: *mut IUnityInterface),
}

/// Device event callback signature (`IUnityGraphicsDeviceEventCallback`)
///
/// The event type is passed as its raw `int` value; see
/// [`UnityGfxDeviceEventType::from_raw`](crate::UnityGfxDeviceEventType::from_raw).
pub type IUnityGraphicsDeviceEventCallback = unsafe extern "system" fn(event_type: c_int);

/// Graphics interface (`IUnityGraphics`)
#[repr(C)]
pub struct IUnityGraphics {
    /// Currently active renderer, as a raw `UnityGfxRenderer` value
    pub get_renderer: unsafe extern "system" fn() -> c_int,

    pub register_device_event_callback:
        unsafe extern "system" fn(callback: IUnityGraphicsDeviceEventCallback),

    pub unregister_device_event_callback:
        unsafe extern "system" fn(callback: IUnityGraphicsDeviceEventCallback),

    /// Reserve `count` consecutive render event IDs, returning the first one
    pub reserve_event_id_range: unsafe extern "system" fn(count: c_int) -> c_int,
}

/// Render-thread callback scheduled through `GL.IssuePluginEvent` (`UnityRenderingEvent`)
pub type UnityRenderingEvent = extern "system" fn(event_id: c_int);

/// Managed-side message sink installed from C#
///
/// Arguments are NUL-terminated (target object, method name, message body).
pub type UnitySendMessageFn =
    unsafe extern "C" fn(target: *const c_char, method: *const c_char, message: *const c_char);
