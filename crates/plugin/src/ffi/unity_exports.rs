//! Exports and callbacks for Unity's native plugin host
//!
//! Unity calls `UnityPluginLoad` / `UnityPluginUnload` on platforms that
//! load plugins through its own loader. The Android player loads this
//! library through Java instead and does not call them.

use std::ffi::c_int;

use tracing::instrument;
use unibridge_sdk::{IUnityInterfaces, UnityRenderingEvent};

use crate::bridge;

/// Called by Unity after loading the plugin
///
/// # Safety
/// `interfaces` must be the registry Unity passes, or null.
#[no_mangle]
#[instrument(skip_all)]
pub unsafe extern "system" fn UnityPluginLoad(interfaces: *mut IUnityInterfaces) {
    if let Err(e) = bridge().plugin_load(interfaces, on_graphics_device_event) {
        tracing::error!("UnityPluginLoad: {}", e);
    }
}

/// Called by Unity before unloading the plugin
#[no_mangle]
#[instrument(skip_all)]
pub extern "system" fn UnityPluginUnload() {
    if std::panic::catch_unwind(|| bridge().plugin_unload()).is_err() {
        tracing::error!("Panic during UnityPluginUnload");
    }
}

/// Registered with `IUnityGraphics` in `UnityPluginLoad`
unsafe extern "system" fn on_graphics_device_event(event_type: c_int) {
    bridge().on_graphics_device_event(event_type);
}

/// Scheduled by C# through `GL.IssuePluginEvent`; runs on the render thread
extern "system" fn on_render_event(event_id: c_int) {
    bridge().on_render_event(event_id);
}

/// Address handed to C# for `GL.IssuePluginEvent`
pub fn render_event_func() -> UnityRenderingEvent {
    on_render_event
}

#[cfg(test)]
mod tests {
    use super::*;
    use unibridge_core::RenderEvent;

    #[test]
    fn test_render_event_func_is_dispatcher() {
        let func = render_event_func();
        assert_eq!(func as usize, on_render_event as UnityRenderingEvent as usize);
        assert_ne!(func as usize, 0);
    }

    #[test]
    fn test_non_update_codes_do_not_render() {
        let _guard = crate::TEST_LOCK.lock();
        let func = render_event_func();
        let before = bridge().render().render_update_count();

        func(RenderEvent::StartUp.code());
        func(RenderEvent::ShutDown.code());
        func(77);
        func(-1);

        assert_eq!(bridge().render().render_update_count(), before);
    }

    #[test]
    fn test_unload_without_load() {
        UnityPluginUnload();
        assert!(!bridge().graphics().is_attached());
    }

    #[test]
    fn test_load_with_null_registry_is_ignored() {
        unsafe { UnityPluginLoad(std::ptr::null_mut()) };
        assert!(!bridge().graphics().is_attached());
    }
}
