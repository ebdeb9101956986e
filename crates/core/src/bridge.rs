//! Bridge context
//!
//! All process-wide state lives in one [`Bridge`] value. The cdylib builds
//! it on first use and every exported entry point forwards to a method here.

use std::ffi::{c_int, CStr};

use jni::JNIEnv;
use unibridge_engine::{load_graphics, GraphicsDevice, InterfaceError};
use unibridge_sdk::{IUnityGraphicsDeviceEventCallback, IUnityInterfaces};

use crate::config::BridgeConfig;
use crate::relay::{MessageRelay, RelayError};
use crate::render::{JavaRenderTarget, RenderDispatcher, RenderError};

pub struct Bridge {
    config: BridgeConfig,
    relay: MessageRelay,
    render: RenderDispatcher,
    graphics: GraphicsDevice,
}

impl Bridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            relay: MessageRelay::new(),
            render: RenderDispatcher::new(),
            graphics: GraphicsDevice::new(),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn relay(&self) -> &MessageRelay {
        &self.relay
    }

    pub fn render(&self) -> &RenderDispatcher {
        &self.render
    }

    pub fn graphics(&self) -> &GraphicsDevice {
        &self.graphics
    }

    /// Resolve the configured render update method and cache it
    ///
    /// Called from `JNI_OnLoad`, where `env` belongs to the loading thread.
    #[tracing::instrument(skip_all)]
    pub fn attach_java(&self, env: &mut JNIEnv) -> Result<(), RenderError> {
        let target = JavaRenderTarget::resolve(
            env,
            &self.config.java_class,
            &self.config.render_update_method,
        )?;
        self.render.set_target(Box::new(target));
        Ok(())
    }

    /// Drop the cached Java render target
    pub fn detach_java(&self) {
        if self.render.clear_target() {
            tracing::debug!("Render target released");
        }
    }

    /// Handle `UnityPluginLoad`
    ///
    /// # Safety
    /// `interfaces` must be null or the registry Unity passed to
    /// `UnityPluginLoad`. `callback` must forward to
    /// [`on_graphics_device_event`](Self::on_graphics_device_event) on this bridge.
    #[tracing::instrument(skip_all)]
    pub unsafe fn plugin_load(
        &self,
        interfaces: *mut IUnityInterfaces,
        callback: IUnityGraphicsDeviceEventCallback,
    ) -> Result<(), InterfaceError> {
        let graphics = load_graphics(interfaces)?;
        self.graphics.attach(graphics, callback);
        Ok(())
    }

    /// Handle `UnityPluginUnload`
    pub fn plugin_unload(&self) {
        self.graphics.detach();
    }

    pub fn on_graphics_device_event(&self, event: c_int) {
        self.graphics.handle_event(event);
    }

    /// Store the deliverer address received from Java
    ///
    /// # Safety
    /// See [`MessageRelay::register_raw`].
    pub unsafe fn set_send_message_callback(&self, raw: usize) {
        self.relay.register_raw(raw);
    }

    /// Forward a message to the managed side
    ///
    /// Without a deliverer the message is dropped with a warning.
    pub fn send_message(&self, target: &CStr, method: &CStr, message: &CStr) {
        match self.relay.deliver(target, method, message) {
            Ok(()) => {}
            Err(RelayError::NoDeliverer) => {
                tracing::warn!(
                    "UnitySendMessage called without a send message callback, dropping {}.{}",
                    target.to_string_lossy(),
                    method.to_string_lossy()
                );
            }
            Err(e) => tracing::warn!("UnitySendMessage: {}", e),
        }
    }

    pub fn on_render_event(&self, event_id: c_int) {
        self.render.dispatch(event_id);
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderEvent, RenderTarget};
    use std::ffi::c_char;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
    use std::sync::Arc;
    use unibridge_sdk::{
        guids, IUnityGraphics, IUnityInterface, UnityGfxDeviceEventType, UnityGfxRenderer,
        UnityInterfaceGUID,
    };

    static RENDERER: AtomicI32 = AtomicI32::new(UnityGfxRenderer::OpenGLES30 as i32);
    static DELIVERED: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "system" fn get_renderer() -> c_int {
        RENDERER.load(Ordering::SeqCst)
    }
    unsafe extern "system" fn register_callback(_cb: IUnityGraphicsDeviceEventCallback) {}
    unsafe extern "system" fn reserve_ids(_count: c_int) -> c_int {
        0
    }

    static GRAPHICS: IUnityGraphics = IUnityGraphics {
        get_renderer,
        register_device_event_callback: register_callback,
        unregister_device_event_callback: register_callback,
        reserve_event_id_range: reserve_ids,
    };

    unsafe extern "system" fn get_interface(guid: UnityInterfaceGUID) -> *mut IUnityInterface {
        if guid == guids::UNITY_GRAPHICS {
            &GRAPHICS as *const IUnityGraphics as *mut IUnityInterface
        } else {
            std::ptr::null_mut()
        }
    }
    unsafe extern "system" fn register_interface(_g: UnityInterfaceGUID, _p: *mut IUnityInterface) {}

    unsafe extern "system" fn device_event(_event: c_int) {}

    unsafe extern "C" fn count_delivery(_t: *const c_char, _m: *const c_char, _b: *const c_char) {
        DELIVERED.fetch_add(1, Ordering::SeqCst);
    }

    struct Counter(Arc<AtomicUsize>);

    impl RenderTarget for Counter {
        fn render_update(&self) -> Result<(), RenderError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &str {
            "counter"
        }
    }

    #[test]
    fn test_plugin_lifecycle_tracks_renderer() {
        let bridge = Bridge::default();
        let mut registry = IUnityInterfaces {
            get_interface,
            register_interface,
        };

        unsafe { bridge.plugin_load(&mut registry, device_event) }.unwrap();
        assert_eq!(bridge.graphics().renderer(), Some(UnityGfxRenderer::OpenGLES30));

        bridge.on_graphics_device_event(UnityGfxDeviceEventType::Shutdown.as_raw());
        assert_eq!(bridge.graphics().renderer(), Some(UnityGfxRenderer::Null));

        bridge.plugin_unload();
        assert!(!bridge.graphics().is_attached());
    }

    #[test]
    fn test_plugin_load_null_registry() {
        let bridge = Bridge::default();
        let result = unsafe { bridge.plugin_load(std::ptr::null_mut(), device_event) };
        assert!(matches!(result, Err(InterfaceError::NullRegistry)));
        assert!(!bridge.graphics().is_attached());
    }

    #[test]
    fn test_send_message_before_and_after_registration() {
        let bridge = Bridge::default();
        let target = c"Bridge";
        let method = c"Handle";
        let message = c"{}";

        // Dropped, not delivered
        bridge.send_message(target, method, message);
        assert_eq!(bridge.relay().delivered_count(), 0);

        let before = DELIVERED.load(Ordering::SeqCst);
        unsafe { bridge.set_send_message_callback(count_delivery as usize) };
        bridge.send_message(target, method, message);

        assert_eq!(bridge.relay().delivered_count(), 1);
        assert_eq!(DELIVERED.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_render_events_route_to_target() {
        let bridge = Bridge::default();
        let calls = Arc::new(AtomicUsize::new(0));
        bridge.render().set_target(Box::new(Counter(calls.clone())));

        bridge.on_render_event(RenderEvent::StartUp.code());
        bridge.on_render_event(RenderEvent::RenderUpdate.code());
        bridge.on_render_event(RenderEvent::ShutDown.code());
        bridge.on_render_event(9);

        assert_eq!(calls.load(Ordering::SeqCst), 1);

        bridge.detach_java();
        bridge.on_render_event(RenderEvent::RenderUpdate.code());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
