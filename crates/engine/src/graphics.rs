//! Graphics device state
//!
//! Tracks the `IUnityGraphics` interface and the active renderer across
//! `UnityPluginLoad`, device events and `UnityPluginUnload`.
//!
//! ```text
//! Uninitialized --attach--> Initialized --Initialize--> BackendActive
//!       ^                        ^  <--Shutdown-------------'
//!       '---------detach---------'
//! ```
//!
//! `BeforeReset` / `AfterReset` are accepted in every state and change nothing.

use std::ffi::c_int;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicI32, Ordering};

use parking_lot::RwLock;
use unibridge_sdk::{
    IUnityGraphics, IUnityGraphicsDeviceEventCallback, UnityGfxDeviceEventType, UnityGfxRenderer,
};

/// Observable lifecycle state of the graphics device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsState {
    /// No graphics interface recorded
    Uninitialized,
    /// Interface recorded, renderer is `Null`
    Initialized,
    /// Interface recorded and a renderer is active (raw `UnityGfxRenderer`)
    BackendActive(i32),
}

/// Graphics interface plus the callback registered with it
struct GraphicsHandle {
    graphics: NonNull<IUnityGraphics>,
    callback: IUnityGraphicsDeviceEventCallback,
}

/// Graphics device tracking, owned by the bridge context
pub struct GraphicsDevice {
    handle: RwLock<Option<GraphicsHandle>>,
    renderer: AtomicI32,
}

// SAFETY: IUnityGraphics is a table of engine functions that stays valid while
// the plugin is loaded. The handle is guarded by the RwLock.
unsafe impl Send for GraphicsDevice {}
unsafe impl Sync for GraphicsDevice {}

impl Default for GraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice {
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
            renderer: AtomicI32::new(UnityGfxRenderer::Null.as_raw()),
        }
    }

    /// Record the graphics interface, register `callback` for device events
    /// and synthesize an `Initialize` event
    ///
    /// Called from `UnityPluginLoad`. Attaching again replaces the previous
    /// interface after unregistering from it.
    ///
    /// # Safety
    /// `graphics` must point to a live `IUnityGraphics` that outlives the
    /// matching [`detach`](Self::detach).
    #[tracing::instrument(skip_all)]
    pub unsafe fn attach(
        &self,
        graphics: NonNull<IUnityGraphics>,
        callback: IUnityGraphicsDeviceEventCallback,
    ) {
        // The engine may call back into us while registering, so no lock is held here
        let previous = self
            .handle
            .write()
            .replace(GraphicsHandle { graphics, callback });
        if let Some(previous) = previous {
            tracing::warn!("IUnityGraphics attached twice, dropping previous registration");
            (previous.graphics.as_ref().unregister_device_event_callback)(previous.callback);
        }

        (graphics.as_ref().register_device_event_callback)(callback);
        tracing::debug!("Registered graphics device event callback");

        self.handle_event(UnityGfxDeviceEventType::Initialize.as_raw());
    }

    /// Unregister from device events and forget the interface
    ///
    /// Called from `UnityPluginUnload`. A no-op when nothing is attached.
    #[tracing::instrument(skip_all)]
    pub fn detach(&self) {
        let Some(handle) = self.handle.write().take() else {
            tracing::debug!("Graphics detach without attach, ignoring");
            return;
        };

        // SAFETY: attach's contract keeps the interface alive until this call
        unsafe { (handle.graphics.as_ref().unregister_device_event_callback)(handle.callback) };
        self.renderer
            .store(UnityGfxRenderer::Null.as_raw(), Ordering::Release);
        tracing::debug!("Unregistered graphics device event callback");
    }

    /// Apply a device event received from the engine
    pub fn handle_event(&self, raw_event: c_int) {
        let Some(event) = UnityGfxDeviceEventType::from_raw(raw_event) else {
            tracing::warn!("Ignoring unknown graphics device event {}", raw_event);
            return;
        };

        match event {
            UnityGfxDeviceEventType::Initialize => {
                let handle = self.handle.read();
                let Some(handle) = handle.as_ref() else {
                    tracing::warn!("Initialize event before IUnityGraphics was attached");
                    return;
                };

                // SAFETY: see attach
                let raw = unsafe { (handle.graphics.as_ref().get_renderer)() };
                self.renderer.store(raw, Ordering::Release);

                match UnityGfxRenderer::from_raw(raw) {
                    Some(renderer) => tracing::info!("Graphics device initialized: {}", renderer),
                    None => tracing::info!("Graphics device initialized: renderer {}", raw),
                }
            }
            UnityGfxDeviceEventType::Shutdown => {
                self.renderer
                    .store(UnityGfxRenderer::Null.as_raw(), Ordering::Release);
                tracing::info!("Graphics device shut down");
            }
            UnityGfxDeviceEventType::BeforeReset | UnityGfxDeviceEventType::AfterReset => {
                tracing::debug!("Graphics device event {:?}", event);
            }
        }
    }

    /// Raw `UnityGfxRenderer` value of the active backend
    pub fn renderer_raw(&self) -> i32 {
        self.renderer.load(Ordering::Acquire)
    }

    /// Active backend, `None` if the engine reported a value we don't know
    pub fn renderer(&self) -> Option<UnityGfxRenderer> {
        UnityGfxRenderer::from_raw(self.renderer_raw())
    }

    pub fn is_attached(&self) -> bool {
        self.handle.read().is_some()
    }

    pub fn state(&self) -> GraphicsState {
        if !self.is_attached() {
            return GraphicsState::Uninitialized;
        }

        match self.renderer_raw() {
            raw if raw == UnityGfxRenderer::Null.as_raw() => GraphicsState::Initialized,
            raw => GraphicsState::BackendActive(raw),
        }
    }
}
