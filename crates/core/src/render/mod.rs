//! Render-thread event dispatch
//!
//! C# schedules the exported render event function through
//! `GL.IssuePluginEvent(ptr, code)`. Unity then calls it on its render
//! thread with the integer code, and [`RenderDispatcher`] routes
//! [`RenderEvent::RenderUpdate`] to the registered [`RenderTarget`].

mod java;

use std::ffi::c_int;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;

pub use java::{JavaRenderTarget, RENDER_UPDATE_SIGNATURE};

/// Error type for render target resolution and invocation
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Could not obtain a JNI environment for the current thread
    #[error("Failed to attach thread to the Java VM: {0}")]
    Attach(#[source] jni::errors::Error),

    /// `FindClass` failed
    #[error("Java class not found: {class}")]
    ClassNotFound {
        class: String,
        #[source]
        source: jni::errors::Error,
    },

    /// `GetStaticMethodID` failed
    #[error("Static method not found: {class}.{method}{signature}")]
    MethodNotFound {
        class: String,
        method: String,
        signature: &'static str,
        #[source]
        source: jni::errors::Error,
    },

    /// Any other JNI failure during resolution
    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),

    /// The render update method threw or the call failed
    #[error("Render update call failed: {0}")]
    Call(#[source] jni::errors::Error),
}

/// Codes the engine passes to the render event function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderEvent {
    StartUp,
    ShutDown,
    RenderUpdate,
}

impl RenderEvent {
    pub fn from_code(code: c_int) -> Option<Self> {
        match code {
            0 => Some(Self::StartUp),
            1 => Some(Self::ShutDown),
            2 => Some(Self::RenderUpdate),
            _ => None,
        }
    }

    pub fn code(self) -> c_int {
        match self {
            Self::StartUp => 0,
            Self::ShutDown => 1,
            Self::RenderUpdate => 2,
        }
    }
}

/// Something to call on every render update
pub trait RenderTarget: Send + Sync {
    /// Invoke the update synchronously on the calling (render) thread
    fn render_update(&self) -> Result<(), RenderError>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Routes render event codes to the cached target
pub struct RenderDispatcher {
    target: RwLock<Option<Box<dyn RenderTarget>>>,
    updates: AtomicU64,
    warned_missing: AtomicBool,
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderDispatcher {
    pub fn new() -> Self {
        Self {
            target: RwLock::new(None),
            updates: AtomicU64::new(0),
            warned_missing: AtomicBool::new(false),
        }
    }

    /// Install the target for render updates, replacing any previous one
    pub fn set_target(&self, target: Box<dyn RenderTarget>) {
        tracing::info!("Render update target: {}", target.name());
        *self.target.write() = Some(target);
        self.warned_missing.store(false, Ordering::Relaxed);
    }

    /// Drop the target. Returns `true` if one was installed.
    pub fn clear_target(&self) -> bool {
        self.target.write().take().is_some()
    }

    pub fn has_target(&self) -> bool {
        self.target.read().is_some()
    }

    /// Handle one event code from the engine
    pub fn dispatch(&self, code: c_int) {
        match RenderEvent::from_code(code) {
            Some(RenderEvent::StartUp) => tracing::trace!("Render event: startup"),
            Some(RenderEvent::ShutDown) => tracing::trace!("Render event: shutdown"),
            Some(RenderEvent::RenderUpdate) => self.render_update(),
            None => tracing::trace!("Ignoring render event {}", code),
        }
    }

    fn render_update(&self) {
        let target = self.target.read();
        let Some(target) = target.as_ref() else {
            // Fires every frame, so only say it once
            if !self.warned_missing.swap(true, Ordering::Relaxed) {
                tracing::warn!("Render update requested but no render target is resolved");
            }
            return;
        };

        self.updates.fetch_add(1, Ordering::Relaxed);
        if let Err(e) = target.render_update() {
            tracing::warn!("{} failed: {}", target.name(), e);
        }
    }

    /// Number of render updates handed to a target so far
    pub fn render_update_count(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }
}
