//! Managed message relay
//!
//! Java hands us (target, method, message) triples; the C# side installs a
//! function pointer that forwards them to `UnitySendMessage`. The relay does
//! nothing but hold that pointer and call it.

use std::ffi::CStr;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use unibridge_sdk::UnitySendMessageFn;

/// Error type for message delivery
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Managed side has not installed a deliverer yet
    #[error("No message deliverer registered")]
    NoDeliverer,

    /// Java passed `null` for one of the three strings
    #[error("Null {0} string")]
    NullString(&'static str),

    /// `GetStringUTFChars` failed for one of the three strings
    #[error("Could not read {argument} string: {source}")]
    StringUnavailable {
        argument: &'static str,
        #[source]
        source: jni::errors::Error,
    },
}

/// Holds the registered deliverer
pub struct MessageRelay {
    deliverer: RwLock<Option<UnitySendMessageFn>>,
    delivered: AtomicU64,
}

impl Default for MessageRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRelay {
    pub fn new() -> Self {
        Self {
            deliverer: RwLock::new(None),
            delivered: AtomicU64::new(0),
        }
    }

    /// Install a deliverer, replacing any previous one. `None` clears it.
    pub fn register(&self, deliverer: Option<UnitySendMessageFn>) {
        let previous = std::mem::replace(&mut *self.deliverer.write(), deliverer);
        match (previous.is_some(), deliverer.is_some()) {
            (_, true) => tracing::debug!(replaced = previous.is_some(), "Message deliverer registered"),
            (true, false) => tracing::debug!("Message deliverer cleared"),
            (false, false) => {}
        }
    }

    /// Install a deliverer from the pointer-sized integer Java passes us
    ///
    /// Zero clears the registration. No other validation is possible.
    ///
    /// # Safety
    /// A non-zero `raw` must be the address of a function with the
    /// [`UnitySendMessageFn`] signature that stays callable for the rest of
    /// the process lifetime.
    pub unsafe fn register_raw(&self, raw: usize) {
        let deliverer = if raw == 0 {
            None
        } else {
            Some(std::mem::transmute::<usize, UnitySendMessageFn>(raw))
        };
        self.register(deliverer);
    }

    pub fn is_registered(&self) -> bool {
        self.deliverer.read().is_some()
    }

    /// Forward one message to the deliverer, synchronously on this thread
    pub fn deliver(&self, target: &CStr, method: &CStr, message: &CStr) -> Result<(), RelayError> {
        // Copy the pointer out so the deliverer may re-register without deadlocking
        let deliverer = (*self.deliverer.read()).ok_or(RelayError::NoDeliverer)?;

        // SAFETY: register_raw's contract keeps the deliverer callable; the
        // three strings are NUL-terminated and outlive the call.
        unsafe { deliverer(target.as_ptr(), method.as_ptr(), message.as_ptr()) };

        self.delivered.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Number of messages handed to a deliverer so far
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }
}
