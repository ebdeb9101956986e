//! Fake `IUnityGraphics` table shared by the unit tests

use std::ffi::c_int;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

use parking_lot::{const_mutex, Mutex, MutexGuard};
use unibridge_sdk::{IUnityGraphics, IUnityGraphicsDeviceEventCallback, UnityGfxRenderer};

/// Renderer the fake engine reports
pub static FAKE_RENDERER: AtomicI32 = AtomicI32::new(UnityGfxRenderer::Null as i32);
pub static REGISTER_CALLS: AtomicUsize = AtomicUsize::new(0);
pub static UNREGISTER_CALLS: AtomicUsize = AtomicUsize::new(0);
/// Address of the last callback passed to register/unregister
pub static LAST_REGISTERED: AtomicUsize = AtomicUsize::new(0);
pub static LAST_UNREGISTERED: AtomicUsize = AtomicUsize::new(0);

/// Tests touching the fake's counters run one at a time
static FAKE_LOCK: Mutex<()> = const_mutex(());

unsafe extern "system" fn get_renderer() -> c_int {
    FAKE_RENDERER.load(Ordering::SeqCst)
}

unsafe extern "system" fn register_device_event_callback(
    callback: IUnityGraphicsDeviceEventCallback,
) {
    REGISTER_CALLS.fetch_add(1, Ordering::SeqCst);
    LAST_REGISTERED.store(callback as usize, Ordering::SeqCst);
}

unsafe extern "system" fn unregister_device_event_callback(
    callback: IUnityGraphicsDeviceEventCallback,
) {
    UNREGISTER_CALLS.fetch_add(1, Ordering::SeqCst);
    LAST_UNREGISTERED.store(callback as usize, Ordering::SeqCst);
}

unsafe extern "system" fn reserve_event_id_range(_count: c_int) -> c_int {
    0
}

pub static FAKE_GRAPHICS: IUnityGraphics = IUnityGraphics {
    get_renderer,
    register_device_event_callback,
    unregister_device_event_callback,
    reserve_event_id_range,
};

/// Lock the fake and reset its counters
pub fn reset_fake() -> MutexGuard<'static, ()> {
    let guard = FAKE_LOCK.lock();
    FAKE_RENDERER.store(UnityGfxRenderer::Null as i32, Ordering::SeqCst);
    REGISTER_CALLS.store(0, Ordering::SeqCst);
    UNREGISTER_CALLS.store(0, Ordering::SeqCst);
    LAST_REGISTERED.store(0, Ordering::SeqCst);
    LAST_UNREGISTERED.store(0, Ordering::SeqCst);
    guard
}
