//! Exports called by the JVM
//!
//! Native method names follow JNI mangling for
//! `com.ground_up_software.bridge.CBridgePlugin`: `_` in the package name
//! becomes `_1`.

use std::ffi::c_void;

use jni::objects::{JObject, JString};
use jni::strings::JavaStr;
use jni::sys::{jint, jlong, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use tracing::instrument;
use unibridge_core::RelayError;

use crate::bridge;
use crate::ffi::unity_exports::render_event_func;

/// Called when Java loads this library
///
/// Resolves the render update method while the application class loader is
/// still reachable. On failure the library stays loaded and render updates
/// are dropped.
#[no_mangle]
#[instrument(skip_all)]
pub extern "system" fn JNI_OnLoad(vm: JavaVM, _reserved: *mut c_void) -> jint {
    let bridge = bridge();
    tracing::info!("unibridge loading...");

    let mut env = match vm.get_env() {
        Ok(env) => env,
        Err(e) => {
            tracing::error!("JNI_OnLoad without a JNI environment: {}", e);
            return JNI_VERSION_1_6;
        }
    };

    if let Err(e) = bridge.attach_java(&mut env) {
        tracing::error!("Render updates disabled: {}", e);
    }

    tracing::info!("unibridge loaded");
    JNI_VERSION_1_6
}

/// Called when the class loader holding this library is collected
#[no_mangle]
#[instrument(skip_all)]
pub extern "system" fn JNI_OnUnload(_vm: JavaVM, _reserved: *mut c_void) {
    tracing::info!("unibridge unloading...");
    bridge().detach_java();
}

/// `CBridgePlugin.SetUnitySendMessageCallback(long)`
///
/// The value is a function pointer obtained on the C# side with
/// `Marshal.GetFunctionPointerForDelegate`. The managed delegate must stay
/// rooted for the rest of the process.
#[no_mangle]
pub extern "system" fn Java_com_ground_1up_1software_bridge_CBridgePlugin_SetUnitySendMessageCallback(
    _env: JNIEnv,
    _this: JObject,
    callback: jlong,
) {
    // SAFETY: the Java side passes the address of a delegate with the
    // UnitySendMessageFn signature, or 0
    unsafe { bridge().set_send_message_callback(callback as usize) };
}

/// `CBridgePlugin.UnitySendMessage(String target, String method, String message)`
#[no_mangle]
pub extern "system" fn Java_com_ground_1up_1software_bridge_CBridgePlugin_UnitySendMessage(
    env: JNIEnv,
    _this: JObject,
    target: JString,
    method: JString,
    message: JString,
) {
    let bridge = bridge();
    if !bridge.relay().is_registered() {
        tracing::warn!("UnitySendMessage called without a send message callback");
        return;
    }

    let strings = utf_chars(&env, &target, "target").and_then(|target| {
        Ok((
            target,
            utf_chars(&env, &method, "method")?,
            utf_chars(&env, &message, "message")?,
        ))
    });

    match strings {
        // UTF buffers are released when the JavaStr guards drop
        Ok((target, method, message)) => bridge.send_message(&target, &method, &message),
        Err(e) => tracing::warn!("UnitySendMessage: {}", e),
    }
}

/// `CBridgePlugin.GetRenderEventFunc()`, for `GL.IssuePluginEvent`
#[no_mangle]
pub extern "system" fn Java_com_ground_1up_1software_bridge_CBridgePlugin_GetRenderEventFunc(
    _env: JNIEnv,
    _this: JObject,
) -> jlong {
    render_event_func() as usize as jlong
}

/// Borrow a Java string as modified UTF-8
fn utf_chars<'local, 'other_local: 'obj_ref, 'obj_ref>(
    env: &JNIEnv<'local>,
    value: &'obj_ref JString<'other_local>,
    argument: &'static str,
) -> Result<JavaStr<'local, 'other_local, 'obj_ref>, RelayError> {
    if value.is_null() {
        return Err(RelayError::NullString(argument));
    }

    // SAFETY: non-null, and the native method signature declares java.lang.String
    unsafe { env.get_string_unchecked(value) }
        .map_err(|source| RelayError::StringUnavailable { argument, source })
}
