//! Java static method as a render target

use jni::objects::{GlobalRef, JClass, JStaticMethodID};
use jni::signature::{Primitive, ReturnType};
use jni::{JNIEnv, JavaVM};

use super::{RenderError, RenderTarget};

/// JNI signature of the render update method: no arguments, returns void
pub const RENDER_UPDATE_SIGNATURE: &str = "()V";

/// A `static void method()` on a Java class, resolved once
pub struct JavaRenderTarget {
    vm: JavaVM,
    class: GlobalRef,
    method: JStaticMethodID,
    name: String,
}

impl JavaRenderTarget {
    /// Look up `class_name.method_name()V` and pin the class with a global reference
    ///
    /// Must run on a thread whose class loader can see the application
    /// classes, i.e. inside `JNI_OnLoad` or a Java-originated call.
    /// Render threads attached from native code only see system classes.
    #[tracing::instrument(skip(env))]
    pub fn resolve(
        env: &mut JNIEnv,
        class_name: &str,
        method_name: &str,
    ) -> Result<Self, RenderError> {
        let class = match env.find_class(class_name) {
            Ok(class) => class,
            Err(source) => {
                clear_exception(env);
                return Err(RenderError::ClassNotFound {
                    class: class_name.to_string(),
                    source,
                });
            }
        };

        let method = match env.get_static_method_id(&class, method_name, RENDER_UPDATE_SIGNATURE)
        {
            Ok(method) => method,
            Err(source) => {
                clear_exception(env);
                return Err(RenderError::MethodNotFound {
                    class: class_name.to_string(),
                    method: method_name.to_string(),
                    signature: RENDER_UPDATE_SIGNATURE,
                    source,
                });
            }
        };

        let class = env.new_global_ref(&class)?;
        let vm = env.get_java_vm()?;
        tracing::debug!("Resolved {}.{}{}", class_name, method_name, RENDER_UPDATE_SIGNATURE);

        Ok(Self {
            vm,
            class,
            method,
            name: format!("{}.{}", class_name.replace('/', "."), method_name),
        })
    }
}

impl RenderTarget for JavaRenderTarget {
    fn render_update(&self) -> Result<(), RenderError> {
        // No-op for threads that are already attached
        let mut env = self
            .vm
            .attach_current_thread_permanently()
            .map_err(RenderError::Attach)?;

        // SAFETY: `class` holds a global reference to a java.lang.Class
        let class = unsafe { JClass::from_raw(self.class.as_obj().as_raw()) };

        // SAFETY: `method` was resolved on `class` with RENDER_UPDATE_SIGNATURE,
        // which takes no arguments and returns void.
        let result = unsafe {
            env.call_static_method_unchecked(
                &class,
                self.method,
                ReturnType::Primitive(Primitive::Void),
                &[],
            )
        };

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                clear_exception(&mut env);
                Err(RenderError::Call(e))
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Print and clear a pending Java exception so the next JNI call is legal
fn clear_exception(env: &mut JNIEnv) {
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
}
