//! Unity interface loading via `IUnityInterfaces::GetInterface`

use std::ptr::NonNull;

use unibridge_sdk::{guids, IUnityGraphics, IUnityInterfaces, UnityInterfaceGUID};

use crate::error::InterfaceError;

/// Wrapper around the interface registry handed to `UnityPluginLoad`
pub struct InterfaceRegistry {
    interfaces: NonNull<IUnityInterfaces>,
}

impl InterfaceRegistry {
    /// Wrap a raw registry pointer
    ///
    /// # Safety
    /// `interfaces` must be null or point to a live `IUnityInterfaces` table
    /// that outlives this wrapper.
    pub unsafe fn from_raw(interfaces: *mut IUnityInterfaces) -> Result<Self, InterfaceError> {
        NonNull::new(interfaces)
            .map(|interfaces| Self { interfaces })
            .ok_or(InterfaceError::NullRegistry)
    }

    /// Get an interface by GUID
    ///
    /// # Safety
    /// The returned pointer is only valid if `T` matches the interface the GUID names.
    pub unsafe fn get<T>(&self, guid: UnityInterfaceGUID) -> Result<NonNull<T>, InterfaceError> {
        let registry = self.interfaces.as_ref();
        let ptr = (registry.get_interface)(guid);

        NonNull::new(ptr as *mut T).ok_or(InterfaceError::NotFound {
            name: guids::interface_name(guid).unwrap_or("unknown"),
            guid,
        })
    }

    /// Try to get an interface, returning None on failure instead of error
    ///
    /// # Safety
    /// Same as `get`
    pub unsafe fn try_get<T>(&self, guid: UnityInterfaceGUID) -> Option<NonNull<T>> {
        self.get(guid).ok()
    }
}

/// Fetch `IUnityGraphics` from the registry passed to `UnityPluginLoad`
///
/// # Safety
/// `interfaces` must be null or a valid registry pointer.
#[tracing::instrument(skip_all)]
pub unsafe fn load_graphics(
    interfaces: *mut IUnityInterfaces,
) -> Result<NonNull<IUnityGraphics>, InterfaceError> {
    let registry = InterfaceRegistry::from_raw(interfaces)?;
    let graphics = registry.get::<IUnityGraphics>(guids::UNITY_GRAPHICS)?;
    tracing::info!("IUnityGraphics: {:p}", graphics.as_ptr());
    Ok(graphics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FAKE_GRAPHICS;
    use unibridge_sdk::IUnityInterface;

    unsafe extern "system" fn get_interface(guid: UnityInterfaceGUID) -> *mut IUnityInterface {
        if guid == guids::UNITY_GRAPHICS {
            &FAKE_GRAPHICS as *const IUnityGraphics as *mut IUnityInterface
        } else {
            std::ptr::null_mut()
        }
    }

    unsafe extern "system" fn get_nothing(_guid: UnityInterfaceGUID) -> *mut IUnityInterface {
        std::ptr::null_mut()
    }

    unsafe extern "system" fn register_interface(
        _guid: UnityInterfaceGUID,
        _ptr: *mut IUnityInterface,
    ) {
    }

    #[test]
    fn test_null_registry_rejected() {
        let result = unsafe { load_graphics(std::ptr::null_mut()) };
        assert!(matches!(result, Err(InterfaceError::NullRegistry)));
    }

    #[test]
    fn test_load_graphics_from_registry() {
        let mut registry = IUnityInterfaces {
            get_interface,
            register_interface,
        };

        let graphics = unsafe { load_graphics(&mut registry) }.unwrap();
        assert_eq!(
            graphics.as_ptr() as *const IUnityGraphics,
            &FAKE_GRAPHICS as *const IUnityGraphics
        );
    }

    #[test]
    fn test_missing_interface_reports_name() {
        let mut registry = IUnityInterfaces {
            get_interface: get_nothing,
            register_interface,
        };

        let err = unsafe { load_graphics(&mut registry) }.unwrap_err();
        assert!(matches!(
            err,
            InterfaceError::NotFound {
                name: "IUnityGraphics",
                ..
            }
        ));
        assert!(err.to_string().contains("7CBA0A9CA4DDB544"));
    }

    #[test]
    fn test_try_get_unknown_guid() {
        let mut registry = IUnityInterfaces {
            get_interface,
            register_interface,
        };

        let registry = unsafe { InterfaceRegistry::from_raw(&mut registry) }.unwrap();
        let missing = unsafe { registry.try_get::<IUnityGraphics>(UnityInterfaceGUID::new(1, 1)) };
        assert!(missing.is_none());
    }
}
