//! Interface GUIDs for `IUnityInterfaces::GetInterface`
//!
//! These must match the `UNITY_REGISTER_INTERFACE_GUID` declarations
//! in Unity's plugin headers exactly.

use crate::interfaces::UnityInterfaceGUID;

/// `IUnityGraphics`
pub const UNITY_GRAPHICS: UnityInterfaceGUID =
    UnityInterfaceGUID::new(0x7CBA_0A9C_A4DD_B544, 0x8C5A_D492_6EB1_7B11);

/// Known interfaces, for name lookup in diagnostics
pub const INTERFACE_GUIDS: &[(&str, UnityInterfaceGUID)] = &[("IUnityGraphics", UNITY_GRAPHICS)];

/// Human-readable name of a GUID, if it is one we know about
pub fn interface_name(guid: UnityInterfaceGUID) -> Option<&'static str> {
    INTERFACE_GUIDS
        .iter()
        .find(|(_, known)| *known == guid)
        .map(|(name, _)| *name)
}
