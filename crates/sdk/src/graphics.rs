//! Graphics backend and device event enums
//!
//! Unity passes both as plain `int`s. Conversion goes through `from_raw`
//! so an unexpected value from a newer engine never becomes an invalid enum.

use std::fmt;

/// Graphics backend (`UnityGfxRenderer`)
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnityGfxRenderer {
    D3D11 = 2,
    /// No graphics device, or the device has been shut down
    Null = 4,
    OpenGLES20 = 8,
    OpenGLES30 = 11,
    Gxm = 12,
    PS4 = 13,
    XboxOne = 14,
    Metal = 16,
    OpenGLCore = 17,
    D3D12 = 18,
    Vulkan = 21,
    Nvn = 22,
    XboxOneD3D12 = 23,
    GameCoreXboxOne = 24,
    GameCoreXboxSeries = 25,
    PS5 = 26,
    PS5Nggc = 27,
}

impl UnityGfxRenderer {
    pub fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            2 => Self::D3D11,
            4 => Self::Null,
            8 => Self::OpenGLES20,
            11 => Self::OpenGLES30,
            12 => Self::Gxm,
            13 => Self::PS4,
            14 => Self::XboxOne,
            16 => Self::Metal,
            17 => Self::OpenGLCore,
            18 => Self::D3D12,
            21 => Self::Vulkan,
            22 => Self::Nvn,
            23 => Self::XboxOneD3D12,
            24 => Self::GameCoreXboxOne,
            25 => Self::GameCoreXboxSeries,
            26 => Self::PS5,
            27 => Self::PS5Nggc,
            _ => return None,
        })
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for UnityGfxRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::D3D11 => "Direct3D 11",
            Self::Null => "Null",
            Self::OpenGLES20 => "OpenGL ES 2.0",
            Self::OpenGLES30 => "OpenGL ES 3.x",
            Self::Gxm => "PlayStation Vita",
            Self::PS4 => "PlayStation 4",
            Self::XboxOne => "Xbox One",
            Self::Metal => "Metal",
            Self::OpenGLCore => "OpenGL Core",
            Self::D3D12 => "Direct3D 12",
            Self::Vulkan => "Vulkan",
            Self::Nvn => "Nintendo NVN",
            Self::XboxOneD3D12 => "Xbox One Direct3D 12",
            Self::GameCoreXboxOne => "GameCore Xbox One",
            Self::GameCoreXboxSeries => "GameCore Xbox Series",
            Self::PS5 => "PlayStation 5",
            Self::PS5Nggc => "PlayStation 5 NGGC",
        };
        f.write_str(name)
    }
}

/// Device lifecycle event (`UnityGfxDeviceEventType`)
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnityGfxDeviceEventType {
    Initialize = 0,
    Shutdown = 1,
    BeforeReset = 2,
    AfterReset = 3,
}

impl UnityGfxDeviceEventType {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Initialize),
            1 => Some(Self::Shutdown),
            2 => Some(Self::BeforeReset),
            3 => Some(Self::AfterReset),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }
}
