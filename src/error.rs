//! Error types
//!
//! The simulation itself is infallible. Failures only happen while acquiring
//! the rendering surface at startup, or while reading settings.

use std::fmt;

/// Fatal errors while bringing up the canvas and GPU. Never retried.
#[derive(Debug)]
pub enum InitError {
    /// No global `window` object (not running in a browser page)
    NoWindow,
    /// Window has no document
    NoDocument,
    /// No element with the given id
    CanvasNotFound(String),
    /// Element exists but is not a `<canvas>`
    NotACanvas,
    /// Canvas has no drawable area (hidden or collapsed at load)
    EmptyViewport { width: i32, height: i32 },
    /// Failed to create a wgpu surface for the canvas
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create the GPU device
    DeviceCreation(wgpu::RequestDeviceError),
    /// Surface reports no usable texture format
    NoSurfaceFormat,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NoWindow => write!(f, "No browser window available"),
            InitError::NoDocument => write!(f, "Window has no document"),
            InitError::CanvasNotFound(id) => write!(f, "No element with id '{}'", id),
            InitError::NotACanvas => write!(f, "Render target is not a canvas element"),
            InitError::EmptyViewport { width, height } => {
                write!(f, "Canvas has no drawable area ({}x{})", width, height)
            }
            InitError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            InitError::NoAdapter(e) => write!(f, "No compatible GPU adapter found: {}", e),
            InitError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            InitError::NoSurfaceFormat => write!(f, "Surface has no supported texture format"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::SurfaceCreation(e) => Some(e),
            InitError::NoAdapter(e) => Some(e),
            InitError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for InitError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        InitError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for InitError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        InitError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for InitError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        InitError::DeviceCreation(e)
    }
}

/// Errors while reading startup settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings JSON could not be parsed
    Parse(serde_json::Error),
    /// Settings parsed but a value is out of range
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
