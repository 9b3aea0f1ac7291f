use std::fmt;

use egui_wgpu::wgpu;
use winit::error::{EventLoopError, OsError};

/// Why the window host could not start or keep running.
#[derive(Debug)]
pub enum PlatformError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(wgpu::CreateSurfaceError),
    Adapter(wgpu::RequestAdapterError),
    Device(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    NoSurfaceFormat,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::EventLoop(e) => write!(f, "event loop: {e}"),
            PlatformError::Window(e) => write!(f, "create window: {e}"),
            PlatformError::Surface(e) => write!(f, "create surface: {e}"),
            PlatformError::Adapter(e) => write!(f, "no suitable adapter: {e}"),
            PlatformError::Device(e) => write!(f, "request device: {e}"),
            PlatformError::NoSurfaceFormat => write!(f, "surface has no supported format"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::EventLoop(e) => Some(e),
            PlatformError::Window(e) => Some(e),
            PlatformError::Surface(e) => Some(e),
            PlatformError::Adapter(e) => Some(e),
            PlatformError::Device(e) => Some(e),
            PlatformError::NoSurfaceFormat => None,
        }
    }
}

impl From<EventLoopError> for PlatformError {
    fn from(e: EventLoopError) -> Self {
        PlatformError::EventLoop(e)
    }
}

impl From<OsError> for PlatformError {
    fn from(e: OsError) -> Self {
        PlatformError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for PlatformError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        PlatformError::Surface(e)
    }
}

impl From<wgpu::RequestAdapterError> for PlatformError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        PlatformError::Adapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for PlatformError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        PlatformError::Device(e)
    }
}
