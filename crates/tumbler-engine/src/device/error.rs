use thiserror::Error;

/// Failures of the device/swapchain bring-up chain.
///
/// One variant per bring-up step; the chain short-circuits on the first
/// failure. Adapter lookup and swapchain creation are distinct fault domains
/// even though both involve the surface.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create presentation surface: {0}")]
    SwapchainCreation(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter: {0}")]
    AdapterLookup(#[from] wgpu::RequestAdapterError),

    #[error("device creation failed: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    #[error("presentation surface reports no color formats")]
    SwapchainFormat,

    #[error("depth-stencil buffer creation failed: {0}")]
    DepthBuffer(wgpu::Error),
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}
