use super::checked_create;
use super::error::GpuError;

/// Depth-stencil format: 24-bit depth + 8-bit stencil.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24PlusStencil8;

/// Per-frame attachment targets that persist across frames.
///
/// The color target view is derived from the acquired swapchain texture each
/// frame; only the depth-stencil pair lives here. Dimensions are taken from
/// the surface configuration at creation and never change — resizing is
/// unsupported.
///
/// The view is declared before the texture so drop releases it first.
pub struct FrameTargets {
    depth_view: wgpu::TextureView,
    depth_texture: wgpu::Texture,
}

impl FrameTargets {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> Result<Self, GpuError> {
        let (depth_texture, depth_view) = checked_create(device, || {
            let texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("tumbler depth buffer"),
                size: wgpu::Extent3d {
                    width: config.width,
                    height: config.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            (texture, view)
        })
        .map_err(GpuError::DepthBuffer)?;

        log::debug!(
            "depth buffer: {}x{} {:?}",
            config.width,
            config.height,
            DEPTH_FORMAT
        );

        Ok(Self {
            depth_view,
            depth_texture,
        })
    }

    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Depth buffer dimensions in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.depth_texture.width(), self.depth_texture.height())
    }
}
