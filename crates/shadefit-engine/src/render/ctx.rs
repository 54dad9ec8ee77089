use crate::coords::SurfaceState;
use crate::device::{OffscreenGpu, OffscreenTarget};

/// What a pass needs to build its pipeline and size its uniforms.
///
/// `surface` is the target's extent; passes skip drawing when it is empty.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub surface: SurfaceState,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        surface: SurfaceState,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            surface,
        }
    }

    /// Context for drawing into an offscreen target.
    pub fn offscreen(gpu: &'a OffscreenGpu, target: &OffscreenTarget) -> Self {
        Self::new(gpu.device(), gpu.queue(), target.format(), target.surface())
    }
}

/// One frame's encoder and the color view passes clear and draw into.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
