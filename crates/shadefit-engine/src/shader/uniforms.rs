use bytemuck::{Pod, Zeroable};

use crate::coords::SurfaceState;
use crate::sizing::SizingConfig;

/// GPU layout of `SizingUniforms` (std140, 48 bytes).
///
/// Field order and types must match the block in `SIZING_GLSL`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SizingUniform {
    pub resolution: [f32; 2],  // offset 0
    pub world_size: [f32; 2],  // offset 8
    pub origin: [f32; 2],      // offset 16
    pub offset: [f32; 2],      // offset 24
    pub scale: f32,            // offset 32
    pub rotation: f32,         // offset 36, degrees
    pub pixel_ratio: f32,      // offset 40
    pub fit: i32,              // offset 44
}

impl SizingUniform {
    pub fn new(surface: SurfaceState, config: &SizingConfig) -> Self {
        Self {
            resolution: [surface.physical_width as f32, surface.physical_height as f32],
            world_size: config.world_size().to_array(),
            origin: config.origin().to_array(),
            offset: config.offset().to_array(),
            scale: config.scale(),
            rotation: config.rotation(),
            pixel_ratio: surface.pixel_ratio,
            fit: config.fit().code(),
        }
    }

    /// Returns the `wgpu` minimum binding size for this block.
    ///
    /// Centralised so pipeline creation sites don't each unwrap.
    pub fn min_binding_size() -> std::num::NonZeroU64 {
        std::num::NonZeroU64::new(std::mem::size_of::<Self>() as u64)
            .expect("SizingUniform has non-zero size by construction")
    }
}

const _: () = assert!(std::mem::size_of::<SizingUniform>() == 48);
