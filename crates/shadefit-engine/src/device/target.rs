use anyhow::{Context, Result};

use crate::coords::SurfaceState;

use super::OffscreenGpu;

/// Default target format; PNG output expects RGBA8.
const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Offscreen color target that can be read back as RGBA8 rows.
pub struct OffscreenTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    surface: SurfaceState,
}

impl OffscreenTarget {
    pub fn new(gpu: &OffscreenGpu, surface: SurfaceState) -> Result<Self> {
        Self::with_format(gpu, surface, FORMAT)
    }

    /// Target in another 4-byte-per-texel color format, such as linear
    /// `Rgba8Unorm` when the raw shader output is needed.
    pub fn with_format(
        gpu: &OffscreenGpu,
        surface: SurfaceState,
        format: wgpu::TextureFormat,
    ) -> Result<Self> {
        anyhow::ensure!(!surface.is_empty(), "offscreen target has zero size");
        anyhow::ensure!(
            format.block_copy_size(None) == Some(4),
            "offscreen target format {format:?} is not 4 bytes per texel"
        );

        let texture = gpu.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("shadefit offscreen target"),
            size: extent(surface),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self {
            texture,
            view,
            format,
            surface,
        })
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn surface(&self) -> SurfaceState {
        self.surface
    }

    /// Copies the texture to the CPU as tightly packed 4-byte texel rows.
    ///
    /// Blocks until the GPU finishes all submitted work.
    pub fn read_rgba(&self, gpu: &OffscreenGpu) -> Result<Vec<u8>> {
        let width = self.surface.physical_width;
        let height = self.surface.physical_height;
        let unpadded = width as usize * 4;
        let padded = padded_bytes_per_row(width);

        let buffer = gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("shadefit readback"),
            size: padded as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = gpu.create_encoder();
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded as u32),
                    rows_per_image: Some(height),
                },
            },
            extent(self.surface),
        );
        gpu.submit(encoder);

        let slice = buffer.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        gpu.device()
            .poll(wgpu::PollType::wait_indefinitely())
            .context("failed to wait for readback")?;
        rx.recv()
            .context("readback callback dropped")?
            .context("failed to map readback buffer")?;

        let mapped = slice.get_mapped_range();
        let pixels = strip_row_padding(&mapped, unpadded, padded, height as usize);
        drop(mapped);
        buffer.unmap();

        Ok(pixels)
    }
}

fn extent(surface: SurfaceState) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: surface.physical_width,
        height: surface.physical_height,
        depth_or_array_layers: 1,
    }
}

/// Rows in a texture-to-buffer copy must be `COPY_BYTES_PER_ROW_ALIGNMENT` aligned.
fn padded_bytes_per_row(width: u32) -> usize {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT as usize;
    (width as usize * 4).div_ceil(align) * align
}

fn strip_row_padding(data: &[u8], unpadded: usize, padded: usize, rows: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(unpadded * rows);
    for row in data.chunks(padded).take(rows) {
        out.extend_from_slice(&row[..unpadded]);
    }
    out
}
