use std::marker::PhantomData;

use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{FrameUniforms, ShaderError, ShaderParams, SizingUniform, PARAMS_BINDING, SIZING_BINDING};

/// Uniform buffers are allocated at least this large so a shader without a
/// parameter block still gets a valid binding.
const MIN_PARAMS_SIZE: u64 = 16;

/// Full-screen pass for one sized shader `P`.
///
/// The WGSL is produced once at construction; the pipeline is built lazily
/// and rebuilt if the target format changes. The parameter buffer is sized
/// from `P::Uniforms`, which is the only params type `render` accepts.
pub struct ShaderPass<P: ShaderParams> {
    wgsl: String,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    sizing_ubo: Option<wgpu::Buffer>,
    params_ubo: Option<wgpu::Buffer>,

    _params: PhantomData<fn() -> P>,
}

impl<P: ShaderParams> ShaderPass<P> {
    const PARAMS_SIZE: u64 = {
        let size = std::mem::size_of::<P::Uniforms>() as u64;
        if size > MIN_PARAMS_SIZE { size } else { MIN_PARAMS_SIZE }
    };

    pub fn new() -> Result<Self, ShaderError> {
        let wgsl = P::program().to_wgsl()?;

        Ok(Self {
            wgsl,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            sizing_ubo: None,
            params_ubo: None,
            _params: PhantomData,
        })
    }

    pub fn name(&self) -> &'static str {
        P::NAME
    }

    /// Draws the shader over the whole of `target`, clearing it first.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        uniforms: &FrameUniforms<P::Uniforms>,
    ) {
        if ctx.surface.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        let Some(sizing_ubo) = self.sizing_ubo.as_ref() else { return };
        let Some(params_ubo) = self.params_ubo.as_ref() else { return };
        ctx.queue
            .write_buffer(sizing_ubo, 0, bytemuck::bytes_of(&uniforms.sizing));
        ctx.queue
            .write_buffer(params_ubo, 0, bytemuck::bytes_of(&uniforms.params));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("shadefit shader pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }
        log::debug!("ShaderPass `{}`: building pipeline for {:?}", P::NAME, ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(P::NAME),
            source: wgpu::ShaderSource::Wgsl(self.wgsl.as_str().into()),
        });

        let uniform_entry = |binding: u32, size: std::num::NonZeroU64| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(size),
            },
            count: None,
        };

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("shadefit shader bgl"),
                    entries: &[
                        uniform_entry(SIZING_BINDING, SizingUniform::min_binding_size()),
                        uniform_entry(PARAMS_BINDING, self.params_binding_size()),
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("shadefit shader pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shadefit shader pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.sizing_ubo = None;
        self.params_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.sizing_ubo.is_some() && self.params_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_buffer = |label: &'static str, size: u64| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let sizing_ubo = uniform_buffer(
            "shadefit sizing ubo",
            std::mem::size_of::<SizingUniform>() as u64,
        );
        let params_ubo = uniform_buffer("shadefit params ubo", Self::PARAMS_SIZE);

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shadefit shader bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: SIZING_BINDING,
                    resource: sizing_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: PARAMS_BINDING,
                    resource: params_ubo.as_entire_binding(),
                },
            ],
        });

        self.sizing_ubo = Some(sizing_ubo);
        self.params_ubo = Some(params_ubo);
        self.bind_group = Some(bind_group);
    }

    fn params_binding_size(&self) -> std::num::NonZeroU64 {
        std::num::NonZeroU64::new(Self::PARAMS_SIZE)
            .expect("params_size is at least MIN_PARAMS_SIZE")
    }
}
