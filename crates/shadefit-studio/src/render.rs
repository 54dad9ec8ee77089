use anyhow::{Context, Result};
use shadefit_engine::device::{GpuInit, OffscreenGpu, OffscreenTarget};
use shadefit_engine::render::{RenderCtx, RenderTarget, ShaderPass};
use shadefit_engine::shader::{ShaderInstance, ShaderParams};

use crate::scene::{Scene, SceneShader};

/// Renders `scene` offscreen and returns tightly packed RGBA8 pixels.
pub fn render_scene(scene: &Scene, init: GpuInit) -> Result<Vec<u8>> {
    let gpu = pollster::block_on(OffscreenGpu::new(init))?;
    let target = OffscreenTarget::new(&gpu, scene.surface)?;

    match &scene.shader {
        SceneShader::Grid(inst) => draw(&gpu, &target, inst)?,
        SceneShader::Dots(inst) => draw(&gpu, &target, inst)?,
    }

    target.read_rgba(&gpu)
}

fn draw<P: ShaderParams>(
    gpu: &OffscreenGpu,
    target: &OffscreenTarget,
    inst: &ShaderInstance<P>,
) -> Result<()> {
    let mut pass = ShaderPass::<P>::new()
        .with_context(|| format!("failed to build shader `{}`", P::NAME))?;

    let ctx = RenderCtx::offscreen(gpu, target);
    let mut encoder = gpu.create_encoder();
    {
        let mut rt = RenderTarget::new(&mut encoder, target.view());
        pass.render(&ctx, &mut rt, &inst.uniforms(target.surface()));
    }
    gpu.submit(encoder);

    log::debug!("rendered `{}`", pass.name());
    Ok(())
}
