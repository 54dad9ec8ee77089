use anyhow::{Context, Result};
use clap::Parser;
use shadefit_engine::coords::Vec2;
use shadefit_engine::device::GpuInit;
use shadefit_engine::logging::{init_logging, LoggingConfig};
use shadefit_engine::sizing;

mod cli;
mod presets;
mod render;
mod scene;
mod shaders;

use cli::Cli;
use scene::Scene;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..Default::default()
    });

    if cli.list_presets {
        for p in presets::PRESETS {
            println!("  {:<14} {}", p.name, p.description);
        }
        return Ok(());
    }

    let scene = cli.scene()?;

    if cli.print {
        print_report(&scene);
        return Ok(());
    }

    let init = GpuInit {
        force_fallback_adapter: cli.fallback_adapter,
        ..Default::default()
    };
    let pixels = render::render_scene(&scene, init)?;

    let (w, h) = (scene.surface.physical_width, scene.surface.physical_height);
    let image = image::RgbaImage::from_raw(w, h, pixels)
        .context("readback size does not match the surface")?;
    image
        .save(&cli.out)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;

    log::info!("wrote {}x{} `{}` to {}", w, h, scene.shader.name(), cli.out.display());
    Ok(())
}

fn print_report(scene: &Scene) {
    let sizing = scene.shader.sizing();
    let surface = scene.surface;
    let t = scene.transform();

    println!("shader     {}", scene.shader.name());
    println!(
        "surface    {}x{} @{}",
        surface.physical_width, surface.physical_height, surface.pixel_ratio
    );
    println!(
        "sizing     fit={} scale={} rotation={} origin={} offset={} world={}",
        sizing.fit(),
        sizing.scale(),
        sizing.rotation(),
        sizing.origin(),
        sizing.offset(),
        sizing.world_size()
    );
    println!("fit scale  {}", sizing::fit_scale(surface, sizing));
    println!("transform  {:?}", t.to_cols_array());

    for (label, uv) in [
        ("top-left", Vec2::new(0.0, 0.0)),
        ("top-right", Vec2::new(1.0, 0.0)),
        ("bottom-left", Vec2::new(0.0, 1.0)),
        ("bottom-right", Vec2::new(1.0, 1.0)),
        ("centre", Vec2::new(0.5, 0.5)),
    ] {
        println!("  {label:<13} {uv} -> {}", t.apply(uv));
    }
}
