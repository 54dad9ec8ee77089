use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shadefit_engine::sizing::{FitMode, SizingConfig};

use crate::presets;
use crate::scene::{Scene, SceneFile, SceneShader};

/// Render sized demo shaders headlessly.
///
/// Precedence: flags override the scene file, which replaces the preset.
#[derive(Parser, Debug)]
#[command(name = "shadefit-studio", version)]
pub struct Cli {
    /// Preset to start from (see --list-presets).
    #[arg(long, default_value = "grid")]
    pub preset: String,

    /// JSON scene file used instead of the preset.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// List presets and exit.
    #[arg(long)]
    pub list_presets: bool,

    /// Print the resolved transform instead of rendering.
    #[arg(long)]
    pub print: bool,

    /// Output PNG path.
    #[arg(long, short, default_value = "shadefit.png")]
    pub out: PathBuf,

    /// Surface width in device pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in device pixels.
    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long)]
    pub pixel_ratio: Option<f32>,

    /// fill, contain or cover.
    #[arg(long)]
    pub fit: Option<FitMode>,

    #[arg(long, allow_negative_numbers = true)]
    pub scale: Option<f32>,

    /// Degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub rotation: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    pub origin_x: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    pub origin_y: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    pub offset_x: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    pub offset_y: Option<f32>,

    /// World width; 0 means unset.
    #[arg(long)]
    pub world_width: Option<f32>,

    /// World height; 0 means unset.
    #[arg(long)]
    pub world_height: Option<f32>,

    /// Log filter in env_logger syntax (defaults to RUST_LOG, then info).
    #[arg(long)]
    pub log: Option<String>,

    /// Allow a software adapter.
    #[arg(long)]
    pub fallback_adapter: bool,
}

impl Cli {
    /// Loads the scene file or preset and applies flag overrides.
    pub fn scene(&self) -> Result<Scene> {
        let mut file = match &self.scene {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read scene file: {}", path.display()))?;
                SceneFile::from_json(&json)
                    .with_context(|| format!("scene file: {}", path.display()))?
            }
            None => presets::load(&self.preset)?,
        };

        if let Some(w) = self.width {
            file.width = w;
        }
        if let Some(h) = self.height {
            file.height = h;
        }
        if let Some(r) = self.pixel_ratio {
            file.pixel_ratio = r;
        }

        let mut scene = Scene::from_file(file)?;
        let sizing = self.override_sizing(*scene.shader.sizing())?;
        match &mut scene.shader {
            SceneShader::Grid(inst) => inst.sizing = sizing,
            SceneShader::Dots(inst) => inst.sizing = sizing,
        }
        Ok(scene)
    }

    fn override_sizing(&self, base: SizingConfig) -> Result<SizingConfig> {
        let mut b = base.to_builder();
        if let Some(fit) = self.fit {
            b = b.fit(fit);
        }
        if let Some(scale) = self.scale {
            b = b.scale(scale);
        }
        if let Some(rotation) = self.rotation {
            b = b.rotation(rotation);
        }
        let origin = base.origin();
        b = b.origin(
            self.origin_x.unwrap_or(origin.x),
            self.origin_y.unwrap_or(origin.y),
        );
        let offset = base.offset();
        b = b.offset(
            self.offset_x.unwrap_or(offset.x),
            self.offset_y.unwrap_or(offset.y),
        );
        let world = base.world_size();
        b = b.world_size(
            self.world_width.unwrap_or(world.x),
            self.world_height.unwrap_or(world.y),
        );
        b.build().context("invalid sizing flags")
    }
}
