use anyhow::{Context, Result};
use serde::Deserialize;
use shadefit_engine::coords::SurfaceState;
use shadefit_engine::shader::{ShaderInstance, ShaderParams};
use shadefit_engine::sizing::{self, SizingConfig, Transform};

use crate::shaders::{Dots, Grid, ShaderKind};

/// On-disk scene description. Fields other than `shader` are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneFile {
    pub shader: ShaderKind,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f32,
    /// Falls back to the shader's own default sizing when absent.
    #[serde(default)]
    pub sizing: Option<SizingConfig>,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_pixel_ratio() -> f32 {
    1.0
}

impl SceneFile {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scene description")
    }
}

/// A scene's shader with its typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneShader {
    Grid(ShaderInstance<Grid>),
    Dots(ShaderInstance<Dots>),
}

impl SceneShader {
    pub fn name(&self) -> &'static str {
        match self {
            SceneShader::Grid(_) => Grid::NAME,
            SceneShader::Dots(_) => Dots::NAME,
        }
    }

    pub fn sizing(&self) -> &SizingConfig {
        match self {
            SceneShader::Grid(inst) => &inst.sizing,
            SceneShader::Dots(inst) => &inst.sizing,
        }
    }
}

/// Fully validated render request.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub surface: SurfaceState,
    pub shader: SceneShader,
}

impl Scene {
    pub fn from_file(file: SceneFile) -> Result<Self> {
        let shader = match file.shader {
            ShaderKind::Grid => SceneShader::Grid(instance(file.sizing, file.params)?),
            ShaderKind::Dots => SceneShader::Dots(instance(file.sizing, file.params)?),
        };
        Ok(Self {
            surface: SurfaceState::new(file.width, file.height, file.pixel_ratio),
            shader,
        })
    }

    pub fn transform(&self) -> Transform {
        sizing::resolve(self.surface, self.shader.sizing())
    }
}

fn instance<P>(sizing: Option<SizingConfig>, params: Option<serde_json::Value>) -> Result<ShaderInstance<P>>
where
    P: ShaderParams + serde::de::DeserializeOwned,
{
    let mut inst = ShaderInstance::<P>::new();
    if let Some(sizing) = sizing {
        inst.sizing = sizing;
    }
    if let Some(params) = params {
        inst.params = serde_json::from_value(params)
            .with_context(|| format!("invalid params for shader `{}`", P::NAME))?;
    }
    Ok(inst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadefit_engine::coords::Vec2;
    use shadefit_engine::sizing::FitMode;

    #[test]
    fn minimal_file_uses_shader_defaults() {
        let scene = Scene::from_file(SceneFile::from_json(r#"{ "shader": "dots" }"#).unwrap()).unwrap();
        assert_eq!(scene.surface, SurfaceState::new(800, 600, 1.0));
        assert_eq!(scene.shader, SceneShader::Dots(ShaderInstance::new()));
        assert_eq!(scene.shader.sizing().fit(), FitMode::Contain);
    }

    #[test]
    fn sizing_and_params_are_applied() {
        let json = r#"{
            "shader": "grid",
            "width": 400, "height": 400, "pixelRatio": 2,
            "sizing": { "scale": 2, "rotation": 90 },
            "params": { "cells": 4 }
        }"#;
        let scene = Scene::from_file(SceneFile::from_json(json).unwrap()).unwrap();
        let SceneShader::Grid(inst) = &scene.shader else { panic!("expected grid") };
        assert_eq!(inst.params.cells, 4.0);
        assert_eq!(inst.sizing.scale(), 2.0);
        assert_eq!(scene.surface.pixel_ratio, 2.0);

        let p = scene.transform().apply(Vec2::new(1.0, 0.5));
        assert!(p.abs_diff_eq(Vec2::new(0.5, 0.75), 1e-5), "{p}");
    }

    #[test]
    fn invalid_sizing_is_rejected() {
        let json = r#"{ "shader": "grid", "sizing": { "fit": "stretch" } }"#;
        assert!(SceneFile::from_json(json).is_err());
    }

    #[test]
    fn params_for_wrong_shader_are_rejected() {
        let json = r#"{ "shader": "grid", "params": { "radius": 0.2 } }"#;
        let err = Scene::from_file(SceneFile::from_json(json).unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("`grid`"));
    }

    #[test]
    fn unknown_top_level_field_is_rejected() {
        assert!(SceneFile::from_json(r#"{ "shader": "grid", "colour": 1 }"#).is_err());
    }
}
