use bytemuck::Pod;

use crate::coords::SurfaceState;
use crate::sizing::{self, SizingConfig, Transform};

use super::{ShaderProgram, SizingUniform};

/// Strongly-typed parameter set for one shader.
///
/// `to_uniforms` is the exhaustive mapping from parameters to the shader's
/// declared parameter block; implementations destructure `self` so that an
/// unmapped field fails to compile.
pub trait ShaderParams: Clone + Default {
    /// GPU layout of the body's `binding = 1` block, padded to its std140 size.
    type Uniforms: Pod;

    const NAME: &'static str;

    /// Fragment body defining `vec4 pattern(vec2 uv)`.
    const FRAGMENT: &'static str;

    fn default_sizing() -> SizingConfig {
        SizingConfig::pattern()
    }

    fn to_uniforms(&self) -> Self::Uniforms;

    fn program() -> ShaderProgram {
        ShaderProgram::fragment(Self::NAME, Self::FRAGMENT)
    }
}

/// Both uniform blocks for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameUniforms<U> {
    pub sizing: SizingUniform,
    pub params: U,
}

/// Live parameters of one shader instance.
///
/// Owned by the caller; there is no shared parameter store. [`reset`](Self::reset)
/// restores the shader's declared defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderInstance<P: ShaderParams> {
    pub params: P,
    pub sizing: SizingConfig,
}

impl<P: ShaderParams> ShaderInstance<P> {
    pub fn new() -> Self {
        Self {
            params: P::default(),
            sizing: P::default_sizing(),
        }
    }

    pub fn with(params: P, sizing: SizingConfig) -> Self {
        Self { params, sizing }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn transform(&self, surface: SurfaceState) -> Transform {
        sizing::resolve(surface, &self.sizing)
    }

    pub fn uniforms(&self, surface: SurfaceState) -> FrameUniforms<P::Uniforms> {
        FrameUniforms {
            sizing: SizingUniform::new(surface, &self.sizing),
            params: self.params.to_uniforms(),
        }
    }
}

impl<P: ShaderParams> Default for ShaderInstance<P> {
    fn default() -> Self {
        Self::new()
    }
}
