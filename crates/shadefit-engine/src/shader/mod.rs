//! Shader-side mirror of the sizing resolver.
//!
//! - [`SizingUniform`]: std140 layout of the sizing inputs (binding 0).
//! - [`SIZING_GLSL`]: the single GLSL implementation of the resolver.
//! - [`ShaderProgram`]: wraps a shader body with the snippet and emits WGSL.
//! - [`ShaderParams`]/[`ShaderInstance`]: typed per-shader parameters (binding 1).

mod error;
mod glsl;
mod params;
mod program;
mod uniforms;

pub use error::ShaderError;
pub use glsl::{PARAMS_BINDING, SIZING_BINDING, SIZING_GLSL};
pub use params::{FrameUniforms, ShaderInstance, ShaderParams};
pub use program::ShaderProgram;
pub use uniforms::SizingUniform;
