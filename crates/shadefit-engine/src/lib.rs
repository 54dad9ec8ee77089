//! Shadefit engine crate.
//!
//! Owns the sizing/fit resolver, the GPU uniform layout and GLSL snippet that
//! mirror it, and the headless wgpu pieces used to render sized shaders.

pub mod coords;
pub mod sizing;
pub mod shader;

pub mod device;
pub mod render;
pub mod logging;
