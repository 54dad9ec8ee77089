//! Coordinate spaces shared by the resolver, uniforms and renderers.
//!
//! - Fragment UV: `[0, 1] x [0, 1]`, origin top-left, +X right, +Y down.
//! - Pattern-space UV: fragment UV after the sizing transform.
//! - Surface: the physical render target in device pixels.

mod surface;

pub use glam::Vec2;
pub use surface::SurfaceState;
