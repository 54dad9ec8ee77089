//! GPU rendering subsystem.
//!
//! Convention:
//! - One full-screen triangle per pass; the vertex stage emits fragment UV.
//! - Bind group 0 holds the sizing block (binding 0) and the shader's
//!   parameter block (binding 1).

mod ctx;
mod pass;

pub use ctx::{RenderCtx, RenderTarget};
pub use pass::ShaderPass;
