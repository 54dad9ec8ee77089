//! Headless GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue without a window
//! - allocating offscreen color targets
//! - reading rendered pixels back to the CPU

mod gpu;
mod target;

pub use gpu::{GpuInit, OffscreenGpu};
pub use target::OffscreenTarget;
