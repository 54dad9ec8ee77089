//! Sizing/fit resolver.
//!
//! Maps fragment UV on a physical surface into pattern-space UV given a
//! [`SizingConfig`]. The composition order is fixed:
//! origin-center, fit-correct, scale, rotate, offset, origin-restore.

mod config;
mod error;
mod fit;
mod resolve;
mod transform;

pub use config::{SizingConfig, SizingConfigBuilder, MIN_SCALE};
pub use error::SizingError;
pub use fit::FitMode;
pub use resolve::{fit_scale, resolve};
pub use transform::Transform;
