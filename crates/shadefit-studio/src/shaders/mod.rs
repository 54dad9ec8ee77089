//! Demo shaders consuming the shared sizing snippet.

mod dots;
mod grid;

pub use dots::Dots;
pub use grid::Grid;

use serde::Deserialize;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderKind {
    Grid,
    Dots,
}
