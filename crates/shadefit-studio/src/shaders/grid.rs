use bytemuck::{Pod, Zeroable};
use serde::Deserialize;
use shadefit_engine::shader::ShaderParams;

/// Repeating line grid. Uses pattern sizing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Grid {
    pub color_back: [f32; 4],
    pub color_line: [f32; 4],
    /// Cells per pattern-space unit.
    pub cells: f32,
    /// Line width as a fraction of a cell.
    pub line_width: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            color_back: [0.04, 0.05, 0.08, 1.0],
            color_line: [0.35, 0.8, 1.0, 1.0],
            cells: 8.0,
            line_width: 0.06,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GridUniform {
    pub color_back: [f32; 4],
    pub color_line: [f32; 4],
    pub cells: f32,
    pub line_width: f32,
    pub _pad: [f32; 2],
}

impl ShaderParams for Grid {
    type Uniforms = GridUniform;

    const NAME: &'static str = "grid";
    const FRAGMENT: &'static str = r#"
layout(set = 0, binding = 1) uniform GridParams {
    vec4 u_color_back;
    vec4 u_color_line;
    float u_cells;
    float u_line_width;
};

vec4 pattern(vec2 uv) {
    vec2 cell = fract(uv * u_cells);
    vec2 edge = min(cell, 1.0 - cell);
    float line = 1.0 - step(u_line_width * 0.5, min(edge.x, edge.y));
    return mix(u_color_back, u_color_line, line);
}
"#;

    fn to_uniforms(&self) -> GridUniform {
        let Self {
            color_back,
            color_line,
            cells,
            line_width,
        } = *self;
        GridUniform {
            color_back,
            color_line,
            cells,
            line_width,
            _pad: [0.0; 2],
        }
    }
}
