use bytemuck::{Pod, Zeroable};
use serde::Deserialize;
use shadefit_engine::shader::ShaderParams;
use shadefit_engine::sizing::SizingConfig;

/// Dot lattice clipped to the world rectangle. Uses object sizing, so
/// letterboxed areas show the background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Dots {
    pub color_back: [f32; 4],
    pub color_dot: [f32; 4],
    pub cells: f32,
    /// Dot radius as a fraction of a cell.
    pub radius: f32,
}

impl Default for Dots {
    fn default() -> Self {
        Self {
            color_back: [0.96, 0.94, 0.9, 1.0],
            color_dot: [0.9, 0.25, 0.2, 1.0],
            cells: 6.0,
            radius: 0.3,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct DotsUniform {
    pub color_back: [f32; 4],
    pub color_dot: [f32; 4],
    pub cells: f32,
    pub radius: f32,
    pub _pad: [f32; 2],
}

impl ShaderParams for Dots {
    type Uniforms = DotsUniform;

    const NAME: &'static str = "dots";
    const FRAGMENT: &'static str = r#"
layout(set = 0, binding = 1) uniform DotsParams {
    vec4 u_color_back;
    vec4 u_color_dot;
    float u_cells;
    float u_radius;
};

vec4 pattern(vec2 uv) {
    vec2 inside = step(vec2(0.0), uv) * step(uv, vec2(1.0));
    vec2 cell = fract(uv * u_cells) - 0.5;
    float d = length(cell);
    float dot_mask = 1.0 - smoothstep(u_radius - 0.02, u_radius + 0.02, d);
    return mix(u_color_back, u_color_dot, dot_mask * inside.x * inside.y);
}
"#;

    fn default_sizing() -> SizingConfig {
        SizingConfig::object()
    }

    fn to_uniforms(&self) -> DotsUniform {
        let Self {
            color_back,
            color_dot,
            cells,
            radius,
        } = *self;
        DotsUniform {
            color_back,
            color_dot,
            cells,
            radius,
            _pad: [0.0; 2],
        }
    }
}
