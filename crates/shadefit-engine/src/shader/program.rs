use naga::valid::{Capabilities, ModuleInfo, ValidationFlags, Validator};

use super::{ShaderError, SIZING_GLSL};

/// Full-screen triangle emitting top-left-origin UV at location 0.
const VERTEX_WGSL: &str = r#"struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOutput {
    var out: VertexOutput;
    let uv = vec2<f32>(f32((vertex_index << 1u) & 2u), f32(vertex_index & 2u));
    out.position = vec4<f32>(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0, 0.0, 1.0);
    out.uv = uv;
    return out;
}
"#;

/// A fragment shader body wrapped with the shared sizing snippet.
///
/// The body may declare a parameter block at `set = 0, binding = 1` and must
/// define `vec4 pattern(vec2 uv)`, which receives pattern-space UV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    name: String,
    body: String,
}

impl ShaderProgram {
    pub fn fragment(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assembled GLSL 450 fragment shader.
    pub fn glsl(&self) -> String {
        format!(
            r#"#version 450

// ============ sizing ============
{SIZING_GLSL}
layout(location = 0) in vec2 v_uv;
layout(location = 0) out vec4 out_color;

// ============ {name} ============
{body}

void main() {{
    out_color = pattern(sizing_uv(v_uv));
}}
"#,
            name = self.name,
            body = self.body,
        )
    }

    /// Parses and validates the assembled GLSL.
    pub fn compile(&self) -> Result<(naga::Module, ModuleInfo), ShaderError> {
        let source = self.glsl();

        let mut frontend = naga::front::glsl::Frontend::default();
        let options = naga::front::glsl::Options::from(naga::ShaderStage::Fragment);
        let module = frontend.parse(&options, &source).map_err(|errors| {
            let message: Vec<String> = errors
                .errors
                .iter()
                .map(|e| format!("  {:?}", e.kind))
                .collect();
            ShaderError::Parse {
                name: self.name.clone(),
                message: message.join("\n"),
            }
        })?;

        let info = Validator::new(ValidationFlags::all(), Capabilities::all())
            .validate(&module)
            .map_err(|e| ShaderError::Validation {
                name: self.name.clone(),
                message: format!("{:?}", e.into_inner()),
            })?;

        Ok((module, info))
    }

    /// WGSL module with `vs_main` and `fs_main` entry points.
    pub fn to_wgsl(&self) -> Result<String, ShaderError> {
        let (module, info) = self.compile()?;

        let fragment = naga::back::wgsl::write_string(
            &module,
            &info,
            naga::back::wgsl::WriterFlags::empty(),
        )
        .map_err(|e| ShaderError::Emit {
            name: self.name.clone(),
            message: e.to_string(),
        })?;
        let fragment = fragment.replace("fn main(", "fn fs_main(");

        log::debug!(
            "transpiled `{}`: {} bytes GLSL -> {} bytes WGSL",
            self.name,
            self.body.len(),
            fragment.len()
        );

        Ok(format!(
            "// generated from GLSL: {}\n\n{VERTEX_WGSL}\n{fragment}",
            self.name
        ))
    }
}
