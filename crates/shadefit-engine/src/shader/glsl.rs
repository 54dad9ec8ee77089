/// Bind group 0 slot of the `SizingUniforms` block.
pub const SIZING_BINDING: u32 = 0;

/// Bind group 0 slot reserved for each shader's own parameter block.
pub const PARAMS_BINDING: u32 = 1;

/// Sizing uniform block plus `sizing_fit_scale()` and `sizing_uv(uv)`.
///
/// Must stay operation-for-operation in step with `sizing::resolve` and with
/// the field order of `SizingUniform`.
pub const SIZING_GLSL: &str = r#"
layout(set = 0, binding = 0) uniform SizingUniforms {
    vec2 u_resolution;
    vec2 u_world_size;
    vec2 u_origin;
    vec2 u_offset;
    float u_scale;
    float u_rotation;
    float u_pixel_ratio;
    int u_fit;
};

const float SIZING_MIN_SCALE = 0.0001;
const float SIZING_DEG_TO_RAD = 0.017453292519943295;

// fill = 0, contain = 1, cover = 2
vec2 sizing_fit_scale() {
    bool has_world = u_world_size.x > 0.0 && u_world_size.y > 0.0;
    bool has_surface = u_resolution.x > 0.0 && u_resolution.y > 0.0;
    if (!has_world || !has_surface) {
        return vec2(1.0);
    }

    float physical_aspect = u_resolution.x / u_resolution.y;
    float world_aspect = u_world_size.x / u_world_size.y;
    vec2 ratio = vec2(physical_aspect / world_aspect, world_aspect / physical_aspect);

    if (u_fit == 1) {
        return max(ratio, vec2(1.0));
    }
    if (u_fit == 2) {
        return min(ratio, vec2(1.0));
    }
    return vec2(1.0);
}

// Fragment UV (top-left origin) to pattern-space UV.
vec2 sizing_uv(vec2 uv) {
    vec2 p = uv - u_origin;
    p *= sizing_fit_scale();
    float scale = max(u_scale, SIZING_MIN_SCALE);
    p /= scale;

    float angle = u_rotation * SIZING_DEG_TO_RAD;
    float c = cos(angle);
    float s = sin(angle);
    p = mat2(c, s, -s, c) * p;

    p += u_offset / scale;
    return p + u_origin;
}
"#;
