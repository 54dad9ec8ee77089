use thiserror::Error;

/// Failure while turning a shader body into a pipeline-ready module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    #[error("GLSL parse error in `{name}`:\n{message}")]
    Parse { name: String, message: String },
    #[error("shader validation failed for `{name}`: {message}")]
    Validation { name: String, message: String },
    #[error("WGSL generation failed for `{name}`: {message}")]
    Emit { name: String, message: String },
}
