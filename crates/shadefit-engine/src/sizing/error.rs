use thiserror::Error;

/// Rejected sizing configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("unknown fit mode `{0}` (expected `contain`, `cover` or `fill`)")]
    UnknownFit(String),
    #[error("unknown fit code {0} (expected 0, 1 or 2)")]
    UnknownFitCode(i32),
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("{field} must be zero (unset) or positive, got {value}")]
    NegativeWorldSize { field: &'static str, value: f32 },
}
