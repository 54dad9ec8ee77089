use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SizingError;

/// Policy for reconciling world and surface aspect ratios.
///
/// The discriminants are the integer codes shaders see in `u_fit`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum FitMode {
    /// Stretch to the surface; no aspect correction.
    #[default]
    Fill = 0,
    /// Whole world visible, letterboxed on the mismatched axis.
    Contain = 1,
    /// Surface fully covered, overflow cropped.
    Cover = 2,
}

impl FitMode {
    pub const ALL: [FitMode; 3] = [FitMode::Fill, FitMode::Contain, FitMode::Cover];

    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FitMode::Fill => "fill",
            FitMode::Contain => "contain",
            FitMode::Cover => "cover",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitMode {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FitMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SizingError::UnknownFit(s.to_string()))
    }
}

impl TryFrom<i32> for FitMode {
    type Error = SizingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        FitMode::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or(SizingError::UnknownFitCode(code))
    }
}
