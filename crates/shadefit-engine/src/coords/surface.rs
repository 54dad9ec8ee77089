/// Render target dimensions supplied per render call.
///
/// Width and height are device pixels. A zero dimension is legal (a surface
/// can be laid out at zero size during a transient layout pass) and disables
/// fit correction rather than failing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceState {
    pub physical_width: u32,
    pub physical_height: u32,
    pub pixel_ratio: f32,
}

impl SurfaceState {
    /// Creates a surface state, replacing a non-finite or non-positive
    /// `pixel_ratio` with `1.0`.
    pub fn new(physical_width: u32, physical_height: u32, pixel_ratio: f32) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            log::debug!("invalid pixel ratio {pixel_ratio}; using 1.0");
            1.0
        };
        Self {
            physical_width,
            physical_height,
            pixel_ratio,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.physical_width == 0 || self.physical_height == 0
    }

    /// Width / height, or `None` for a zero-size surface.
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.physical_width as f32 / self.physical_height as f32)
        }
    }

    /// Size in CSS/logical pixels.
    #[inline]
    pub fn logical_size(self) -> (f32, f32) {
        (
            self.physical_width as f32 / self.pixel_ratio,
            self.physical_height as f32 / self.pixel_ratio,
        )
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new(0, 0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pixel_ratio_falls_back_to_one() {
        assert_eq!(SurfaceState::new(10, 10, 0.0).pixel_ratio, 1.0);
        assert_eq!(SurfaceState::new(10, 10, -2.0).pixel_ratio, 1.0);
        assert_eq!(SurfaceState::new(10, 10, f32::NAN).pixel_ratio, 1.0);
        assert_eq!(SurfaceState::new(10, 10, 2.0).pixel_ratio, 2.0);
    }

    #[test]
    fn zero_size_has_no_aspect() {
        assert!(SurfaceState::new(0, 100, 1.0).aspect().is_none());
        assert!(SurfaceState::new(100, 0, 1.0).aspect().is_none());
        assert_eq!(SurfaceState::new(200, 100, 1.0).aspect(), Some(2.0));
    }

    #[test]
    fn logical_size_divides_by_pixel_ratio() {
        assert_eq!(SurfaceState::new(800, 600, 2.0).logical_size(), (400.0, 300.0));
    }
}
