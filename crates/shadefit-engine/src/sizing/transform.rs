use glam::{Affine2, Vec2};

/// Affine map from fragment UV to pattern-space UV.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform(Affine2);

impl Transform {
    pub const IDENTITY: Transform = Transform(Affine2::IDENTITY);

    #[inline]
    pub fn from_affine(affine: Affine2) -> Self {
        Self(affine)
    }

    #[inline]
    pub fn affine(self) -> Affine2 {
        self.0
    }

    /// Maps a fragment UV into pattern space.
    #[inline]
    pub fn apply(self, uv: Vec2) -> Vec2 {
        self.0.transform_point2(uv)
    }

    /// `self` followed by `next`.
    #[inline]
    pub fn then(self, next: Transform) -> Transform {
        Transform(next.0 * self.0)
    }

    /// Returns `None` when the linear part is singular.
    pub fn inverse(self) -> Option<Transform> {
        let det = self.0.matrix2.determinant();
        if det.abs() <= f32::EPSILON || !det.is_finite() {
            return None;
        }
        Some(Transform(self.0.inverse()))
    }

    #[inline]
    pub fn approx_eq(self, other: Transform, max_abs_diff: f32) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }

    /// Column-major `[m00, m01, m10, m11, tx, ty]`.
    #[inline]
    pub fn to_cols_array(self) -> [f32; 6] {
        self.0.to_cols_array()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
