use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{FitMode, SizingError};

/// Smallest effective `scale`. Non-positive scales are clamped up to this.
pub const MIN_SCALE: f32 = 1e-4;

/// Validated sizing parameters for one shader instance.
///
/// Construct through [`SizingConfig::builder`] or serde; both run the same
/// validation, so every value of this type is finite and in range.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SizingConfigRepr", into = "SizingConfigRepr")]
pub struct SizingConfig {
    fit: FitMode,
    scale: f32,
    rotation: f32,
    origin: Vec2,
    offset: Vec2,
    world_size: Vec2,
}

impl SizingConfig {
    pub fn builder() -> SizingConfigBuilder {
        SizingConfigBuilder::default()
    }

    /// Builder seeded from this config, for editing a single field.
    pub fn to_builder(self) -> SizingConfigBuilder {
        SizingConfigBuilder {
            repr: self.into(),
        }
    }

    /// Identity sizing for repeating patterns.
    pub fn pattern() -> Self {
        Self {
            fit: FitMode::Fill,
            scale: 1.0,
            rotation: 0.0,
            origin: Vec2::splat(0.5),
            offset: Vec2::ZERO,
            world_size: Vec2::ZERO,
        }
    }

    /// Sizing for bounded objects: letterboxes once a world size is set.
    pub fn object() -> Self {
        Self {
            fit: FitMode::Contain,
            ..Self::pattern()
        }
    }

    #[inline]
    pub fn fit(&self) -> FitMode {
        self.fit
    }

    /// Zoom divisor, always `>= MIN_SCALE`.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Rotation in degrees.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// World width/height; zero components mean "unset".
    #[inline]
    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    #[inline]
    pub fn has_world_size(&self) -> bool {
        self.world_size.x > 0.0 && self.world_size.y > 0.0
    }
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self::pattern()
    }
}

/// Unvalidated field set, shared by the builder and serde.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct SizingConfigRepr {
    fit: FitMode,
    scale: f32,
    rotation: f32,
    origin_x: f32,
    origin_y: f32,
    offset_x: f32,
    offset_y: f32,
    world_width: f32,
    world_height: f32,
}

impl Default for SizingConfigRepr {
    fn default() -> Self {
        SizingConfig::pattern().into()
    }
}

impl From<SizingConfig> for SizingConfigRepr {
    fn from(c: SizingConfig) -> Self {
        Self {
            fit: c.fit,
            scale: c.scale,
            rotation: c.rotation,
            origin_x: c.origin.x,
            origin_y: c.origin.y,
            offset_x: c.offset.x,
            offset_y: c.offset.y,
            world_width: c.world_size.x,
            world_height: c.world_size.y,
        }
    }
}

impl TryFrom<SizingConfigRepr> for SizingConfig {
    type Error = SizingError;

    fn try_from(r: SizingConfigRepr) -> Result<Self, Self::Error> {
        let finite = |field: &'static str, value: f32| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(SizingError::NonFinite { field, value })
            }
        };
        let world = |field: &'static str, value: f32| {
            let value = finite(field, value)?;
            if value < 0.0 {
                Err(SizingError::NegativeWorldSize { field, value })
            } else {
                Ok(value)
            }
        };

        let mut scale = finite("scale", r.scale)?;
        let rotation = finite("rotation", r.rotation)?;
        let origin = Vec2::new(finite("originX", r.origin_x)?, finite("originY", r.origin_y)?);
        let offset = Vec2::new(finite("offsetX", r.offset_x)?, finite("offsetY", r.offset_y)?);
        let world_size = Vec2::new(
            world("worldWidth", r.world_width)?,
            world("worldHeight", r.world_height)?,
        );

        if scale < MIN_SCALE {
            log::debug!("scale {scale} clamped to {MIN_SCALE}");
            scale = MIN_SCALE;
        }

        let clamped_origin = origin.clamp(Vec2::ZERO, Vec2::ONE);
        if clamped_origin != origin {
            log::debug!("origin {origin} clamped to {clamped_origin}");
        }

        Ok(SizingConfig {
            fit: r.fit,
            scale,
            rotation,
            origin: clamped_origin,
            offset,
            world_size,
        })
    }
}

/// Accumulates sizing fields; [`build`](Self::build) validates them.
///
/// Starts from [`SizingConfig::pattern`].
#[derive(Debug, Clone, Default)]
pub struct SizingConfigBuilder {
    repr: SizingConfigRepr,
}

impl SizingConfigBuilder {
    pub fn fit(mut self, fit: FitMode) -> Self {
        self.repr.fit = fit;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.repr.scale = scale;
        self
    }

    /// Rotation in degrees.
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.repr.rotation = degrees;
        self
    }

    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.repr.origin_x = x;
        self.repr.origin_y = y;
        self
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.repr.offset_x = x;
        self.repr.offset_y = y;
        self
    }

    pub fn world_size(mut self, width: f32, height: f32) -> Self {
        self.repr.world_width = width;
        self.repr.world_height = height;
        self
    }

    pub fn build(self) -> Result<SizingConfig, SizingError> {
        SizingConfig::try_from(self.repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── presets ───────────────────────────────────────────────────────────

    #[test]
    fn builder_defaults_match_pattern_preset() {
        assert_eq!(SizingConfig::builder().build().unwrap(), SizingConfig::pattern());
        assert_eq!(SizingConfig::default(), SizingConfig::pattern());
    }

    #[test]
    fn object_preset_only_changes_fit() {
        let o = SizingConfig::object();
        assert_eq!(o.fit(), FitMode::Contain);
        assert_eq!(o.to_builder().fit(FitMode::Fill).build().unwrap(), SizingConfig::pattern());
        assert!(!o.has_world_size());
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_non_finite_fields() {
        let err = SizingConfig::builder().rotation(f32::INFINITY).build().unwrap_err();
        assert!(matches!(err, SizingError::NonFinite { field: "rotation", .. }));

        let err = SizingConfig::builder().offset(0.0, f32::NAN).build().unwrap_err();
        assert!(matches!(err, SizingError::NonFinite { field: "offsetY", .. }));

        let err = SizingConfig::builder().scale(f32::NEG_INFINITY).build().unwrap_err();
        assert!(matches!(err, SizingError::NonFinite { field: "scale", .. }));
    }

    #[test]
    fn rejects_negative_world_size() {
        let err = SizingConfig::builder().world_size(100.0, -1.0).build().unwrap_err();
        assert_eq!(
            err,
            SizingError::NegativeWorldSize { field: "worldHeight", value: -1.0 }
        );
    }

    #[test]
    fn non_positive_scale_is_clamped() {
        assert_eq!(SizingConfig::builder().scale(0.0).build().unwrap().scale(), MIN_SCALE);
        assert_eq!(SizingConfig::builder().scale(-3.0).build().unwrap().scale(), MIN_SCALE);
        assert_eq!(SizingConfig::builder().scale(2.5).build().unwrap().scale(), 2.5);
    }

    #[test]
    fn origin_is_clamped_to_unit_square() {
        let c = SizingConfig::builder().origin(-0.5, 1.5).build().unwrap();
        assert_eq!(c.origin(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn world_size_requires_both_axes() {
        let c = SizingConfig::builder().world_size(100.0, 0.0).build().unwrap();
        assert!(!c.has_world_size());
        let c = SizingConfig::builder().world_size(100.0, 50.0).build().unwrap();
        assert!(c.has_world_size());
    }

    // ── serde ─────────────────────────────────────────────────────────────

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let c: SizingConfig =
            serde_json::from_str(r#"{ "fit": "cover", "worldWidth": 800, "worldHeight": 400 }"#)
                .unwrap();
        assert_eq!(c.fit(), FitMode::Cover);
        assert_eq!(c.world_size(), Vec2::new(800.0, 400.0));
        assert_eq!(c.scale(), 1.0);
        assert_eq!(c.origin(), Vec2::splat(0.5));
    }

    #[test]
    fn deserialization_runs_validation() {
        assert!(serde_json::from_str::<SizingConfig>(r#"{ "fit": "stretch" }"#).is_err());
        assert!(serde_json::from_str::<SizingConfig>(r#"{ "worldWidth": -5 }"#).is_err());

        let c: SizingConfig = serde_json::from_str(r#"{ "scale": 0 }"#).unwrap();
        assert_eq!(c.scale(), MIN_SCALE);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = serde_json::from_str::<SizingConfig>(r#"{ "fitMode": "cover" }"#).unwrap_err();
        assert!(err.to_string().contains("fitMode"), "{err}");
        assert!(serde_json::from_str::<SizingConfig>(r#"{ "fit": "cover", "rotaton": 45 }"#).is_err());
    }

    #[test]
    fn serializes_back_to_the_same_config() {
        let c = SizingConfig::builder()
            .fit(FitMode::Contain)
            .rotation(30.0)
            .world_size(640.0, 480.0)
            .build()
            .unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"worldWidth\":640.0"));
        assert_eq!(serde_json::from_str::<SizingConfig>(&json).unwrap(), c);
    }
}
