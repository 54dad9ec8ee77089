use glam::{Affine2, Vec2};

use crate::coords::SurfaceState;

use super::{FitMode, SizingConfig, Transform, MIN_SCALE};

/// Per-axis aspect correction for `config.fit()` on `surface`.
///
/// Returns `(1, 1)` for `Fill`, when the world size is unset, or when the
/// surface has zero area.
pub fn fit_scale(surface: SurfaceState, config: &SizingConfig) -> Vec2 {
    if config.fit() == FitMode::Fill || !config.has_world_size() {
        return Vec2::ONE;
    }
    let Some(physical_aspect) = surface.aspect() else {
        return Vec2::ONE;
    };

    let world = config.world_size();
    let world_aspect = world.x / world.y;
    let ratio = Vec2::new(physical_aspect / world_aspect, world_aspect / physical_aspect);

    match config.fit() {
        FitMode::Contain => ratio.max(Vec2::ONE),
        FitMode::Cover => ratio.min(Vec2::ONE),
        FitMode::Fill => Vec2::ONE,
    }
}

/// Resolves the fragment-UV to pattern-space transform.
///
/// Steps compose in this exact order; presets depend on it:
/// `-origin`, `* fit_scale`, `/ scale`, `rotate`, `+ offset / scale`, `+origin`.
///
/// The offset shares the `/ scale` divisor, so its on-screen shift does not
/// change with `scale`.
pub fn resolve(surface: SurfaceState, config: &SizingConfig) -> Transform {
    let origin = config.origin();
    let scale = config.scale().max(MIN_SCALE);
    let angle = config.rotation().to_radians();

    let steps = [
        Affine2::from_translation(-origin),
        Affine2::from_scale(fit_scale(surface, config)),
        Affine2::from_scale(Vec2::splat(1.0 / scale)),
        Affine2::from_angle(angle),
        Affine2::from_translation(config.offset() / scale),
        Affine2::from_translation(origin),
    ];

    let transform = steps
        .into_iter()
        .map(Transform::from_affine)
        .fold(Transform::IDENTITY, Transform::then);

    log::trace!(
        "resolved {}x{} fit={} -> {:?}",
        surface.physical_width,
        surface.physical_height,
        config.fit(),
        transform.to_cols_array()
    );

    transform
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn surface(w: u32, h: u32) -> SurfaceState {
        SurfaceState::new(w, h, 1.0)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        a.abs_diff_eq(b, EPS)
    }

    /// 800x400 world on a 400x400 surface: world is wider than the surface.
    fn wide_world(fit: FitMode) -> SizingConfig {
        SizingConfig::builder()
            .fit(fit)
            .world_size(800.0, 400.0)
            .build()
            .unwrap()
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn default_fill_config_is_identity() {
        let t = resolve(surface(1920, 1080), &SizingConfig::pattern());
        assert!(t.approx_eq(Transform::IDENTITY, EPS));
        let uv = Vec2::new(0.2, 0.9);
        assert!(close(t.apply(uv), uv));
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_is_periodic_mod_360() {
        for r in [0.0, 15.0, 90.0, 133.0, -45.0] {
            let a = SizingConfig::builder().rotation(r).scale(1.5).build().unwrap();
            let b = SizingConfig::builder().rotation(r + 360.0).scale(1.5).build().unwrap();
            let s = surface(640, 480);
            assert!(resolve(s, &a).approx_eq(resolve(s, &b), 1e-4), "rotation {r}");
        }
    }

    #[test]
    fn rotation_leaves_origin_fixed() {
        for (ox, oy) in [(0.5, 0.5), (0.0, 0.0), (0.25, 0.8)] {
            let pivot = Vec2::new(ox, oy);
            for r in [0.0, 30.0, 90.0, 217.0] {
                let c = SizingConfig::builder()
                    .origin(ox, oy)
                    .rotation(r)
                    .scale(3.0)
                    .build()
                    .unwrap();
                assert!(close(resolve(surface(300, 200), &c).apply(pivot), pivot));
            }
        }
    }

    #[test]
    fn rotation_quarter_turn_direction() {
        // +90 degrees maps +X to +Y about the local zero.
        let c = SizingConfig::builder().rotation(90.0).build().unwrap();
        let p = resolve(surface(100, 100), &c).apply(Vec2::new(1.0, 0.5));
        assert!(close(p, Vec2::new(0.5, 1.0)), "{p}");
    }

    // ── fit ───────────────────────────────────────────────────────────────

    #[test]
    fn contain_shows_full_world_width() {
        let c = wide_world(FitMode::Contain);
        let s = surface(400, 400);

        let fs = fit_scale(s, &c);
        assert_eq!(fs.x, 1.0);
        assert_eq!(fs.y, 2.0);

        let t = resolve(s, &c);
        // Horizontal surface edges land exactly on the world edges.
        assert!(close(t.apply(Vec2::new(0.0, 0.5)), Vec2::new(0.0, 0.5)));
        assert!(close(t.apply(Vec2::new(1.0, 0.5)), Vec2::new(1.0, 0.5)));
        // The vertical axis is letterboxed: surface edges sample outside the world.
        assert!(t.apply(Vec2::new(0.5, 0.0)).y < 0.0);
        assert!(t.apply(Vec2::new(0.5, 1.0)).y > 1.0);
    }

    #[test]
    fn contain_on_tall_world_scales_x() {
        let c = SizingConfig::builder()
            .fit(FitMode::Contain)
            .world_size(100.0, 400.0)
            .build()
            .unwrap();
        let fs = fit_scale(surface(400, 400), &c);
        assert_eq!(fs, Vec2::new(4.0, 1.0));
    }

    #[test]
    fn cover_crops_the_wide_world() {
        let c = wide_world(FitMode::Cover);
        let s = surface(400, 400);

        let fs = fit_scale(s, &c);
        assert_eq!(fs, Vec2::new(0.5, 1.0));

        let t = resolve(s, &c);
        // Every surface corner samples inside the world: fully covered.
        for corner in [Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE] {
            let p = t.apply(corner);
            assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y), "{p}");
        }
        // World horizontal edges map outside the surface: cropped.
        let inv = t.inverse().unwrap();
        assert!(inv.apply(Vec2::new(0.0, 0.5)).x < 0.0);
        assert!(inv.apply(Vec2::new(1.0, 0.5)).x > 1.0);
        // Surface edges sample strictly inside the world horizontally.
        assert!(close(t.apply(Vec2::new(0.0, 0.5)), Vec2::new(0.25, 0.5)));
    }

    #[test]
    fn matching_aspect_needs_no_correction() {
        for fit in FitMode::ALL {
            let c = SizingConfig::builder()
                .fit(fit)
                .world_size(160.0, 90.0)
                .build()
                .unwrap();
            assert!(close(fit_scale(surface(1920, 1080), &c), Vec2::ONE), "{fit}");
        }
    }

    #[test]
    fn unset_world_behaves_like_fill() {
        let s = surface(1280, 300);
        let base = SizingConfig::builder()
            .fit(FitMode::Fill)
            .rotation(20.0)
            .scale(2.0)
            .offset(0.1, -0.2)
            .build()
            .unwrap();
        for fit in FitMode::ALL {
            let c = base.to_builder().fit(fit).build().unwrap();
            assert!(resolve(s, &c).approx_eq(resolve(s, &base), EPS), "{fit}");
        }
    }

    #[test]
    fn zero_size_surface_skips_fit() {
        let c = wide_world(FitMode::Contain);
        assert_eq!(fit_scale(surface(0, 400), &c), Vec2::ONE);
        assert_eq!(fit_scale(surface(400, 0), &c), Vec2::ONE);
        let t = resolve(surface(0, 0), &c);
        assert!(t.approx_eq(Transform::IDENTITY, EPS));
    }

    #[test]
    fn pixel_ratio_does_not_change_transform() {
        let c = wide_world(FitMode::Cover);
        let a = resolve(SurfaceState::new(400, 400, 1.0), &c);
        let b = resolve(SurfaceState::new(400, 400, 3.0), &c);
        assert!(a.approx_eq(b, EPS));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn doubling_scale_halves_pattern_distance() {
        let s = surface(500, 500);
        let a = Vec2::new(0.1, 0.3);
        let b = Vec2::new(0.7, 0.6);

        let t1 = resolve(s, &SizingConfig::builder().scale(1.0).build().unwrap());
        let t2 = resolve(s, &SizingConfig::builder().scale(2.0).build().unwrap());

        let d1 = t1.apply(a).distance(t1.apply(b));
        let d2 = t2.apply(a).distance(t2.apply(b));
        assert!((d2 - d1 / 2.0).abs() < EPS, "{d1} {d2}");
    }

    #[test]
    fn clamped_scale_stays_finite() {
        let c = SizingConfig::builder().scale(0.0).build().unwrap();
        let p = resolve(surface(10, 10), &c).apply(Vec2::new(1.0, 1.0));
        assert!(p.is_finite());
    }

    // ── offset ────────────────────────────────────────────────────────────

    #[test]
    fn offset_is_divided_by_scale() {
        let c = SizingConfig::builder()
            .scale(4.0)
            .rotation(45.0)
            .offset(0.2, -0.1)
            .build()
            .unwrap();
        let p = resolve(surface(300, 300), &c).apply(Vec2::splat(0.5));
        assert!(close(p, Vec2::new(0.55, 0.475)), "{p}");
    }

    #[test]
    fn offset_screen_shift_is_scale_independent() {
        let s = surface(400, 400);
        for scale in [0.5, 1.0, 2.0, 4.0] {
            let c = SizingConfig::builder()
                .scale(scale)
                .offset(0.1, 0.0)
                .build()
                .unwrap();
            // Where the pattern centre lands on screen.
            let centre = resolve(s, &c).inverse().unwrap().apply(Vec2::splat(0.5));
            assert!(close(centre - Vec2::splat(0.5), Vec2::new(-0.1, 0.0)), "scale={scale} {centre}");
        }
    }

    #[test]
    fn opposite_offsets_compose_to_identity() {
        let s = surface(640, 360);
        let (dx, dy) = (0.3, -0.15);

        let plus = SizingConfig::builder().offset(dx, dy).build().unwrap();
        let minus = SizingConfig::builder().offset(-dx, -dy).build().unwrap();
        assert!(resolve(s, &plus).then(resolve(s, &minus)).approx_eq(Transform::IDENTITY, EPS));

        // With a non-trivial linear part the offset contributes a pure translation
        // relative to the offset-free transform; those translations cancel too.
        let base = SizingConfig::builder()
            .fit(FitMode::Contain)
            .world_size(100.0, 300.0)
            .rotation(35.0)
            .scale(1.7)
            .origin(0.3, 0.6)
            .build()
            .unwrap();
        let base_inv = resolve(s, &base).inverse().unwrap();
        let shift = |x: f32, y: f32| {
            let c = base.to_builder().offset(x, y).build().unwrap();
            resolve(s, &c).then(base_inv)
        };
        assert!(shift(dx, dy).then(shift(-dx, -dy)).approx_eq(Transform::IDENTITY, 1e-4));
    }

    // ── composition order ─────────────────────────────────────────────────

    #[test]
    fn matches_stepwise_algorithm() {
        let c = SizingConfig::builder()
            .fit(FitMode::Contain)
            .world_size(1000.0, 250.0)
            .scale(1.25)
            .rotation(60.0)
            .origin(0.2, 0.7)
            .offset(0.05, 0.1)
            .build()
            .unwrap();
        let s = surface(800, 600);
        let t = resolve(s, &c);

        let fs = fit_scale(s, &c);
        let (sin, cos) = 60f32.to_radians().sin_cos();
        for uv in [Vec2::ZERO, Vec2::new(0.4, 0.9), Vec2::ONE] {
            let p = (uv - c.origin()) * fs / c.scale();
            let p = Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
            let expected = p + c.offset() / c.scale() + c.origin();
            assert!(close(t.apply(uv), expected), "{uv}");
        }
    }
}
