use super::*;
use crate::render::surface::RecordingSurface;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x5eed)
}

#[test]
fn first_ensure_generates_reference_counts_inside_surface() {
    let mut field = ParticleField::new(FieldConfig::default());
    let mut rng = rng();
    assert!(field.ensure_field(Canvas::new(320, 240), &mut rng));

    assert_eq!(field.stars().len(), 150);
    assert_eq!(field.nebulae().len(), 8);
    assert_eq!(field.size(), Some(Canvas::new(320, 240)));
    for s in field.stars() {
        assert!((0.0..320.0).contains(&s.pos.x) && (0.0..240.0).contains(&s.pos.y));
        assert!((MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&s.brightness));
        assert!(s.twinkle_rate != 0.0);
        assert!(STAR_PALETTE.contains(&s.color));
    }
    for n in field.nebulae() {
        assert!(NEBULA_PALETTE.contains(&n.color));
        assert!(n.size > 0.0 && n.opacity > 0.0);
    }
}

#[test]
fn same_size_is_a_no_op() {
    let mut field = ParticleField::new(FieldConfig::default());
    let mut rng = rng();
    field.ensure_field(Canvas::new(100, 100), &mut rng);
    let before = field.stars().to_vec();
    let nebulae_before = field.nebulae().to_vec();

    assert!(!field.ensure_field(Canvas::new(100, 100), &mut rng));
    assert_eq!(field.stars(), before.as_slice());
    assert_eq!(field.nebulae(), nebulae_before.as_slice());
    assert_eq!(field.generation(), 1);
}

#[test]
fn any_resize_replaces_every_particle() {
    let mut field = ParticleField::new(FieldConfig::default());
    let mut rng = rng();
    field.ensure_field(Canvas::new(100, 100), &mut rng);
    let old_ids: Vec<u64> = field
        .stars()
        .iter()
        .map(|s| s.id)
        .chain(field.nebulae().iter().map(|n| n.id))
        .collect();

    assert!(field.ensure_field(Canvas::new(100, 101), &mut rng));
    assert_eq!(field.generation(), 2);
    assert_eq!(field.stars().len(), 150);
    assert!(field.stars().iter().all(|s| !old_ids.contains(&s.id)));
    assert!(field.nebulae().iter().all(|n| !old_ids.contains(&n.id)));
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let mut a = ParticleField::new(FieldConfig::default());
    let mut b = ParticleField::new(FieldConfig::default());
    a.ensure_field(Canvas::new(64, 48), &mut rng());
    b.ensure_field(Canvas::new(64, 48), &mut rng());
    assert_eq!(a.stars(), b.stars());
    assert_eq!(a.nebulae(), b.nebulae());
}

#[test]
fn star_brightness_never_escapes_bounds() {
    let mut field = ParticleField::new(FieldConfig {
        star_count: 40,
        nebula_count: 0,
        drift: DriftMode::Wrap,
    });
    field.ensure_field(Canvas::new(50, 50), &mut rng());

    let mut flipped = false;
    let initial: Vec<f64> = field.stars().iter().map(|s| s.twinkle_rate).collect();
    for _ in 0..5_000 {
        field.advance();
        for s in field.stars() {
            assert!(s.brightness >= MIN_BRIGHTNESS && s.brightness <= MAX_BRIGHTNESS);
        }
    }
    for (s, r0) in field.stars().iter().zip(&initial) {
        flipped |= s.twinkle_rate.signum() != r0.signum();
        assert!((s.twinkle_rate.abs() - r0.abs()).abs() < 1e-15);
    }
    assert!(flipped);
}

#[test]
fn unbounded_drift_keeps_moving_off_surface() {
    let mut field = ParticleField::new(FieldConfig {
        star_count: 0,
        nebula_count: 4,
        drift: DriftMode::Unbounded,
    });
    field.ensure_field(Canvas::new(100, 100), &mut rng());
    let start: Vec<Point> = field.nebulae().iter().map(|n| n.pos).collect();

    for _ in 0..10_000 {
        field.advance();
    }
    for (n, p0) in field.nebulae().iter().zip(&start) {
        let expected = *p0 + n.velocity * 10_000.0;
        assert!((n.pos - expected).hypot() < 1e-6);
    }
}

#[test]
fn wrapped_drift_stays_near_surface() {
    let mut field = ParticleField::new(FieldConfig {
        star_count: 0,
        nebula_count: 8,
        drift: DriftMode::Wrap,
    });
    field.ensure_field(Canvas::new(100, 80), &mut rng());

    for _ in 0..20_000 {
        field.advance();
    }
    for n in field.nebulae() {
        let margin = n.size * GLOW_SCALE;
        assert!(n.pos.x >= -margin && n.pos.x <= 100.0 + margin);
        assert!(n.pos.y >= -margin && n.pos.y <= 80.0 + margin);
    }
}

#[test]
fn render_paints_nebulae_before_stars() {
    let mut field = ParticleField::new(FieldConfig {
        star_count: 3,
        nebula_count: 2,
        drift: DriftMode::Wrap,
    });
    field.ensure_field(Canvas::new(100, 100), &mut rng());

    let mut s = RecordingSurface::new(100, 100);
    field.render(&mut s);
    let cmds = s.cmds();
    assert_eq!(cmds.len(), 2 * 5);

    // Glow radius is three times the core radius.
    let n0 = &field.nebulae()[0];
    assert!((cmds[0].bounds.width() - 2.0 * n0.size * GLOW_SCALE).abs() < 0.5);
    assert!((cmds[1].bounds.width() - 2.0 * n0.size).abs() < 0.5);

    let last_star = &field.stars()[2];
    assert!((cmds[9].bounds.center().x - last_star.pos.x).abs() < 0.1);
}

#[test]
fn empty_field_renders_nothing() {
    let field = ParticleField::new(FieldConfig::default());
    let mut s = RecordingSurface::new(10, 10);
    field.render(&mut s);
    assert!(s.cmds().is_empty());
}

#[test]
fn spiral_arms_rotate_with_time() {
    let mut a = RecordingSurface::new(100, 100);
    let mut b = RecordingSurface::new(100, 100);
    draw_spiral_arms(&mut a, 0.0);
    draw_spiral_arms(&mut b, 5.0);
    assert_eq!(a.cmds().len(), 4);
    assert_ne!(a.cmds()[0].state.transform, b.cmds()[0].state.transform);
    assert_eq!(a.depth(), 0);
}

#[test]
fn particle_cores_are_opaque_and_faded_by_global_alpha() {
    let mut field = ParticleField::new(FieldConfig {
        star_count: 4,
        nebula_count: 2,
        drift: DriftMode::Wrap,
    });
    field.ensure_field(Canvas::new(100, 100), &mut rng());

    let mut s = RecordingSurface::new(100, 100);
    field.render(&mut s);
    let cmds = s.cmds();

    let n0 = &field.nebulae()[0];
    assert_eq!(cmds[1].paint, Paint::Solid(n0.color.opaque()));
    assert!((f64::from(cmds[1].state.alpha) - n0.opacity).abs() < 1e-6);
    assert_eq!(cmds[0].state.alpha, cmds[1].state.alpha);

    for (i, star) in field.stars().iter().enumerate() {
        let core = &cmds[2 * (2 + i) + 1];
        assert_eq!(core.paint, Paint::Solid(star.color.opaque()));
        assert!((f64::from(core.state.alpha) - star.brightness).abs() < 1e-6);
    }

    assert_eq!(s.depth(), 0);
    assert_eq!(s.current_state().alpha, 1.0);
}
