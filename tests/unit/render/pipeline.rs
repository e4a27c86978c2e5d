use super::*;
use crate::{
    assets::color::Rgb,
    render::surface::{DrawKind, Paint, RecordingSurface},
    scene::starfield::DriftMode,
};

fn small_field() -> FieldConfig {
    FieldConfig {
        star_count: 5,
        nebula_count: 2,
        drift: DriftMode::Wrap,
    }
}

#[test]
fn passes_are_ordered_back_to_front() {
    assert_eq!(Variant::Flat.passes()[0], LayerPass::FaceShadow);
    assert_eq!(*Variant::Flat.passes().last().unwrap(), LayerPass::Mouth);
    assert_eq!(Variant::Starfield.passes()[0], LayerPass::Background);
    assert!(!Variant::Starfield.passes().contains(&LayerPass::EnergyRings));

    let energy = Variant::Energy.passes();
    let pos = |p| energy.iter().position(|&x| x == p).unwrap();
    assert!(pos(LayerPass::Background) < pos(LayerPass::EnergyRings));
    assert!(pos(LayerPass::EnergyRings) < pos(LayerPass::Face));
    assert!(pos(LayerPass::Face) < pos(LayerPass::Eyes));
    assert!(pos(LayerPass::Eyes) < pos(LayerPass::Mouth));
}

#[test]
fn flat_frame_clears_then_draws_face_only() {
    let mut s = RecordingSurface::new(200, 200);
    let mut r = FaceRenderer::new(Variant::Flat, 1);
    r.render_basic_face(&mut s, &FaceParams::new(0.3, 1.0), 0.0);

    assert_eq!(s.clear_count(), 1);
    // Shadow, face fill, face stroke, 8 eye fills, mouth shadow, mouth fill, mouth stroke.
    assert_eq!(s.cmds().len(), 14);
    assert_eq!(s.cmds()[0].paint, Paint::Solid(crate::scene::gradient::FACE_SHADOW));
    assert_eq!(s.depth(), 0);
    assert!(r.field().size().is_none());
}

#[test]
fn repeated_frames_do_not_accumulate_commands() {
    let mut s = RecordingSurface::new(120, 120);
    let mut r = FaceRenderer::with_field_config(Variant::Starfield, 9, small_field());
    r.render_basic_face(&mut s, &FaceParams::default(), 0.0);
    let first = s.cmds().len();
    r.render_basic_face(&mut s, &FaceParams::default(), 0.016);
    assert_eq!(s.cmds().len(), first);
    assert_eq!(s.clear_count(), 2);
}

#[test]
fn starfield_field_persists_until_resize() {
    let mut s = RecordingSurface::new(160, 120);
    let mut r = FaceRenderer::with_field_config(Variant::Starfield, 3, small_field());

    r.render_basic_face(&mut s, &FaceParams::default(), 0.0);
    let first_ids: Vec<u64> = r.field().stars().iter().map(|s| s.id).collect();
    assert_eq!(r.field().generation(), 1);

    r.render_basic_face(&mut s, &FaceParams::default(), 0.1);
    let again: Vec<u64> = r.field().stars().iter().map(|s| s.id).collect();
    assert_eq!(first_ids, again);
    assert_eq!(r.field().generation(), 1);

    s.resize(161, 120);
    r.render_basic_face(&mut s, &FaceParams::default(), 0.2);
    assert_eq!(r.field().generation(), 2);
    assert!(
        r.field()
            .stars()
            .iter()
            .all(|star| !first_ids.contains(&star.id))
    );
}

#[test]
fn background_is_painted_before_face() {
    let mut s = RecordingSurface::new(200, 200);
    let mut r = FaceRenderer::with_field_config(Variant::Starfield, 5, small_field());
    r.render_basic_face(&mut s, &FaceParams::default(), 0.0);

    let cmds = s.cmds();
    assert!(matches!(cmds[0].paint, Paint::Radial { .. }));
    assert_eq!(cmds[0].bounds, kurbo::Rect::new(0.0, 0.0, 200.0, 200.0));
    let shadow_idx = cmds
        .iter()
        .position(|c| c.paint == Paint::Solid(crate::scene::gradient::FACE_SHADOW))
        .unwrap();
    // Backdrop + (glow + core) per particle.
    assert_eq!(shadow_idx, 1 + 2 * (5 + 2));
}

#[test]
fn energy_frame_has_blurred_layers_and_dashed_rings() {
    let mut s = RecordingSurface::new(240, 240);
    let mut r = FaceRenderer::with_field_config(Variant::Energy, 5, small_field());
    r.render_basic_face(&mut s, &FaceParams::new(0.5, 0.5).with_color("#a142f4"), 1.25);

    assert!(s.cmds().iter().any(|c| c.state.blur > 0.0));
    let dashed = s
        .cmds()
        .iter()
        .filter(|c| c.kind == DrawKind::Stroke && c.stroke.as_ref().is_some_and(|st| !st.dashes.is_empty()))
        .count();
    assert_eq!(dashed, 6);
    assert_eq!(s.depth(), 0);
    assert_eq!(s.current_state().blur, 0.0);
}

#[test]
fn energy_light_drifts_between_frames() {
    let face_paint = |t: f64| {
        let mut s = RecordingSurface::new(200, 200);
        let mut r = FaceRenderer::with_field_config(Variant::Energy, 5, small_field());
        r.render_basic_face(&mut s, &FaceParams::default(), t);
        let geom = FaceGeometry::new(s.size(), &FaceParams::default());
        s.cmds()
            .iter()
            .find(|c| {
                matches!(&c.paint, Paint::Radial { end_center, end_radius, stops, .. }
                    if *end_center == geom.center
                        && *end_radius == geom.radius
                        && stops.len() == 4
                        && stops[1].color.rgb() == Rgb::new(66, 133, 244))
            })
            .map(|c| c.paint.clone())
            .unwrap()
    };
    assert_ne!(face_paint(0.0), face_paint(3.0));
}

#[test]
fn zero_sized_surface_renders_without_panicking() {
    let mut s = RecordingSurface::new(0, 0);
    let mut r = FaceRenderer::with_field_config(Variant::Energy, 1, small_field());
    r.render_basic_face(&mut s, &FaceParams::default(), 0.0);
    r.render_basic_face(&mut s, &FaceParams::default(), 0.5);
    assert_eq!(r.field().generation(), 1);
}

#[test]
fn render_frame_uses_fps_timestamps() {
    let mut a = RecordingSurface::new(100, 100);
    let mut b = RecordingSurface::new(100, 100);
    let mut ra = FaceRenderer::with_field_config(Variant::Energy, 2, small_field());
    let mut rb = FaceRenderer::with_field_config(Variant::Energy, 2, small_field());

    ra.render_frame(&mut a, &FaceParams::default(), FrameIndex(30), Fps::new(30, 1).unwrap());
    rb.render_basic_face(&mut b, &FaceParams::default(), 1.0);
    assert_eq!(a.cmds(), b.cmds());
}
