use super::*;
use crate::{assets::color::Rgb, scene::shapes::rect_path};

fn red() -> Paint {
    Paint::Solid(Rgb::new(255, 0, 0).opaque())
}

#[test]
fn zero_or_oversized_dimensions_are_rejected() {
    assert!(CpuSurface::new(0, 10, &RenderSettings::default()).is_err());
    assert!(CpuSurface::new(10, 0, &RenderSettings::default()).is_err());
    assert!(CpuSurface::new(70_000, 10, &RenderSettings::default()).is_err());
}

#[test]
fn clear_fills_with_premultiplied_clear_color() {
    let settings = RenderSettings {
        clear_rgba: Some([255, 255, 255, 128]),
    };
    let mut s = CpuSurface::new(4, 4, &settings).unwrap();
    s.fill(&rect_path(kurbo::Rect::new(0.0, 0.0, 4.0, 4.0)), &red());
    s.clear();
    let frame = s.finish().unwrap();
    assert_eq!(frame.pixel(0, 0), Some([128, 128, 128, 128]));
}

#[test]
fn solid_fill_covers_only_its_shape() {
    let mut s = CpuSurface::new(8, 8, &RenderSettings::default()).unwrap();
    s.fill(&rect_path(kurbo::Rect::new(0.0, 0.0, 4.0, 8.0)), &red());
    let frame = s.finish().unwrap();
    assert_eq!(frame.pixel(1, 4), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(6, 4), Some([0, 0, 0, 0]));
}

#[test]
fn transform_state_moves_geometry() {
    let mut s = CpuSurface::new(8, 8, &RenderSettings::default()).unwrap();
    s.save();
    s.translate(Vec2::new(4.0, 0.0));
    s.fill(&rect_path(kurbo::Rect::new(0.0, 0.0, 4.0, 8.0)), &red());
    s.restore();
    let frame = s.finish().unwrap();
    assert_eq!(frame.pixel(1, 4), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(6, 4), Some([255, 0, 0, 255]));
}

#[test]
fn global_alpha_scales_coverage() {
    let mut s = CpuSurface::new(4, 4, &RenderSettings::default()).unwrap();
    s.set_global_alpha(0.5);
    s.fill(&rect_path(kurbo::Rect::new(0.0, 0.0, 4.0, 4.0)), &red());
    let px = s.finish().unwrap().pixel(2, 2).unwrap();
    assert!((120..=135).contains(&px[3]), "alpha {}", px[3]);
}

#[test]
fn blurred_segment_bleeds_past_shape_edge() {
    let mut s = CpuSurface::new(32, 8, &RenderSettings::default()).unwrap();
    s.set_blur(3.0);
    s.fill(&rect_path(kurbo::Rect::new(0.0, 0.0, 16.0, 8.0)), &red());
    s.set_blur(0.0);
    let frame = s.finish().unwrap();

    let edge = frame.pixel(18, 4).unwrap();
    assert!(edge[3] > 0 && edge[3] < 255);
    assert_eq!(frame.pixel(31, 4), Some([0, 0, 0, 0]));
}

#[test]
fn crisp_draw_after_blur_stays_on_top() {
    let mut s = CpuSurface::new(16, 16, &RenderSettings::default()).unwrap();
    s.set_blur(2.0);
    s.fill(
        &rect_path(kurbo::Rect::new(0.0, 0.0, 16.0, 16.0)),
        &Paint::Solid(Rgb::new(0, 0, 255).opaque()),
    );
    s.set_blur(0.0);
    s.fill(&rect_path(kurbo::Rect::new(4.0, 4.0, 12.0, 12.0)), &red());
    let frame = s.finish().unwrap();
    assert_eq!(frame.pixel(8, 8), Some([255, 0, 0, 255]));
}

#[test]
fn size_reports_dimensions() {
    let s = CpuSurface::new(30, 20, &RenderSettings::default()).unwrap();
    assert_eq!(s.size(), Canvas::new(30, 20));
}
