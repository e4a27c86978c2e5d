use super::*;

#[test]
fn fps_rejects_zero_and_converts_frames() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());

    let fps = Fps::new(30, 1).unwrap();
    assert!((fps.frames_to_secs(45) - 1.5).abs() < 1e-12);
}

#[test]
fn canvas_center_and_rect() {
    let c = Canvas::new(400, 300);
    assert_eq!(c.center(), Point::new(200.0, 150.0));
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 400.0, 300.0));
}
