use std::f64::consts::PI;

use kurbo::{Arc, Circle, Shape as _};

use crate::foundation::core::{BezPath, Point, Rect, Vec2};

const TOLERANCE: f64 = 0.1;

pub fn circle(center: Point, radius: f64) -> BezPath {
    Circle::new(center, radius.max(0.0)).to_path(TOLERANCE)
}

pub fn rect_path(rect: Rect) -> BezPath {
    rect.to_path(TOLERANCE)
}

/// Mouth outline centered on the origin.
///
/// The lower half of the outer ellipse is traced left-to-right through the bottom, then the
/// upper half of a flatter inner ellipse (`inner_ratio` of the height) is traced back over the
/// top, giving a wide lower lip and a shallow upper one.
pub fn mouth_lens(half_width: f64, half_height: f64, inner_ratio: f64) -> BezPath {
    let outer = Arc::new(
        Point::ZERO,
        Vec2::new(half_width, half_height),
        0.0,
        PI,
        0.0,
    );
    let inner = Arc::new(
        Point::ZERO,
        Vec2::new(half_width, half_height * inner_ratio),
        0.0,
        -PI,
        0.0,
    );

    let mut path = BezPath::new();
    path.move_to(Point::new(half_width, 0.0));
    path.extend(outer.append_iter(TOLERANCE));
    path.line_to(Point::new(half_width, 0.0));
    path.extend(inner.append_iter(TOLERANCE));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shapes.rs"]
mod tests;
