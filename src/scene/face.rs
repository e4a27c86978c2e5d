//! Face disc, eyes and mouth.
//!
//! Geometry is derived from the surface size alone; the expressiveness scalars only change
//! the vertical scale of eyes and mouth. Neither scalar is clamped: a fixed bias keeps the
//! "closed" state visible, and out-of-range values simply distort the shape.

use serde::{Deserialize, Serialize};

use crate::{
    assets::color::{Rgb, face_color},
    foundation::core::{Canvas, Point, Vec2},
    render::surface::{Paint, StrokeStyle, Surface},
    scene::{
        gradient::{self, FACE_SHADOW, FEATURE_SHADOW, HIGHLIGHT, MOUTH_EDGE, SECONDARY_HIGHLIGHT},
        shapes::{circle, mouth_lens},
    },
};

/// Added to `eye_scale` so closed eyes stay a thin sliver.
pub const EYE_BIAS: f64 = 0.1;
/// Per-pixel-of-height term added to the mouth's vertical scale.
pub const MOUTH_BIAS_PER_PX: f64 = 0.002;
/// Height of the upper-lip ellipse relative to the lower one.
pub const MOUTH_INNER_RATIO: f64 = 0.45;

const FACE_MARGIN_PX: f64 = 20.0;
const FACE_SHADOW_OFFSET: Vec2 = Vec2::new(5.0, 5.0);
const FEATURE_SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 2.0);
const FACE_EDGE_DARKEN: i32 = -40;

/// Per-frame expressiveness input supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaceParams {
    pub mouth_scale: f64,
    pub eye_scale: f64,
    pub color: Option<String>,
}

impl FaceParams {
    pub fn new(mouth_scale: f64, eye_scale: f64) -> Self {
        Self {
            mouth_scale,
            eye_scale,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn base_color(&self) -> Rgb {
        face_color(self.color.as_deref())
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Positions and scale factors for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    pub center: Point,
    pub radius: f64,
    pub eye_centers: [Point; 2],
    pub eye_radius: f64,
    pub eye_scale_y: f64,
    pub mouth_center: Point,
    pub mouth_half_width: f64,
    pub mouth_half_height: f64,
    pub mouth_scale_y: f64,
}

impl FaceGeometry {
    pub fn new(size: Canvas, params: &FaceParams) -> Self {
        let (w, h) = (size.width_f64(), size.height_f64());
        let mouth = finite_or_zero(params.mouth_scale);
        let eyes = finite_or_zero(params.eye_scale);

        let eyes_center = Point::new(w / 2.0, h / 2.425);
        let eyes_offset = w / 15.0;

        Self {
            center: Point::new(w / 2.0, h / 2.0),
            radius: w / 2.0 - FACE_MARGIN_PX,
            eye_centers: [
                Point::new(eyes_center.x - eyes_offset, eyes_center.y),
                Point::new(eyes_center.x + eyes_offset, eyes_center.y),
            ],
            eye_radius: w / 30.0,
            eye_scale_y: eyes + EYE_BIAS,
            mouth_center: Point::new(w / 2.0, (h / 2.875) * 1.55),
            mouth_half_width: w / 10.0,
            mouth_half_height: (h / 5.0) * mouth + 10.0,
            mouth_scale_y: mouth + h * MOUTH_BIAS_PER_PX,
        }
    }
}

pub fn draw_face_shadow(surface: &mut dyn Surface, geom: &FaceGeometry) {
    surface.fill(
        &circle(geom.center + FACE_SHADOW_OFFSET, geom.radius),
        &Paint::Solid(FACE_SHADOW),
    );
}

/// Gradient-filled disc plus a darker rim; `light` is the highlight offset in radius units.
pub fn draw_face(surface: &mut dyn Surface, geom: &FaceGeometry, base: Rgb, light: Vec2) {
    let disc = circle(geom.center, geom.radius);
    surface.fill(
        &disc,
        &gradient::face_gradient(geom.center, geom.radius, base, light),
    );
    surface.stroke(
        &disc,
        &Paint::Solid(base.offset(FACE_EDGE_DARKEN).opaque()),
        &StrokeStyle::solid(2.0),
    );
}

pub fn draw_eyes(surface: &mut dyn Surface, geom: &FaceGeometry) {
    for center in geom.eye_centers {
        draw_eye(surface, center, geom.eye_radius, geom.eye_scale_y);
    }
}

fn draw_eye(surface: &mut dyn Surface, center: Point, radius: f64, scale_y: f64) {
    surface.save();
    surface.translate(center.to_vec2());
    surface.scale(1.0, scale_y);

    surface.fill(
        &circle(FEATURE_SHADOW_OFFSET.to_point(), radius),
        &Paint::Solid(FEATURE_SHADOW),
    );
    surface.fill(
        &circle(Point::ZERO, radius),
        &gradient::eye_gradient(Point::ZERO, radius),
    );
    surface.fill(
        &circle(Point::new(-radius * 0.3, -radius * 0.3), radius * 0.3),
        &Paint::Solid(HIGHLIGHT),
    );
    surface.fill(
        &circle(Point::new(radius * 0.25, radius * 0.2), radius * 0.12),
        &Paint::Solid(SECONDARY_HIGHLIGHT),
    );

    surface.restore();
}

pub fn draw_mouth(surface: &mut dyn Surface, geom: &FaceGeometry) {
    let lens = mouth_lens(
        geom.mouth_half_width,
        geom.mouth_half_height,
        MOUTH_INNER_RATIO,
    );

    surface.save();
    surface.translate(geom.mouth_center.to_vec2() + FEATURE_SHADOW_OFFSET);
    surface.scale(1.0, geom.mouth_scale_y);
    surface.fill(&lens, &Paint::Solid(FEATURE_SHADOW));
    surface.restore();

    surface.save();
    surface.translate(geom.mouth_center.to_vec2());
    surface.scale(1.0, geom.mouth_scale_y);
    surface.fill(
        &lens,
        &gradient::mouth_gradient(Point::ZERO, geom.mouth_half_height),
    );
    surface.stroke(&lens, &Paint::Solid(MOUTH_EDGE), &StrokeStyle::solid(1.0));
    surface.restore();
}

#[cfg(test)]
#[path = "../../tests/unit/scene/face.rs"]
mod tests;
