//! Color ramps that give the flat shapes their pseudo-3D lighting.
//!
//! Every builder is a pure function of geometry, base color and (for the drifting light)
//! elapsed seconds; nothing here holds state between frames.

use crate::{
    assets::color::{Rgb, Rgba},
    foundation::core::{Canvas, Point, Vec2},
    render::surface::{ColorStop, Paint},
};

/// Where the simulated light sits relative to a shape, in units of the shape's radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightSource {
    /// Upper-left highlight that never moves.
    Fixed,
    /// Highlight that wanders sinusoidally around the upper-left position.
    Drifting,
}

const BASE_LIGHT: Vec2 = Vec2::new(-0.3, -0.3);
const DRIFT_AMPLITUDE: f64 = 0.15;
const DRIFT_FREQ_X: f64 = 0.8;
const DRIFT_FREQ_Y: f64 = 0.6;

impl LightSource {
    pub fn offset(self, time_s: f64) -> Vec2 {
        match self {
            LightSource::Fixed => BASE_LIGHT,
            LightSource::Drifting => {
                BASE_LIGHT
                    + Vec2::new(
                        DRIFT_AMPLITUDE * (time_s * DRIFT_FREQ_X).sin(),
                        DRIFT_AMPLITUDE * (time_s * DRIFT_FREQ_Y).cos(),
                    )
            }
        }
    }
}

/// Face body: highlight near the light, base color at 30%, darkening toward the rim.
pub fn face_gradient(center: Point, radius: f64, base: Rgb, light: Vec2) -> Paint {
    Paint::Radial {
        start_center: center + light * radius,
        start_radius: 0.0,
        end_center: center,
        end_radius: radius,
        stops: vec![
            ColorStop::new(0.0, base.offset(60)),
            ColorStop::new(0.3, base),
            ColorStop::new(0.7, base.offset(-30)),
            ColorStop::new(1.0, base.offset(-60)),
        ],
    }
}

pub fn eye_gradient(center: Point, radius: f64) -> Paint {
    Paint::Radial {
        start_center: center - Vec2::new(radius * 0.4, radius * 0.4),
        start_radius: 0.0,
        end_center: center,
        end_radius: radius,
        stops: vec![
            ColorStop::new(0.0, Rgb::new(0x33, 0x33, 0x33)),
            ColorStop::new(0.5, Rgb::new(0x1a, 0x1a, 0x1a)),
            ColorStop::new(1.0, Rgb::new(0, 0, 0)),
        ],
    }
}

/// Vertical ramp spanning `center.y - half_height ..= center.y + half_height`.
pub fn mouth_gradient(center: Point, half_height: f64) -> Paint {
    Paint::Linear {
        start: Point::new(center.x, center.y - half_height),
        end: Point::new(center.x, center.y + half_height),
        stops: vec![
            ColorStop::new(0.0, Rgb::new(0, 0, 0)),
            ColorStop::new(0.3, Rgb::new(0x1a, 0, 0)),
            ColorStop::new(0.7, Rgb::new(0x33, 0, 0)),
            ColorStop::new(1.0, Rgb::new(0, 0, 0)),
        ],
    }
}

/// Halo ring fading from `alpha` at `inner_radius` to nothing at `outer_radius`.
pub fn glow_gradient(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    color: Rgb,
    alpha: f32,
) -> Paint {
    Paint::Radial {
        start_center: center,
        start_radius: inner_radius,
        end_center: center,
        end_radius: outer_radius,
        stops: vec![
            ColorStop::new(0.0, color.with_alpha(alpha)),
            ColorStop::new(0.5, color.with_alpha(alpha * 0.4)),
            ColorStop::new(1.0, color.with_alpha(0.0)),
        ],
    }
}

/// Soft particle halo: full `alpha` at the center, transparent at `radius`.
pub fn particle_glow(center: Point, radius: f64, color: Rgb, alpha: f32) -> Paint {
    Paint::Radial {
        start_center: center,
        start_radius: 0.0,
        end_center: center,
        end_radius: radius,
        stops: vec![
            ColorStop::new(0.0, color.with_alpha(alpha)),
            ColorStop::new(1.0, color.with_alpha(0.0)),
        ],
    }
}

/// Full-surface deep-space backdrop, lighter at the center and black at the corners.
pub fn space_vignette(size: Canvas) -> Paint {
    let center = size.center();
    let reach = size.width_f64().hypot(size.height_f64()) / 2.0;
    Paint::Radial {
        start_center: center,
        start_radius: 0.0,
        end_center: center,
        end_radius: reach,
        stops: vec![
            ColorStop::new(0.0, Rgb::new(0x1b, 0x12, 0x3a)),
            ColorStop::new(0.5, Rgb::new(0x0c, 0x0a, 0x24)),
            ColorStop::new(1.0, Rgb::new(0x02, 0x02, 0x08)),
        ],
    }
}

pub const FACE_SHADOW: Rgba = Rgba::new(0, 0, 0, 0.2);
pub const FEATURE_SHADOW: Rgba = Rgba::new(0, 0, 0, 0.3);
pub const HIGHLIGHT: Rgba = Rgba::new(255, 255, 255, 0.3);
pub const SECONDARY_HIGHLIGHT: Rgba = Rgba::new(255, 255, 255, 0.15);
pub const MOUTH_EDGE: Rgba = Rgba::new(100, 0, 0, 0.5);

#[cfg(test)]
#[path = "../../tests/unit/scene/gradient.rs"]
mod tests;
