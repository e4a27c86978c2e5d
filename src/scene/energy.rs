//! Time-driven decorations drawn around the face disc in the energy variant.
//!
//! All of it is a pure function of elapsed seconds; nothing is accumulated between frames.

use std::f64::consts::TAU;

use crate::{
    assets::color::Rgb,
    foundation::core::Point,
    render::surface::{Paint, StrokeStyle, Surface},
    scene::{gradient, shapes::circle},
};

pub const RING_COUNT: usize = 3;
pub const SPARK_COUNT: usize = 20;

const RING_SPACING: f64 = 0.08;
const RING_DASHES: [f64; 2] = [10.0, 14.0];
const RING_DASH_SPEED: f64 = 30.0;
const RING_GLOW_BLUR: f32 = 6.0;

const SPARK_ORBIT: f64 = 1.32;
const SPARK_JITTER: f64 = 0.04;
const SPARK_ANGULAR_SPEED: f64 = 0.5;
const SPARK_JITTER_FREQ: f64 = 3.0;

const HALO_ALPHA: f32 = 0.45;
const HALO_BLUR: f32 = 12.0;

/// Radius of ring `index` (0-based) around a face of `face_radius`.
pub fn ring_radius(face_radius: f64, index: usize) -> f64 {
    face_radius * (1.0 + RING_SPACING * (index as f64 + 1.0))
}

/// Dash offset of ring `index`; rings alternate direction and are phase-shifted.
pub fn ring_dash_offset(index: usize, time_s: f64) -> f64 {
    let dir = if index % 2 == 0 { 1.0 } else { -1.0 };
    let phase = index as f64 * (RING_DASHES[0] + RING_DASHES[1]) / RING_COUNT as f64;
    dir * time_s * RING_DASH_SPEED * (index as f64 + 1.0) + phase
}

/// Orbit positions of the sparks at `time_s`: evenly spaced angles, sinusoidally jittered radius.
pub fn spark_positions(center: Point, face_radius: f64, time_s: f64) -> Vec<Point> {
    (0..SPARK_COUNT)
        .map(|i| {
            let angle = (i as f64) * TAU / SPARK_COUNT as f64 + time_s * SPARK_ANGULAR_SPEED;
            let jitter = (time_s * SPARK_JITTER_FREQ + i as f64).sin() * SPARK_JITTER;
            let r = face_radius * (SPARK_ORBIT + jitter);
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect()
}

/// Blurred halo hugging the face disc.
pub fn draw_halo(surface: &mut dyn Surface, center: Point, face_radius: f64, color: Rgb) {
    let outer = face_radius * 1.45;
    surface.save();
    surface.set_blur(HALO_BLUR);
    surface.fill(
        &circle(center, outer),
        &gradient::glow_gradient(center, face_radius * 0.9, outer, color, HALO_ALPHA),
    );
    surface.restore();
}

/// Three concentric dashed rings, each drawn once blurred (glow) and once crisp.
pub fn draw_energy_rings(
    surface: &mut dyn Surface,
    center: Point,
    face_radius: f64,
    color: Rgb,
    time_s: f64,
) {
    let tint = color.offset(50);
    for i in 0..RING_COUNT {
        let path = circle(center, ring_radius(face_radius, i));
        let alpha = 0.8 - 0.2 * i as f32;
        let offset = ring_dash_offset(i, time_s);

        surface.save();
        surface.set_blur(RING_GLOW_BLUR);
        surface.stroke(
            &path,
            &Paint::Solid(color.with_alpha(alpha * 0.6)),
            &StrokeStyle::dashed(6.0, RING_DASHES.to_vec(), offset),
        );
        surface.restore();

        surface.stroke(
            &path,
            &Paint::Solid(tint.with_alpha(alpha)),
            &StrokeStyle::dashed(2.0, RING_DASHES.to_vec(), offset),
        );
    }
}

pub fn draw_sparks(
    surface: &mut dyn Surface,
    center: Point,
    face_radius: f64,
    color: Rgb,
    time_s: f64,
) {
    let spark_size = (face_radius * 0.02).max(1.0);
    let core = color.offset(90);
    for (i, pos) in spark_positions(center, face_radius, time_s)
        .into_iter()
        .enumerate()
    {
        let pulse = 0.6 + 0.4 * ((time_s * 4.0 + i as f64).sin() * 0.5 + 0.5) as f32;
        surface.fill(
            &circle(pos, spark_size * 3.0),
            &gradient::particle_glow(pos, spark_size * 3.0, color, pulse * 0.7),
        );
        surface.fill(&circle(pos, spark_size), &Paint::Solid(core.with_alpha(pulse)));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/energy.rs"]
mod tests;
