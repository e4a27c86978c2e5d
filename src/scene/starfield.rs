//! Persistent starfield and nebula background.
//!
//! A [`ParticleField`] is generated for one exact surface size. [`ParticleField::ensure_field`]
//! replaces every particle when the size changes and does nothing otherwise; between
//! regenerations particles are mutated in place once per frame by [`ParticleField::advance`].

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::{
    assets::color::Rgb,
    foundation::core::{Canvas, Point, Rect, Vec2},
    foundation::math::{reflect_step, wrap_with_margin},
    render::surface::{ColorStop, Paint, Surface},
    scene::{
        gradient,
        shapes::{circle, rect_path},
    },
};

pub const STAR_PALETTE: [Rgb; 4] = [
    Rgb::new(255, 255, 255),
    Rgb::new(200, 220, 255),
    Rgb::new(255, 240, 200),
    Rgb::new(255, 210, 230),
];

pub const NEBULA_PALETTE: [Rgb; 4] = [
    Rgb::new(138, 43, 226),
    Rgb::new(75, 0, 130),
    Rgb::new(0, 191, 255),
    Rgb::new(255, 20, 147),
];

pub const MIN_BRIGHTNESS: f64 = 0.1;
pub const MAX_BRIGHTNESS: f64 = 1.0;

/// Glow radius as a multiple of particle size.
pub const GLOW_SCALE: f64 = 3.0;

const SPIRAL_ARMS: usize = 4;
const SPIRAL_RAD_PER_SEC: f64 = 0.1;

/// What happens to nebula particles that drift past the surface edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftMode {
    /// Re-enter from the opposite edge once fully out of view.
    #[default]
    Wrap,
    /// Keep drifting forever; the field slowly empties.
    Unbounded,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    pub star_count: usize,
    pub nebula_count: usize,
    pub drift: DriftMode,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_count: 150,
            nebula_count: 8,
            drift: DriftMode::Wrap,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub id: u64,
    pub pos: Point,
    pub size: f64,
    pub brightness: f64,
    pub twinkle_rate: f64,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NebulaParticle {
    pub id: u64,
    pub pos: Point,
    pub size: f64,
    pub opacity: f64,
    pub velocity: Vec2,
    pub color: Rgb,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    config: FieldConfig,
    stars: Vec<Star>,
    nebulae: Vec<NebulaParticle>,
    size: Option<Canvas>,
    generation: u64,
    next_id: u64,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> FieldConfig {
        self.config
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn nebulae(&self) -> &[NebulaParticle] {
        &self.nebulae
    }

    /// Size the current particles were generated for; `None` before the first call.
    pub fn size(&self) -> Option<Canvas> {
        self.size
    }

    /// Number of completed regenerations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Regenerates the whole field if `size` differs from the recorded size.
    ///
    /// Returns `true` when a regeneration happened.
    pub fn ensure_field(&mut self, size: Canvas, rng: &mut fastrand::Rng) -> bool {
        if self.size == Some(size) {
            return false;
        }
        self.regenerate(size, rng);
        true
    }

    #[tracing::instrument(level = "debug", skip(self, rng), fields(generation = self.generation + 1))]
    fn regenerate(&mut self, size: Canvas, rng: &mut fastrand::Rng) {
        let (w, h) = (size.width_f64(), size.height_f64());

        let stars = (0..self.config.star_count)
            .map(|_| Star {
                id: self.take_id(),
                pos: Point::new(rng.f64() * w, rng.f64() * h),
                size: 0.5 + rng.f64() * 1.5,
                brightness: MIN_BRIGHTNESS + rng.f64() * (MAX_BRIGHTNESS - MIN_BRIGHTNESS),
                twinkle_rate: (0.005 + rng.f64() * 0.015) * if rng.bool() { 1.0 } else { -1.0 },
                color: STAR_PALETTE[rng.usize(..STAR_PALETTE.len())],
            })
            .collect();

        let nebulae = (0..self.config.nebula_count)
            .map(|_| NebulaParticle {
                id: self.take_id(),
                pos: Point::new(rng.f64() * w, rng.f64() * h),
                size: 40.0 + rng.f64() * 80.0,
                opacity: 0.05 + rng.f64() * 0.15,
                velocity: Vec2::new((rng.f64() - 0.5) * 0.4, (rng.f64() - 0.5) * 0.4),
                color: NEBULA_PALETTE[rng.usize(..NEBULA_PALETTE.len())],
            })
            .collect();

        self.stars = stars;
        self.nebulae = nebulae;
        self.size = Some(size);
        self.generation += 1;
        tracing::debug!(
            width = size.width,
            height = size.height,
            stars = self.stars.len(),
            nebulae = self.nebulae.len(),
            "particle field regenerated"
        );
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// One animation tick: nebula drift and star twinkle.
    pub fn advance(&mut self) {
        let size = self.size.unwrap_or(Canvas::new(0, 0));
        for n in &mut self.nebulae {
            n.pos += n.velocity;
            if self.config.drift == DriftMode::Wrap {
                let margin = n.size * GLOW_SCALE;
                n.pos.x = wrap_with_margin(n.pos.x, size.width_f64(), margin);
                n.pos.y = wrap_with_margin(n.pos.y, size.height_f64(), margin);
            }
        }
        for s in &mut self.stars {
            let (b, r) = reflect_step(s.brightness, s.twinkle_rate, MIN_BRIGHTNESS, MAX_BRIGHTNESS);
            s.brightness = b;
            s.twinkle_rate = r;
        }
    }

    /// Paints nebulae first and stars on top, each as a glow plus a solid core.
    pub fn render(&self, surface: &mut dyn Surface) {
        for n in &self.nebulae {
            draw_particle(surface, n.pos, n.size, n.color, n.opacity as f32);
        }
        for s in &self.stars {
            draw_particle(surface, s.pos, s.size, s.color, s.brightness as f32);
        }
    }

    pub fn advance_and_render(&mut self, surface: &mut dyn Surface) {
        self.advance();
        self.render(surface);
    }
}

/// Glow fading to transparent plus an opaque core, both drawn at global alpha `alpha`.
fn draw_particle(surface: &mut dyn Surface, pos: Point, size: f64, color: Rgb, alpha: f32) {
    let glow_radius = size * GLOW_SCALE;
    surface.save();
    surface.set_global_alpha(alpha);
    surface.fill(
        &circle(pos, glow_radius),
        &gradient::particle_glow(pos, glow_radius, color, 1.0),
    );
    surface.fill(&circle(pos, size), &Paint::Solid(color.opaque()));
    surface.restore();
}

pub fn draw_space_backdrop(surface: &mut dyn Surface) {
    let size = surface.size();
    surface.fill(
        &rect_path(size.rect()),
        &gradient::space_vignette(size),
    );
}

/// Faint bars radiating from the center, rotating at a constant rate of wall-clock time.
pub fn draw_spiral_arms(surface: &mut dyn Surface, time_s: f64) {
    let size = surface.size();
    let reach = size.width_f64().max(size.height_f64()) * 0.6;
    let thickness = (size.height_f64() / 12.0).max(1.0);
    let base_angle = time_s * SPIRAL_RAD_PER_SEC;
    let arm = Rect::new(0.0, -thickness / 2.0, reach, thickness / 2.0);

    for i in 0..SPIRAL_ARMS {
        let color = NEBULA_PALETTE[i % NEBULA_PALETTE.len()];
        surface.save();
        surface.translate(size.center().to_vec2());
        surface.rotate(base_angle + (i as f64) * TAU / SPIRAL_ARMS as f64);
        surface.fill(
            &rect_path(arm),
            &Paint::Linear {
                start: Point::ZERO,
                end: Point::new(reach, 0.0),
                stops: vec![
                    ColorStop::new(0.0, color.with_alpha(0.12)),
                    ColorStop::new(1.0, color.with_alpha(0.0)),
                ],
            },
        );
        surface.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/starfield.rs"]
mod tests;
