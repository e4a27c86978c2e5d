use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{FrameIndex, Fps},
    render::surface::Surface,
    scene::{
        energy,
        face::{self, FaceGeometry, FaceParams},
        gradient::LightSource,
        starfield::{self, FieldConfig, ParticleField},
    },
};

/// How much decoration surrounds the face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Shaded face on a cleared surface.
    #[default]
    Flat,
    /// Face over an animated starfield and nebula backdrop.
    Starfield,
    /// Starfield plus energy rings, sparks, halo and a drifting light source.
    Energy,
}

/// One layer of the frame, in paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerPass {
    Background,
    EnergyRings,
    FaceShadow,
    Face,
    Eyes,
    Mouth,
}

impl Variant {
    /// Layers painted for this variant, back to front.
    pub fn passes(self) -> &'static [LayerPass] {
        use LayerPass::*;
        match self {
            Variant::Flat => &[FaceShadow, Face, Eyes, Mouth],
            Variant::Starfield => &[Background, FaceShadow, Face, Eyes, Mouth],
            Variant::Energy => &[Background, EnergyRings, FaceShadow, Face, Eyes, Mouth],
        }
    }

    pub fn light_source(self) -> LightSource {
        match self {
            Variant::Flat | Variant::Starfield => LightSource::Fixed,
            Variant::Energy => LightSource::Drifting,
        }
    }

    fn has_spiral_arms(self) -> bool {
        self == Variant::Energy
    }
}

/// Draws animated faces frame by frame.
///
/// The renderer owns the only cross-frame state: the particle field and the random source
/// used to (re)generate it. Everything else is recomputed from the frame inputs.
#[derive(Clone, Debug)]
pub struct FaceRenderer {
    variant: Variant,
    field: ParticleField,
    rng: fastrand::Rng,
}

impl FaceRenderer {
    pub fn new(variant: Variant, seed: u64) -> Self {
        Self::with_field_config(variant, seed, FieldConfig::default())
    }

    pub fn with_field_config(variant: Variant, seed: u64, field: FieldConfig) -> Self {
        Self::with_rng(variant, fastrand::Rng::with_seed(seed), field)
    }

    pub fn with_rng(variant: Variant, rng: fastrand::Rng, field: FieldConfig) -> Self {
        Self {
            variant,
            field: ParticleField::new(field),
            rng,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Clears `surface` and paints one complete frame at `time_s` seconds.
    #[tracing::instrument(level = "debug", skip_all, fields(variant = ?self.variant, time_s = time_s))]
    pub fn render_basic_face(&mut self, surface: &mut dyn Surface, params: &FaceParams, time_s: f64) {
        let size = surface.size();
        let geom = FaceGeometry::new(size, params);
        let base = params.base_color();
        let light = self.variant.light_source().offset(time_s);

        surface.clear();
        for &pass in self.variant.passes() {
            tracing::trace!(?pass, "layer");
            match pass {
                LayerPass::Background => {
                    starfield::draw_space_backdrop(surface);
                    if self.variant.has_spiral_arms() {
                        starfield::draw_spiral_arms(surface, time_s);
                    }
                    self.field.ensure_field(size, &mut self.rng);
                    self.field.advance_and_render(surface);
                }
                LayerPass::EnergyRings => {
                    energy::draw_halo(surface, geom.center, geom.radius, base);
                    energy::draw_energy_rings(surface, geom.center, geom.radius, base, time_s);
                    energy::draw_sparks(surface, geom.center, geom.radius, base, time_s);
                }
                LayerPass::FaceShadow => face::draw_face_shadow(surface, &geom),
                LayerPass::Face => face::draw_face(surface, &geom, base, light),
                LayerPass::Eyes => face::draw_eyes(surface, &geom),
                LayerPass::Mouth => face::draw_mouth(surface, &geom),
            }
        }
    }

    /// [`render_basic_face`](Self::render_basic_face) at the timestamp of `frame`.
    pub fn render_frame(
        &mut self,
        surface: &mut dyn Surface,
        params: &FaceParams,
        frame: FrameIndex,
        fps: Fps,
    ) {
        self.render_basic_face(surface, params, fps.frames_to_secs(frame.0));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
