//! Agentface draws an animated, expressive avatar face for voice agents.
//!
//! A host calls [`FaceRenderer::render_basic_face`] once per animation tick with two
//! expressiveness scalars (mouth openness and eye openness) and an optional face color. The
//! renderer clears the surface and paints a shaded disc with eyes and a lens-shaped mouth,
//! optionally over a starfield and energy effects.
//!
//! # Pieces
//!
//! - [`Surface`]: the immediate-mode drawing target. [`CpuSurface`] rasterizes with
//!   `vello_cpu`; [`RecordingSurface`] records draw commands for inspection.
//! - [`ParticleField`]: stars and nebulae that persist across frames and regenerate only
//!   when the surface size changes.
//! - [`Variant`]: which layers a frame paints ([`Variant::passes`]), back to front.
//! - [`FaceConfig`]: JSON configuration used by the `agentface` binary.
//! - Agent presets: [`create_new_agent`], [`builtin_agents`], [`find_preset`].
//!
//! Pixels leave [`CpuSurface`] as **premultiplied** RGBA8; use
//! [`FrameRGBA::to_straight_rgba8`] before handing them to an image encoder.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod effects;
mod foundation;
mod presets;
mod render;
mod scene;

pub use assets::color::{
    DEFAULT_FACE_HEX, FALLBACK_RGB, Rgb, Rgba, adjust_color, face_color, hex_to_rgb, parse_hex,
};
pub use config::settings::{FaceConfig, MAX_DIMENSION, SEED_ENV};
pub use foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Vec2};
pub use foundation::error::{FaceError, FaceResult};
pub use presets::agents::{
    AGENT_COLORS, Agent, AgentOverrides, NEW_AGENT_VOICES, Voice, builtin_agents,
    create_new_agent, find_preset, mortanas_press_bot,
};
pub use render::backend::{FrameRGBA, RenderSettings};
pub use render::cpu::CpuSurface;
pub use render::pipeline::{FaceRenderer, LayerPass, Variant};
pub use render::surface::{
    ColorStop, DrawCmd, DrawKind, DrawState, Paint, RecordingSurface, StrokeStyle, Surface,
};
pub use scene::energy::{RING_COUNT, SPARK_COUNT, ring_dash_offset, ring_radius, spark_positions};
pub use scene::face::{EYE_BIAS, FaceGeometry, FaceParams, MOUTH_BIAS_PER_PX, MOUTH_INNER_RATIO};
pub use scene::gradient::{
    LightSource, eye_gradient, face_gradient, glow_gradient, mouth_gradient, particle_glow,
    space_vignette,
};
pub use scene::shapes::{circle, mouth_lens, rect_path};
pub use scene::starfield::{
    DriftMode, FieldConfig, GLOW_SCALE, MAX_BRIGHTNESS, MIN_BRIGHTNESS, NEBULA_PALETTE,
    NebulaParticle, ParticleField, STAR_PALETTE, Star,
};
