use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    assets::color::parse_hex,
    foundation::{
        core::Fps,
        error::{FaceError, FaceResult},
    },
    presets::agents::find_preset,
    render::{backend::RenderSettings, pipeline::Variant},
    scene::{face::FaceParams, starfield::FieldConfig},
};

/// Environment variable that replaces [`FaceConfig::seed`].
pub const SEED_ENV: &str = "AGENTFACE_SEED";

/// Largest surface edge the CPU backend accepts.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Everything needed to render a face, as loaded from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceConfig {
    pub width: u32,
    pub height: u32,
    pub variant: Variant,
    pub fps: Fps,
    pub seed: u64,
    pub mouth_scale: f64,
    pub eye_scale: f64,
    /// Face color as `#rrggbb`; wins over the agent preset color.
    pub color: Option<String>,
    /// Built-in agent preset id.
    pub agent: Option<String>,
    /// Straight RGBA8 background; transparent when absent.
    pub clear_rgba: Option<[u8; 4]>,
    pub field: FieldConfig,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            variant: Variant::default(),
            fps: Fps::default(),
            seed: 1,
            mouth_scale: 0.0,
            eye_scale: 1.0,
            color: None,
            agent: None,
            clear_rgba: None,
            field: FieldConfig::default(),
        }
    }
}

impl FaceConfig {
    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FaceResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| FaceError::config(format!("parse face config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> FaceResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a config file on disk.
    pub fn from_json_path(path: impl AsRef<Path>) -> FaceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FaceError::config(format!("open face config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> FaceResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FaceError::validation("width and height must be > 0"));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(FaceError::validation(format!(
                "surface {}x{} exceeds {MAX_DIMENSION}px",
                self.width, self.height
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.mouth_scale.is_finite() || !self.eye_scale.is_finite() {
            return Err(FaceError::validation(
                "mouth_scale and eye_scale must be finite",
            ));
        }
        if let Some(id) = self.agent.as_deref()
            && find_preset(id).is_none()
        {
            return Err(FaceError::validation(format!("unknown agent preset '{id}'")));
        }
        if let Some(color) = self.color.as_deref()
            && parse_hex(color).is_none()
        {
            tracing::warn!(color, "unparseable face color, default will be used");
        }
        Ok(())
    }

    /// Applies `AGENTFACE_SEED` from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary variable lookup. Unparseable values are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let Some(raw) = lookup(SEED_ENV) else {
            return;
        };
        match raw.trim().parse::<u64>() {
            Ok(seed) => self.seed = seed,
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid {SEED_ENV}"),
        }
    }

    /// Explicit color, else the agent preset's body color.
    pub fn resolved_color(&self) -> Option<String> {
        self.color.clone().or_else(|| {
            self.agent
                .as_deref()
                .and_then(find_preset)
                .map(|a| a.body_color)
        })
    }

    pub fn face_params(&self) -> FaceParams {
        FaceParams {
            mouth_scale: self.mouth_scale,
            eye_scale: self.eye_scale,
            color: self.resolved_color(),
        }
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            clear_rgba: self.clear_rgba,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
