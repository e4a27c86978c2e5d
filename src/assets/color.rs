use std::fmt;

use serde::{Deserialize, Serialize};

/// Color used when a face color is missing or malformed.
pub const DEFAULT_FACE_HEX: &str = "#4285f4";

/// Channel values substituted for any hex string that does not parse.
pub const FALLBACK_RGB: Rgb = Rgb::new(66, 133, 244);

/// An opaque 8-bit sRGB color.
///
/// Displays as a CSS-style `rgb(r, g, b)` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }

    /// Adds `amount` to every channel, clamping each one to `0..=255`.
    pub fn offset(self, amount: i32) -> Self {
        let ch = |c: u8| (i32::from(c).saturating_add(amount)).clamp(0, 255) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// 8-bit color channels with a straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        c.opaque()
    }
}

/// Parses `#RRGGBB` (the hash is optional, hex digits are case-insensitive).
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Like [`parse_hex`], but any malformed input resolves to [`FALLBACK_RGB`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(FALLBACK_RGB)
}

/// Lightens (positive `amount`) or darkens (negative) a hex color channel-wise.
pub fn adjust_color(hex: &str, amount: i32) -> Rgb {
    hex_to_rgb(hex).offset(amount)
}

/// Resolves an optional face color, substituting the default for `None`.
pub fn face_color(color: Option<&str>) -> Rgb {
    hex_to_rgb(color.unwrap_or(DEFAULT_FACE_HEX))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
