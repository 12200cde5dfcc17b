use serde::{Deserialize, Serialize};

/// RGBA color on the 0-255 scale used by the host's drawing API
///
/// Channels are floats so interpolation stays smooth between frames; the
/// host truncates on its side when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0, 255.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 255.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a host-style `[r, g, b, a]` array
    pub const fn from_rgba(rgba: [f32; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Host-style `[r, g, b, a]` array
    pub const fn rgba(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn with_r(self, r: f32) -> Self {
        Self { r, ..self }
    }

    pub const fn with_g(self, g: f32) -> Self {
        Self { g, ..self }
    }

    pub const fn with_b(self, b: f32) -> Self {
        Self { b, ..self }
    }

    pub const fn with_a(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    /// Opaque white, the host's drawing default
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(rgba: [f32; 4]) -> Self {
        Self::from_rgba(rgba)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.rgba()
    }
}
