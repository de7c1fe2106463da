use crate::foundation::error::{AnnotateError, AnnotateResult};

pub use kurbo::Point;

/// Pixel dimensions of the photo being captioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Construct a [`Canvas`].
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Length of the shorter side.
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }

    /// Dimensions as `u16`, the limit of the CPU rasteriser.
    pub fn as_u16(self) -> AnnotateResult<(u16, u16)> {
        let w: u16 = self.width.try_into().map_err(|_| {
            AnnotateError::validation(format!("image width {} exceeds u16", self.width))
        })?;
        let h: u16 = self.height.try_into().map_err(|_| {
            AnnotateError::validation(format!("image height {} exceeds u16", self.height))
        })?;
        Ok((w, h))
    }
}

/// Straight (non-premultiplied) RGBA8 colour as written in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; opaque when omitted.
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque colour from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour as a `vello_cpu` paint.
    pub fn to_cpu_color(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
