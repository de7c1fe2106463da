use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use kurbo::Vec2;

use crate::foundation::{
    core::Rgba8,
    error::{AnnotateError, AnnotateResult},
};

/// Environment variable that overrides [`CaptionStyle::font_family`].
pub const FONT_ENV_VAR: &str = "PHOTO_ANNOTATOR_FONT";

/// Compositor configuration.
///
/// Every field has a default, so a JSON config file only needs the keys it changes.
/// The margin is not configurable: it always equals the derived font size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionStyle {
    /// Font file path or system family name.
    pub font_family: String,
    /// Preferred weight for system family lookups (400 regular, 700 bold).
    pub font_weight: u16,
    /// `font_size = min(width, height) / font_size_divisor`.
    pub font_size_divisor: u32,
    /// Offset of the shadow pass relative to the face.
    pub shadow_offset: Vec2,
    /// Face colour.
    pub text_color: Rgba8,
    /// Shadow colour.
    pub shadow_color: Rgba8,
    /// Fixed line placed in every right-hand caption.
    pub signature: String,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_weight: 700,
            font_size_divisor: 40,
            shadow_offset: Vec2::new(3.0, 3.0),
            text_color: Rgba8::WHITE,
            shadow_color: Rgba8::BLACK,
            signature: "Municon West Coast".to_string(),
        }
    }
}

impl CaptionStyle {
    /// Read a style from a JSON file.
    pub fn load_json(path: &Path) -> AnnotateResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open caption style '{}'", path.display()))?;
        let style: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse caption style '{}'", path.display()))?;
        style.validate()?;
        Ok(style)
    }

    /// Apply the font override from [`FONT_ENV_VAR`], then an explicit one (which wins).
    pub fn with_font_overrides(mut self, explicit: Option<&str>) -> Self {
        if let Ok(v) = std::env::var(FONT_ENV_VAR)
            && !v.trim().is_empty()
        {
            self.font_family = v;
        }
        if let Some(v) = explicit {
            self.font_family = v.to_string();
        }
        self
    }

    /// Reject configurations that cannot produce a caption.
    pub fn validate(&self) -> AnnotateResult<()> {
        if self.font_family.trim().is_empty() {
            return Err(AnnotateError::validation("font_family must be non-empty"));
        }
        if self.font_size_divisor == 0 {
            return Err(AnnotateError::validation("font_size_divisor must be > 0"));
        }
        if !(1..=1000).contains(&self.font_weight) {
            return Err(AnnotateError::validation(
                "font_weight must be within 1..=1000",
            ));
        }
        if !self.shadow_offset.x.is_finite() || !self.shadow_offset.y.is_finite() {
            return Err(AnnotateError::validation("shadow_offset must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/style.rs"]
mod tests;
