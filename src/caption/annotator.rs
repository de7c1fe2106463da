use std::path::Path;

use anyhow::Context;
use image::DynamicImage;

use crate::{
    assets::decode::{load_photo, restore_color_type, save_photo},
    caption::layout::{CaptionPlan, plan_captions},
    caption::style::CaptionStyle,
    foundation::core::Canvas,
    foundation::error::AnnotateResult,
    render::composite::{over_in_place, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
    render::cpu::CpuCaptionRasterizer,
    text::engine::TextLayoutEngine,
    text::font::{LoadedFont, resolve_font},
};

/// Anything that can caption a photo file into an output file.
///
/// Drivers depend on this seam rather than on [`Annotator`] directly.
pub trait Compositor {
    /// Caption `source` and write the result to `output`, overwriting it.
    fn annotate_file(
        &mut self,
        source: &Path,
        left_text: &str,
        right_text: &str,
        output: &Path,
    ) -> AnnotateResult<()>;
}

/// Caption compositor backed by Parley shaping and the `vello_cpu` rasteriser.
pub struct Annotator {
    style: CaptionStyle,
    font: LoadedFont,
    engine: TextLayoutEngine,
    rasterizer: CpuCaptionRasterizer,
}

impl Annotator {
    /// Resolve the style's font and build a compositor. A missing font is fatal.
    pub fn new(style: CaptionStyle) -> AnnotateResult<Self> {
        style.validate()?;
        let font = resolve_font(&style.font_family, style.font_weight)?;
        Self::with_font(style, font)
    }

    /// Build a compositor around already-loaded font bytes.
    pub fn with_font(style: CaptionStyle, font: LoadedFont) -> AnnotateResult<Self> {
        style.validate()?;
        let engine = TextLayoutEngine::new(&font)?;
        let rasterizer = CpuCaptionRasterizer::new(font.to_cpu_font());
        Ok(Self {
            style,
            font,
            engine,
            rasterizer,
        })
    }

    /// Active compositor configuration.
    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }

    /// Font the compositor draws with.
    pub fn font(&self) -> &LoadedFont {
        &self.font
    }

    /// Family name the caption font registered under.
    pub fn family_name(&self) -> &str {
        self.engine.family_name()
    }

    /// Wrap and position both captions for a photo of `canvas` size.
    pub fn plan(
        &mut self,
        canvas: Canvas,
        left_text: &str,
        right_text: &str,
    ) -> AnnotateResult<CaptionPlan> {
        let family = self.engine.family_name().to_string();
        plan_captions(
            canvas,
            self.style.font_size_divisor,
            &family,
            left_text,
            right_text,
            &mut self.engine,
        )
    }

    /// Burn both captions into a copy of `image`, keeping its pixel layout.
    pub fn annotate(
        &mut self,
        image: &DynamicImage,
        left_text: &str,
        right_text: &str,
    ) -> AnnotateResult<DynamicImage> {
        let canvas = Canvas::new(image.width(), image.height());
        let plan = self.plan(canvas, left_text, right_text)?;
        let layer = self
            .rasterizer
            .rasterize(&plan, &self.style, &mut self.engine)?;

        let mut rgba = image.to_rgba8();
        premultiply_rgba8_in_place(&mut rgba);
        over_in_place(&mut rgba, layer.data_as_u8_slice())?;
        unpremultiply_rgba8_in_place(&mut rgba);

        Ok(restore_color_type(
            DynamicImage::ImageRgba8(rgba),
            image.color(),
        ))
    }
}

impl Compositor for Annotator {
    #[tracing::instrument(skip(self, left_text, right_text))]
    fn annotate_file(
        &mut self,
        source: &Path,
        left_text: &str,
        right_text: &str,
        output: &Path,
    ) -> AnnotateResult<()> {
        let photo = load_photo(source)?;
        let captioned = self.annotate(&photo, left_text, right_text)?;

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        save_photo(&captioned, output)?;

        tracing::info!(output = %output.display(), "annotated image saved");
        Ok(())
    }
}
