use crate::{
    foundation::core::{Canvas, Point},
    foundation::error::{AnnotateError, AnnotateResult},
    text::wrap::{FontSpec, TextMeasurer, wrap_text},
};

/// Size-derived caption metrics for one photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionGeometry {
    /// Font size and line pitch in pixels.
    pub font_size: u32,
    /// Distance of both blocks from the image edges.
    pub margin: u32,
    /// Width bound shared by both blocks; may be negative on degenerate images.
    pub max_text_width: i64,
}

impl CaptionGeometry {
    /// `font_size = floor(min(w, h) / divisor)`, `margin = font_size`,
    /// `max_text_width = floor(w / 2) - margin`.
    pub fn for_canvas(canvas: Canvas, font_size_divisor: u32) -> Self {
        let font_size = canvas.min_side() / font_size_divisor.max(1);
        let margin = font_size;
        Self {
            font_size,
            margin,
            max_text_width: i64::from(canvas.width / 2) - i64::from(margin),
        }
    }
}

/// Which corner a caption block is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionSide {
    /// Bottom-left block, left-aligned.
    Left,
    /// Bottom-right block, right-aligned.
    Right,
}

/// One wrapped caption line with its top-left origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// Block the line belongs to.
    pub side: CaptionSide,
    /// Line text as wrapped.
    pub text: String,
    /// Top-left corner of the line box, before any shadow offset.
    pub origin: Point,
    /// Measured advance width.
    pub width: f64,
}

/// Fully positioned caption layout for one photo; drawing it needs no further measuring.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionPlan {
    /// Photo dimensions the plan was made for.
    pub canvas: Canvas,
    /// Derived size metrics.
    pub geometry: CaptionGeometry,
    /// Font every line is drawn with.
    pub font: FontSpec,
    /// Left block lines top to bottom, then right block lines top to bottom.
    pub lines: Vec<PlacedLine>,
}

impl CaptionPlan {
    /// Lines of one block, top to bottom.
    pub fn side(&self, side: CaptionSide) -> impl Iterator<Item = &PlacedLine> {
        self.lines.iter().filter(move |l| l.side == side)
    }
}

/// Wrap and position both caption blocks.
///
/// Each block's bottom sits `margin` pixels above the bottom edge; extra lines push the
/// block's top upward. Left lines start at `x = margin`; right lines end at `w - margin`.
pub fn plan_captions<M>(
    canvas: Canvas,
    font_size_divisor: u32,
    family: &str,
    left_text: &str,
    right_text: &str,
    measurer: &mut M,
) -> AnnotateResult<CaptionPlan>
where
    M: TextMeasurer + ?Sized,
{
    let geometry = CaptionGeometry::for_canvas(canvas, font_size_divisor);
    if geometry.font_size == 0 {
        return Err(AnnotateError::validation(format!(
            "image {}x{} is too small to caption (font size would be 0)",
            canvas.width, canvas.height
        )));
    }

    let font = FontSpec::new(family, geometry.font_size as f32);
    let max_width = geometry.max_text_width as f32;

    let left = wrap_text(left_text, &font, max_width, measurer);
    let right = wrap_text(right_text, &font, max_width, measurer);
    tracing::debug!(
        font_size = geometry.font_size,
        max_text_width = geometry.max_text_width,
        left_lines = left.len(),
        right_lines = right.len(),
        "wrapped captions"
    );

    let mut lines = Vec::with_capacity(left.len() + right.len());
    place_block(CaptionSide::Left, left, canvas, geometry, &font, measurer, &mut lines);
    place_block(CaptionSide::Right, right, canvas, geometry, &font, measurer, &mut lines);

    Ok(CaptionPlan {
        canvas,
        geometry,
        font,
        lines,
    })
}

fn place_block<M>(
    side: CaptionSide,
    wrapped: Vec<String>,
    canvas: Canvas,
    geometry: CaptionGeometry,
    font: &FontSpec,
    measurer: &mut M,
    out: &mut Vec<PlacedLine>,
) where
    M: TextMeasurer + ?Sized,
{
    let pitch = f64::from(geometry.font_size);
    let margin = f64::from(geometry.margin);
    let block_height = wrapped.len() as f64 * pitch;
    let mut y = f64::from(canvas.height) - margin - block_height;

    for text in wrapped {
        let width = f64::from(measurer.measure_text_px(&text, font));
        let x = match side {
            CaptionSide::Left => margin,
            CaptionSide::Right => f64::from(canvas.width) - margin - width,
        };
        out.push(PlacedLine {
            side,
            text,
            origin: Point::new(x, y),
            width,
        });
        y += pitch;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/layout.rs"]
mod tests;
