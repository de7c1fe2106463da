/// Font identity and pixel size a caption is measured and drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Family name as registered with the layout engine.
    pub family: String,
    /// Font size in pixels.
    pub size_px: f32,
}

impl FontSpec {
    /// Construct a [`FontSpec`].
    pub fn new(family: impl Into<String>, size_px: f32) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }
}

/// Rendered-width oracle used by [`wrap_text`].
///
/// Implementations must be deterministic: the same text and font always measure the same.
/// Any `FnMut(&str, &FontSpec) -> f32` closure is a measurer, which keeps wrapping testable
/// without a shaping backend.
pub trait TextMeasurer {
    /// Advance width of `text` rendered on a single line, in pixels.
    fn measure_text_px(&mut self, text: &str, font: &FontSpec) -> f32;
}

impl<F> TextMeasurer for F
where
    F: FnMut(&str, &FontSpec) -> f32,
{
    fn measure_text_px(&mut self, text: &str, font: &FontSpec) -> f32 {
        self(text, font)
    }
}

/// Greedy word wrap of `text` to `max_width_px`.
///
/// Every `\n` is a hard break and each paragraph is wrapped on its own. A paragraph that
/// already fits is emitted verbatim (whitespace included, an empty paragraph yields an empty
/// line). Otherwise words are packed greedily with single spaces; a word that is wider than
/// `max_width_px` on its own is emitted alone and allowed to overflow.
pub fn wrap_text<M>(
    text: &str,
    font: &FontSpec,
    max_width_px: f32,
    measurer: &mut M,
) -> Vec<String>
where
    M: TextMeasurer + ?Sized,
{
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        if measurer.measure_text_px(paragraph, font) <= max_width_px {
            lines.push(paragraph.to_string());
        } else {
            wrap_paragraph(paragraph, font, max_width_px, measurer, &mut lines);
        }
    }
    lines
}

fn wrap_paragraph<M>(
    paragraph: &str,
    font: &FontSpec,
    max_width_px: f32,
    measurer: &mut M,
    lines: &mut Vec<String>,
) where
    M: TextMeasurer + ?Sized,
{
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    let mut current = String::new();
    let mut i = 0;

    while i < words.len() {
        let word = words[i];
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        // NaN widths or bounds count as overflow.
        if measurer.measure_text_px(&candidate, font) <= max_width_px {
            current = candidate;
            i += 1;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        // Overflowing word: no character-level splitting.
        if !(measurer.measure_text_px(word, font) <= max_width_px) {
            lines.push(word.to_string());
            i += 1;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
