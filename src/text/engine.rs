use crate::{
    foundation::error::{AnnotateError, AnnotateResult},
    text::font::LoadedFont,
    text::wrap::{FontSpec, TextMeasurer},
};

/// Parley-backed shaping for single caption lines.
///
/// The caption font is registered once at construction; every layout afterwards resolves its
/// family by name, so measuring and drawing always agree on the same face.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    weight: parley::fontique::FontWeight,
    style: parley::fontique::FontStyle,
}

impl TextLayoutEngine {
    /// Register `font` with fresh Parley contexts.
    ///
    /// For collections, the family, weight and style of the face at `font.index` are pinned
    /// so shaping uses the same face the rasteriser draws with.
    pub fn new(font: &LoadedFont) -> AnnotateResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.to_vec()), None);

        let faces = families.iter().enumerate().flat_map(|(fam, (_, infos))| {
            infos
                .iter()
                .enumerate()
                .map(move |(face, info)| ((fam, face), info.index()))
        });
        let (fam, face) = pick_face(faces, font.index).ok_or_else(|| {
            AnnotateError::font(format!("no font families registered from '{}'", font.source))
        })?;
        let (family_id, infos) = &families[fam];
        let info = &infos[face];
        if info.index() != font.index {
            tracing::warn!(
                wanted = font.index,
                got = info.index(),
                source = %font.source,
                "caption face not registered; measuring with the first face"
            );
        }

        let family_name = font_ctx
            .collection
            .family_name(*family_id)
            .ok_or_else(|| AnnotateError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            weight: info.weight(),
            style: info.style(),
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Family name the caption font registered under.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// [`FontSpec`] for the registered family at `size_px`.
    pub fn font_spec(&self, size_px: f32) -> FontSpec {
        FontSpec::new(self.family_name.clone(), size_px)
    }

    /// Shape `text` as one unbroken line with its origin at the top-left of the line box.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &FontSpec,
    ) -> AnnotateResult<parley::Layout<()>> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(AnnotateError::validation(
                "font size must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(self.weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(self.style));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasurer for TextLayoutEngine {
    fn measure_text_px(&mut self, text: &str, font: &FontSpec) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self.layout_line(text, font) {
            Ok(layout) => layout.width(),
            Err(err) => {
                tracing::warn!(%err, "unmeasurable text treated as zero width");
                0.0
            }
        }
    }
}

/// First entry whose face index is `index`, else the first entry at all.
fn pick_face<T: Copy>(faces: impl IntoIterator<Item = (T, u32)>, index: u32) -> Option<T> {
    let mut first = None;
    for (key, face_index) in faces {
        if face_index == index {
            return Some(key);
        }
        first.get_or_insert(key);
    }
    first
}
