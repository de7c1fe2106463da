use std::{path::Path, sync::Arc};

use crate::foundation::error::{AnnotateError, AnnotateResult};

/// Font bytes located for captioning.
#[derive(Clone)]
pub struct LoadedFont {
    /// Raw font file contents (may be a collection).
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside `bytes`.
    pub index: u32,
    /// Where the font came from: a file path or the requested family name.
    pub source: String,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("source", &self.source)
            .finish()
    }
}

impl LoadedFont {
    /// Font data handle for the CPU rasteriser.
    pub fn to_cpu_font(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.bytes.as_ref().clone()),
            self.index,
        )
    }
}

/// Locate the caption font.
///
/// `family_or_path` names an existing font file, a system family, or one of the generic
/// families `sans-serif`, `serif` and `monospace`. System lookups pick the face closest to
/// `weight`. Failure is an [`AnnotateError::Font`], which callers treat as fatal.
pub fn resolve_font(family_or_path: &str, weight: u16) -> AnnotateResult<LoadedFont> {
    let trimmed = family_or_path.trim();
    if trimmed.is_empty() {
        return Err(AnnotateError::font("font family must be non-empty"));
    }

    let path = Path::new(trimmed);
    if path.is_file() {
        let bytes = std::fs::read(path).map_err(|e| {
            AnnotateError::font(format!("read font file '{}': {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded caption font from file");
        return Ok(LoadedFont {
            bytes: Arc::new(bytes),
            index: 0,
            source: path.display().to_string(),
        });
    }

    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    query_face(&db, trimmed, weight)
}

fn query_face(
    db: &usvg::fontdb::Database,
    family: &str,
    weight: u16,
) -> AnnotateResult<LoadedFont> {
    use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

    let lower = family.to_ascii_lowercase();
    let families = [match lower.as_str() {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        _ => Family::Name(family),
    }];
    let query = Query {
        families: &families,
        weight: Weight(weight),
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db.query(&query).ok_or_else(|| {
        AnnotateError::font(format!(
            "font '{family}' not found among {} system faces; pass a font file with --font",
            db.len()
        ))
    })?;
    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| AnnotateError::font(format!("font '{family}' could not be read")))?;

    tracing::debug!(family, index, "resolved caption font from system fonts");
    Ok(LoadedFont {
        bytes: Arc::new(bytes),
        index,
        source: family.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
