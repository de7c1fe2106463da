use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::AnnotateResult;

/// Raster extensions the drivers pick up, compared case-insensitively.
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Directory name, next to the photo directory, that receives captioned copies.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "Prints";

/// Whether `path` has one of [`PHOTO_EXTENSIONS`].
pub fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|known| e.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Photo files directly inside `dir`, sorted by file name.
pub fn list_photos(dir: &Path) -> AnnotateResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read photo dir '{}'", dir.display()))?;

    let mut photos = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list photo dir '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_photo(&path) {
            photos.push(path);
        }
    }
    photos.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(photos)
}

/// `<images>/../Prints`.
pub fn default_output_dir(images_dir: &Path) -> PathBuf {
    images_dir.join("..").join(DEFAULT_OUTPUT_DIR_NAME)
}

/// Create `dir` if needed.
pub fn ensure_output_dir(dir: &Path) -> AnnotateResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/photos.rs"]
mod tests;
