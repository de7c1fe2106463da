use std::path::Path;

use anyhow::Context;
use image::{ColorType, DynamicImage, ImageFormat};

use crate::foundation::error::{AnnotateError, AnnotateResult};

/// Decode a photo from disk, sniffing the format from its contents.
pub fn load_photo(path: &Path) -> AnnotateResult<DynamicImage> {
    let reader = image::ImageReader::open(path)
        .with_context(|| format!("open photo '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff photo format '{}'", path.display()))?;
    let img = reader
        .decode()
        .with_context(|| format!("decode photo '{}'", path.display()))?;
    Ok(img)
}

/// Convert `img` back to the pixel layout `like` it was decoded with.
pub fn restore_color_type(img: DynamicImage, like: ColorType) -> DynamicImage {
    if img.color() == like {
        return img;
    }
    match like {
        ColorType::L8 => DynamicImage::ImageLuma8(img.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(img.to_rgb8()),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(img.to_rgba8()),
        ColorType::L16 => DynamicImage::ImageLuma16(img.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(img.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(img.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(img.to_rgba16()),
        ColorType::Rgb32F => DynamicImage::ImageRgb32F(img.to_rgb32f()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(img.to_rgba32f()),
        _ => img,
    }
}

/// Encode `img` to `path`, overwriting, with the format taken from the file extension.
///
/// Formats that cannot hold the pixel layout are narrowed first: JPEG gets 8-bit RGB or luma.
pub fn save_photo(img: &DynamicImage, path: &Path) -> AnnotateResult<()> {
    let format = ImageFormat::from_path(path).map_err(|_| {
        AnnotateError::validation(format!(
            "cannot infer image format from '{}'",
            path.display()
        ))
    })?;

    let narrowed;
    let out = match (format, img.color()) {
        (ImageFormat::Jpeg, ColorType::L8 | ColorType::Rgb8) => img,
        (ImageFormat::Jpeg, ColorType::L16 | ColorType::La8 | ColorType::La16) => {
            narrowed = DynamicImage::ImageLuma8(img.to_luma8());
            &narrowed
        }
        (ImageFormat::Jpeg, _) => {
            narrowed = DynamicImage::ImageRgb8(img.to_rgb8());
            &narrowed
        }
        _ => img,
    };

    out.save_with_format(path, format)
        .with_context(|| format!("write photo '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
