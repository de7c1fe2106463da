use super::*;

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "photo_annotator_decode_{tag}_{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn load_photo_sniffs_png_regardless_of_extension() {
    let dir = scratch_dir("sniff");
    let path = dir.join("actually_png.jpg");
    let img = image::RgbImage::from_pixel(4, 3, image::Rgb([10, 20, 30]));
    DynamicImage::ImageRgb8(img)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let loaded = load_photo(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (4, 3));
    assert_eq!(loaded.color(), ColorType::Rgb8);
}

#[test]
fn load_photo_missing_file_errors() {
    let dir = scratch_dir("missing");
    assert!(load_photo(&dir.join("nope.png")).is_err());
}

#[test]
fn restore_color_type_converts_back_to_source_layout() {
    let rgba = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255])));
    assert_eq!(restore_color_type(rgba.clone(), ColorType::Rgb8).color(), ColorType::Rgb8);
    assert_eq!(restore_color_type(rgba.clone(), ColorType::L8).color(), ColorType::L8);
    assert_eq!(restore_color_type(rgba, ColorType::Rgba8).color(), ColorType::Rgba8);
}

#[test]
fn save_photo_drops_alpha_for_jpeg() {
    let dir = scratch_dir("jpeg");
    let path = dir.join("out.jpg");
    let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(8, 8, image::Rgba([200, 100, 50, 128])));
    save_photo(&img, &path).unwrap();

    let back = load_photo(&path).unwrap();
    assert_eq!(back.color(), ColorType::Rgb8);
    assert_eq!((back.width(), back.height()), (8, 8));
}

#[test]
fn save_photo_overwrites_existing_png() {
    let dir = scratch_dir("overwrite");
    let path = dir.join("out.png");
    std::fs::write(&path, b"stale").unwrap();
    let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(3, 5, image::Luma([7])));
    save_photo(&img, &path).unwrap();

    let back = load_photo(&path).unwrap();
    assert_eq!(back.color(), ColorType::L8);
    assert_eq!(back.height(), 5);
}

#[test]
fn save_photo_requires_known_extension() {
    let dir = scratch_dir("ext");
    let img = DynamicImage::ImageRgb8(image::RgbImage::new(1, 1));
    let err = save_photo(&img, &dir.join("out.unknownext")).unwrap_err();
    assert!(matches!(err, AnnotateError::Validation(_)));
}
