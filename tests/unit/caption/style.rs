use super::*;

#[test]
fn defaults_match_the_print_house_style() {
    let s = CaptionStyle::default();
    assert_eq!(s.font_size_divisor, 40);
    assert_eq!(s.shadow_offset, Vec2::new(3.0, 3.0));
    assert_eq!(s.text_color, Rgba8::WHITE);
    assert_eq!(s.shadow_color, Rgba8::BLACK);
    assert_eq!(s.font_weight, 700);
    s.validate().unwrap();
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let s: CaptionStyle =
        serde_json::from_str(r#"{"font_family":"DejaVu Sans","signature":"Acme"}"#).unwrap();
    assert_eq!(s.font_family, "DejaVu Sans");
    assert_eq!(s.signature, "Acme");
    assert_eq!(s.font_size_divisor, 40);
    assert_eq!(s.shadow_offset, Vec2::new(3.0, 3.0));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(serde_json::from_str::<CaptionStyle>(r#"{"font_colour":"red"}"#).is_err());
}

#[test]
fn validate_rejects_zero_divisor_and_blank_family() {
    let s = CaptionStyle {
        font_size_divisor: 0,
        ..CaptionStyle::default()
    };
    assert!(s.validate().is_err());

    let s = CaptionStyle {
        font_family: " ".to_string(),
        ..CaptionStyle::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn explicit_font_override_wins() {
    let s = CaptionStyle::default().with_font_overrides(Some("/fonts/Caption.ttf"));
    assert_eq!(s.font_family, "/fonts/Caption.ttf");
}

#[test]
fn load_json_reads_and_validates() {
    let dir = std::env::temp_dir().join(format!("photo_annotator_style_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{"font_size_divisor": 50}"#).unwrap();
    assert_eq!(CaptionStyle::load_json(&good).unwrap().font_size_divisor, 50);

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{"font_size_divisor": 0}"#).unwrap();
    assert!(CaptionStyle::load_json(&bad).is_err());

    assert!(CaptionStyle::load_json(&dir.join("missing.json")).is_err());
}
