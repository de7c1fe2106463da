use super::*;

#[test]
fn canvas_min_side_and_u16_limits() {
    assert_eq!(Canvas::new(800, 400).min_side(), 400);
    assert_eq!(Canvas::new(640, 480).as_u16().unwrap(), (640, 480));
    assert!(Canvas::new(70_000, 10).as_u16().is_err());
    assert!(Canvas::new(10, 70_000).as_u16().is_err());
}

#[test]
fn rgba8_alpha_defaults_to_opaque_when_omitted() {
    let c: Rgba8 = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
    assert_eq!(c, Rgba8 { r: 1, g: 2, b: 3, a: 255 });
}
