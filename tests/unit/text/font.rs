use super::*;

#[test]
fn blank_family_is_a_font_error() {
    let err = resolve_font("   ", 700).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn empty_database_reports_missing_font() {
    let db = usvg::fontdb::Database::new();
    let err = query_face(&db, "Arial", 700).unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("'Arial' not found"));
}

#[test]
fn unknown_family_is_fatal() {
    let err = resolve_font("No Such Caption Family 7f3a", 700).unwrap_err();
    assert!(matches!(err, AnnotateError::Font(_)));
}

#[test]
fn existing_file_is_read_verbatim() {
    let dir = std::env::temp_dir().join(format!("photo_annotator_font_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("fake.ttf");
    std::fs::write(&path, b"not really a font").unwrap();

    let font = resolve_font(path.to_str().unwrap(), 400).unwrap();
    assert_eq!(font.bytes.as_slice(), b"not really a font");
    assert_eq!(font.index, 0);
    assert!(font.source.ends_with("fake.ttf"));
}
