use super::*;

#[test]
fn photo_extensions_match_case_insensitively() {
    assert!(is_photo(Path::new("a.JPG")));
    assert!(is_photo(Path::new("dir/b.jpeg")));
    assert!(is_photo(Path::new("c.Png")));
    assert!(is_photo(Path::new("d.gif")));
    assert!(!is_photo(Path::new("notes.txt")));
    assert!(!is_photo(Path::new("photodata.csv")));
    assert!(!is_photo(Path::new("jpg")));
}

#[test]
fn list_photos_filters_and_sorts() {
    let dir = std::env::temp_dir().join(format!(
        "photo_annotator_list_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(dir.join("nested.jpg")).unwrap();
    for name in ["c.jpg", "a.PNG", "b.gif", "readme.md"] {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    let names: Vec<String> = list_photos(&dir)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.PNG", "b.gif", "c.jpg"]);
}

#[test]
fn list_photos_missing_dir_errors() {
    assert!(list_photos(Path::new("/definitely/not/a/photo/dir")).is_err());
}

#[test]
fn default_output_is_sibling_prints_dir() {
    let out = default_output_dir(Path::new("/jobs/site/photos"));
    assert_eq!(out, Path::new("/jobs/site/photos/../Prints"));
}
