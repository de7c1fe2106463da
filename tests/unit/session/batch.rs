use super::*;
use crate::foundation::error::AnnotateError;

#[derive(Default)]
struct RecordingCompositor {
    calls: Vec<(PathBuf, String, String, PathBuf)>,
    fatal_for: Option<&'static str>,
    failing_for: Option<&'static str>,
}

impl Compositor for RecordingCompositor {
    fn annotate_file(
        &mut self,
        source: &Path,
        left_text: &str,
        right_text: &str,
        output: &Path,
    ) -> AnnotateResult<()> {
        if let Some(name) = self.fatal_for
            && source.file_name().is_some_and(|f| f == name)
        {
            return Err(AnnotateError::font("no font"));
        }
        if let Some(name) = self.failing_for
            && source.file_name().is_some_and(|f| f == name)
        {
            return Err(AnnotateError::validation("unreadable photo"));
        }
        self.calls.push((
            source.to_path_buf(),
            left_text.to_string(),
            right_text.to_string(),
            output.to_path_buf(),
        ));
        Ok(())
    }
}

fn workspace(tag: &str, names: &[&str]) -> BatchOptions {
    let root = std::env::temp_dir().join(format!(
        "photo_annotator_batch_{tag}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let images = root.join("photos");
    std::fs::create_dir_all(&images).unwrap();
    for n in names {
        std::fs::write(images.join(n), b"x").unwrap();
    }
    BatchOptions {
        images_dir: images,
        output_dir: root.join("Prints"),
        signature: "Sig".to_string(),
    }
}

fn row(line: u64, file: Option<&str>) -> MetadataRow {
    MetadataRow {
        line,
        file_name: file.map(str::to_string),
        ..MetadataRow::default()
    }
}

fn no_exif(_: &Path) -> Option<String> {
    None
}

#[test]
fn rows_keep_source_file_names() {
    let opts = workspace("names", &["a.jpg", "b.png"]);
    let rows = vec![
        MetadataRow {
            location: Some("Roof".into()),
            comment: Some("Loose tiles".into()),
            photographer: Some("Kim".into()),
            date: Some("2021-02-03".into()),
            ..row(2, Some("a.jpg"))
        },
        row(3, Some("b.png")),
    ];
    let mut comp = RecordingCompositor::default();

    let report = run_batch(&rows, &opts, &mut comp, &mut no_exif).unwrap();

    assert_eq!(
        report.annotated,
        vec![opts.output_dir.join("a.jpg"), opts.output_dir.join("b.png")]
    );
    assert_eq!(comp.calls[0].1, "a.jpg\nRoof\nLoose tiles");
    assert_eq!(comp.calls[0].2, "2021-02-03\nKim\nSig");
    assert_eq!(comp.calls[1].2, "NO TIMESTAMP FOUND\nSig");
}

#[test]
fn embedded_timestamp_beats_table_date() {
    let opts = workspace("exif", &["a.jpg"]);
    let rows = vec![MetadataRow {
        date: Some("table".into()),
        ..row(2, Some("a.jpg"))
    }];
    let mut comp = RecordingCompositor::default();
    let mut exif = |_: &Path| Some("2019:09:09 09:09:09".to_string());

    run_batch(&rows, &opts, &mut comp, &mut exif).unwrap();
    assert_eq!(comp.calls[0].2, "2019:09:09 09:09:09\nSig");
}

#[test]
fn missing_photos_and_nameless_rows_are_skipped() {
    let opts = workspace("missing", &["a.jpg"]);
    let rows = vec![row(2, Some("gone.jpg")), row(3, None), row(4, Some("a.jpg"))];
    let mut comp = RecordingCompositor::default();

    let report = run_batch(&rows, &opts, &mut comp, &mut no_exif).unwrap();

    assert_eq!(report.missing, vec![opts.images_dir.join("gone.jpg")]);
    assert_eq!(report.skipped_lines, vec![3]);
    assert_eq!(report.annotated, vec![opts.output_dir.join("a.jpg")]);
    assert!(opts.output_dir.is_dir());
}

#[test]
fn nested_source_names_write_flat_outputs() {
    let opts = workspace("nested", &[]);
    std::fs::create_dir_all(opts.images_dir.join("day1")).unwrap();
    std::fs::write(opts.images_dir.join("day1").join("c.jpg"), b"x").unwrap();
    let rows = vec![row(2, Some("day1/c.jpg"))];
    let mut comp = RecordingCompositor::default();

    let report = run_batch(&rows, &opts, &mut comp, &mut no_exif).unwrap();
    assert_eq!(report.annotated, vec![opts.output_dir.join("c.jpg")]);
    assert_eq!(comp.calls[0].1, "day1/c.jpg\n");
}

#[test]
fn font_errors_abort_the_batch() {
    let opts = workspace("fatal", &["a.jpg", "b.jpg"]);
    let rows = vec![row(2, Some("a.jpg")), row(3, Some("b.jpg"))];
    let mut comp = RecordingCompositor {
        fatal_for: Some("a.jpg"),
        ..RecordingCompositor::default()
    };
    let err = run_batch(&rows, &opts, &mut comp, &mut no_exif).unwrap_err();
    assert!(err.is_fatal());
    assert!(comp.calls.is_empty());
}

#[test]
fn unreadable_photo_is_reported_and_batch_continues() {
    let opts = workspace("unreadable", &["a.jpg", "b.jpg"]);
    let rows = vec![row(2, Some("a.jpg")), row(3, Some("b.jpg"))];
    let mut comp = RecordingCompositor {
        failing_for: Some("a.jpg"),
        ..RecordingCompositor::default()
    };

    let report = run_batch(&rows, &opts, &mut comp, &mut no_exif).unwrap();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, opts.images_dir.join("a.jpg"));
    assert!(report.failed[0].1.contains("unreadable photo"));
    assert_eq!(report.annotated, vec![opts.output_dir.join("b.jpg")]);
    assert_eq!(comp.calls.len(), 1);
}
