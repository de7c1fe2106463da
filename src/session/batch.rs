use std::path::{Path, PathBuf};

use crate::{
    caption::annotator::Compositor,
    catalog::metadata::MetadataRow,
    catalog::photos::ensure_output_dir,
    catalog::timestamp::{TimestampSource, batch_date},
    foundation::error::AnnotateResult,
    session::captions::batch_captions,
};

/// Inputs for [`run_batch`].
#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Directory table file names are resolved against.
    pub images_dir: PathBuf,
    /// Directory captioned copies are written to.
    pub output_dir: PathBuf,
    /// Fixed last line of every right caption.
    pub signature: String,
}

/// Outcome of a metadata-driven run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Written outputs.
    pub annotated: Vec<PathBuf>,
    /// Source photos named by the table that do not exist.
    pub missing: Vec<PathBuf>,
    /// Photos whose captioning failed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
    /// Table lines without a file name.
    pub skipped_lines: Vec<u64>,
}

/// Caption every photo named in `rows`, keeping each source's file name.
///
/// Missing photos and per-photo failures are recorded and skipped; a missing font aborts.
pub fn run_batch<C, T>(
    rows: &[MetadataRow],
    opts: &BatchOptions,
    compositor: &mut C,
    timestamps: &mut T,
) -> AnnotateResult<BatchReport>
where
    C: Compositor + ?Sized,
    T: TimestampSource + ?Sized,
{
    ensure_output_dir(&opts.output_dir)?;
    let mut report = BatchReport::default();

    for row in rows {
        let Some(file) = row.file_name.as_deref() else {
            tracing::warn!(line = row.line, "metadata row has no file name");
            report.skipped_lines.push(row.line);
            continue;
        };

        let source = opts.images_dir.join(file);
        if !source.is_file() {
            tracing::warn!(source = %source.display(), "image not found");
            report.missing.push(source);
            continue;
        }
        let Some(output_file) = Path::new(file).file_name() else {
            tracing::warn!(line = row.line, file, "metadata file name has no final component");
            report.skipped_lines.push(row.line);
            continue;
        };
        let output = opts.output_dir.join(output_file);

        let date = batch_date(timestamps.embedded_timestamp(&source), row.date.as_deref());
        let (left, right) = batch_captions(row, file, &opts.signature, &date);

        match compositor.annotate_file(&source, &left, &right, &output) {
            Ok(()) => report.annotated.push(output),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                tracing::warn!(source = %source.display(), %err, "could not annotate photo");
                report.failed.push((source, err.to_string()));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/session/batch.rs"]
mod tests;
