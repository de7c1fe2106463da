use std::{io::Read, path::Path};

use crate::foundation::error::{AnnotateError, AnnotateResult};

// Probe order per field: the first column present with a non-empty cell wins.
// The legacy export names come first.
const FILE_NAME_COLUMNS: &[&str] = &["SourceFile", "FileName"];
const LOCATION_COLUMNS: &[&str] = &["Location", "ImageDescription"];
const COMMENT_COLUMNS: &[&str] = &["UserComment", "Comment"];
const DATE_COLUMNS: &[&str] = &["DateTimeOriginal", "Date"];
const PHOTOGRAPHER_COLUMNS: &[&str] = &["Photographer", "Artist"];

/// Caption fields for one photo as found in the metadata table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataRow {
    /// 1-based line of the record in the table, for reporting.
    pub line: u64,
    /// Source photo, relative to the photo directory.
    pub file_name: Option<String>,
    /// Location or description.
    pub location: Option<String>,
    /// Free-form comment.
    pub comment: Option<String>,
    /// Capture date as written in the table.
    pub date: Option<String>,
    /// Photographer or artist.
    pub photographer: Option<String>,
}

/// Read a metadata CSV from disk.
pub fn read_metadata(path: &Path) -> AnnotateResult<Vec<MetadataRow>> {
    let f = std::fs::File::open(path).map_err(|e| {
        AnnotateError::metadata(format!("open metadata '{}': {e}", path.display()))
    })?;
    read_metadata_from(f)
}

/// Read metadata rows from any CSV source with a header row.
pub fn read_metadata_from<R: Read>(reader: R) -> AnnotateResult<Vec<MetadataRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AnnotateError::metadata(format!("read metadata header: {e}")))?
        .clone();
    let columns = ColumnMap::probe(&headers);
    if columns.file_name.is_empty() {
        tracing::warn!("metadata has neither a SourceFile nor a FileName column");
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record =
            record.map_err(|e| AnnotateError::metadata(format!("read metadata record: {e}")))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(MetadataRow {
            line,
            file_name: first_present(&record, &columns.file_name),
            location: first_present(&record, &columns.location),
            comment: first_present(&record, &columns.comment),
            date: first_present(&record, &columns.date),
            photographer: first_present(&record, &columns.photographer),
        });
    }
    Ok(rows)
}

/// Column indices per field, in probe order, limited to the columns present.
#[derive(Debug, Default)]
struct ColumnMap {
    file_name: Vec<usize>,
    location: Vec<usize>,
    comment: Vec<usize>,
    date: Vec<usize>,
    photographer: Vec<usize>,
}

impl ColumnMap {
    fn probe(headers: &csv::StringRecord) -> Self {
        let find = |names: &[&str]| -> Vec<usize> {
            names
                .iter()
                .filter_map(|name| headers.iter().position(|h| h == *name))
                .collect()
        };
        Self {
            file_name: find(FILE_NAME_COLUMNS),
            location: find(LOCATION_COLUMNS),
            comment: find(COMMENT_COLUMNS),
            date: find(DATE_COLUMNS),
            photographer: find(PHOTOGRAPHER_COLUMNS),
        }
    }
}

fn first_present(record: &csv::StringRecord, columns: &[usize]) -> Option<String> {
    columns
        .iter()
        .filter_map(|&i| record.get(i))
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/metadata.rs"]
mod tests;
