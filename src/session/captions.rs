//! Caption text assembly for both drivers.

use crate::{catalog::metadata::MetadataRow, session::prompt::PhotoFields};

/// `<address>_<index>.jpg` with spaces and path separators replaced by `_`.
pub fn output_name(address: &str, index: usize) -> String {
    format!("{address}_{index}.jpg")
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect()
}

/// Left and right captions for a prompted photo.
pub fn interactive_captions(
    output_name: &str,
    fields: &PhotoFields,
    signature: &str,
    date: &str,
) -> (String, String) {
    let left = format!("{output_name}\n{}\n{}", fields.location, fields.comment);
    let right = format!("{}\n{signature}\n{date}", fields.photographer);
    (left, right)
}

/// Left and right captions for a metadata row.
///
/// Absent fields are left out rather than rendered as blank lines, except that the file
/// name and date lines always end with a newline.
pub fn batch_captions(
    row: &MetadataRow,
    file_name: &str,
    signature: &str,
    date: &str,
) -> (String, String) {
    let mut left = format!("{file_name}\n");
    if let Some(location) = &row.location {
        left.push_str(location);
        left.push('\n');
    }
    if let Some(comment) = &row.comment {
        left.push_str(comment);
    }

    let mut right = format!("{date}\n");
    if let Some(photographer) = &row.photographer {
        right.push_str(photographer);
        right.push('\n');
    }
    right.push_str(signature);

    (left, right)
}
