use std::path::Path;

/// Right-caption date used in batch mode when neither the photo nor the table has one.
pub const NO_TIMESTAMP: &str = "NO TIMESTAMP FOUND";

/// Source of the capture timestamp embedded in a photo file.
///
/// Returning `None` is never an error; drivers fall back to the table, the wall clock or
/// [`NO_TIMESTAMP`].
pub trait TimestampSource {
    /// Capture timestamp of `photo`, if the file carries one.
    fn embedded_timestamp(&mut self, photo: &Path) -> Option<String>;
}

impl<F> TimestampSource for F
where
    F: FnMut(&Path) -> Option<String>,
{
    fn embedded_timestamp(&mut self, photo: &Path) -> Option<String> {
        self(photo)
    }
}

/// Timestamp source for builds without an EXIF reader: never finds one.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEmbeddedTimestamps;

impl TimestampSource for NoEmbeddedTimestamps {
    fn embedded_timestamp(&mut self, _photo: &Path) -> Option<String> {
        None
    }
}

/// Current local time as `HH:MM:SS`.
pub fn wall_clock_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Batch-mode date: embedded, then table, then [`NO_TIMESTAMP`].
pub fn batch_date(embedded: Option<String>, table: Option<&str>) -> String {
    embedded
        .filter(|s| !s.trim().is_empty())
        .or_else(|| table.map(str::to_string))
        .unwrap_or_else(|| NO_TIMESTAMP.to_string())
}

/// Interactive-mode date: embedded, then the wall clock.
pub fn interactive_date(embedded: Option<String>) -> String {
    embedded
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(wall_clock_time)
}
