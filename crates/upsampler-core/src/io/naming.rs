use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::consts::OUTPUT_TIMESTAMP_FORMAT;
use crate::dimensions::format_scale;

/// Output file name: `{source file name}_{scale}_{timestamp}.png`.
///
/// The source name keeps its own extension, so `cat.jpg` at 2x becomes
/// `cat.jpg_2.0_2024-05-01--12-30-00.png`.
pub fn output_file_name(source: &Path, scale: f64, timestamp: NaiveDateTime) -> String {
    let original = source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    format!(
        "{original}_{}_{}.png",
        format_scale(scale),
        timestamp.format(OUTPUT_TIMESTAMP_FORMAT)
    )
}

/// Path next to `source` for the resized output.
pub fn output_path(source: &Path, scale: f64, timestamp: NaiveDateTime) -> PathBuf {
    let name = output_file_name(source, scale, timestamp);
    match source.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Local wall-clock time, the timestamp used for a save action.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
