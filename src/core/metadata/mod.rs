//! # Metadata Module
//!
//! Works out when a photo was taken.
//!
//! The EXIF `DateTimeOriginal` tag is tried first. EXIF is found in JPEG
//! and TIFF files, and in PNG, WebP and HEIF containers when the camera or
//! editor wrote it. Anything else falls back to the file's modification
//! time in local wall-clock time.

use chrono::{DateTime, Local, NaiveDateTime};
use exif::{In, Reader, Tag, Value};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::time::SystemTime;

/// EXIF timestamp layout: "YYYY:MM:DD HH:MM:SS"
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Capture timestamp of a photo
///
/// Never fails: an unreadable file, missing tag or malformed value all
/// fall through to the modification time, and a file without one of
/// those yields the Unix epoch.
pub fn capture_date(path: &Path) -> NaiveDateTime {
    if let Some(date) = exif_capture_date(path) {
        return date;
    }

    tracing::debug!(path = %path.display(), "no EXIF capture date, using modification time");
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH);
    local_datetime(modified)
}

/// Read `DateTimeOriginal` from the file's EXIF block
pub fn exif_capture_date(path: &Path) -> Option<NaiveDateTime> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut reader).ok()?;

    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref vec) => {
            let bytes = vec.first()?;
            let s = std::str::from_utf8(bytes).ok()?;
            parse_exif_datetime(s)
        }
        _ => None,
    }
}

/// Parse the fixed EXIF layout, tolerating NUL padding
pub fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim_end_matches('\0').trim();
    NaiveDateTime::parse_from_str(trimmed, EXIF_DATETIME_FORMAT).ok()
}

/// Convert a filesystem time to naive local time
pub fn local_datetime(time: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(time).naive_local()
}
